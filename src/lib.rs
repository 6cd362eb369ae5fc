//! The library code for the `prototype-index` listing page generator. A run
//! has two steps:
//!
//! 1. Discovering project directories under the root ([`crate::discover`]).
//!    A project is an immediate child directory holding an `index.html`; its
//!    optional `metadata.json` sidecar overrides the display fields derived
//!    from the directory name ([`crate::project`]).
//! 2. Rendering the sorted projects into a single HTML page
//!    ([`crate::render`]) and writing it to disk ([`crate::build`]).
//!
//! Nothing is cached between runs; every run rereads the root and overwrites
//! the output file.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod discover;
pub mod project;
pub mod render;
mod util;
pub mod value;
