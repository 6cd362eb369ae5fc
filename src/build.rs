//! Exports the [`build_index`] function which stitches together the steps of
//! building the listing page: discovering projects ([`crate::discover`]),
//! rendering them ([`crate::render`]), and writing the page to disk.

use crate::config::Config;
use crate::discover::{Discoverer, Error as DiscoverError};
use crate::project::Project;
use crate::render::{Error as RenderError, Renderer};
use log::info;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Builds the listing page from a [`Config`] object and returns the projects
/// it lists, in page order. The output file is overwritten.
pub fn build_index(config: &Config) -> Result<Vec<Project>> {
    let projects = Discoverer::new(&config.root_directory).discover()?;

    let html = match &config.template {
        Some(path) => {
            let source = read_template(path)?;
            Renderer::new(&source, &config.site)?.render(&projects)?
        }
        None => Renderer::builtin(&config.site)?.render(&projects)?,
    };

    std::fs::write(&config.output_file, html).map_err(|e| Error::WriteOutput {
        path: config.output_file.clone(),
        err: e,
    })?;
    info!(
        "wrote {} project(s) to `{}`",
        projects.len(),
        config.output_file.display()
    );

    Ok(projects)
}

fn read_template(path: &Path) -> Result<String> {
    use std::io::Read;
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .map_err(|e| Error::OpenTemplateFile {
            path: path.to_owned(),
            err: e,
        })?;
    Ok(contents)
}

pub type Result<T> = std::result::Result<T, Error>;

/// The error type for building the listing page.
#[derive(Debug)]
pub enum Error {
    /// Returned when the root directory can't be read.
    Discover(DiscoverError),

    /// Returned for errors parsing or executing the page template.
    Render(RenderError),

    /// Returned for I/O problems while reading a custom template file.
    OpenTemplateFile { path: PathBuf, err: std::io::Error },

    /// Returned for I/O problems while writing the output file.
    WriteOutput { path: PathBuf, err: std::io::Error },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Discover(err) => err.fmt(f),
            Error::Render(err) => err.fmt(f),
            Error::OpenTemplateFile { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::WriteOutput { path, err } => {
                write!(f, "Writing output file '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Discover(err) => Some(err),
            Error::Render(err) => Some(err),
            Error::OpenTemplateFile { path: _, err } => Some(err),
            Error::WriteOutput { path: _, err } => Some(err),
        }
    }
}

impl From<DiscoverError> for Error {
    /// Converts [`DiscoverError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: DiscoverError) -> Error {
        Error::Discover(err)
    }
}

impl From<RenderError> for Error {
    /// Converts [`RenderError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: RenderError) -> Error {
        Error::Render(err)
    }
}
