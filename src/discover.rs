//! Defines the [`Discoverer`] and its [`Error`] type: the logic for finding
//! project directories under the root and building a [`Project`] for each.

use std::{fmt, path::Path};

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::{
    project::{Metadata, Project},
    util::read_optional,
};

/// Directory names that are never projects.
pub const IGNORED_DIRECTORIES: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    "assets",
    "shared-assets",
];

/// The file whose presence makes a directory a project.
pub const MARKER_FILE: &str = "index.html";

/// The optional per-project metadata file.
pub const METADATA_FILE: &str = "metadata.json";

/// Finds project directories among the immediate children of `root`.
pub struct Discoverer<'a> {
    root: &'a Path,
}

impl<'a> Discoverer<'a> {
    pub fn new(root: &'a Path) -> Discoverer<'a> {
        Discoverer { root }
    }

    /// Returns a [`Project`] for every qualifying child directory of the root,
    /// sorted by `name` in descending order. A child qualifies when it is a
    /// directory, its name isn't hidden or in [`IGNORED_DIRECTORIES`], and it
    /// contains a [`MARKER_FILE`].
    ///
    /// Problems inside a project directory never fail discovery; the only
    /// error is failing to read the root itself.
    pub fn discover(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        for result in WalkDir::new(self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = result?;
            if let Some(project) = self.project(&entry) {
                projects.push(project);
            }
        }

        // stable, so equal names keep walk order
        projects.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(projects)
    }

    fn project(&self, entry: &DirEntry) -> Option<Project> {
        let folder = match entry.file_name().to_str() {
            Some(folder) => folder,
            None => {
                debug!("skipping non-UTF-8 directory name {:?}", entry.file_name());
                return None;
            }
        };

        // `Path::is_dir` follows symlinks
        if !entry.path().is_dir() || !Self::is_candidate(folder) {
            return None;
        }
        if !entry.path().join(MARKER_FILE).is_file() {
            debug!("skipping `{}`: no {}", folder, MARKER_FILE);
            return None;
        }

        Some(Project::resolve(folder, Self::metadata(entry.path())))
    }

    /// Reports whether a directory name may be a project: it isn't hidden and
    /// isn't one of the [`IGNORED_DIRECTORIES`].
    pub fn is_candidate(name: &str) -> bool {
        !name.starts_with('.') && !IGNORED_DIRECTORIES.contains(&name)
    }

    /// Loads the sidecar for a project directory. A missing, unreadable, or
    /// malformed sidecar is `None`, and the project keeps its defaults.
    fn metadata(dir: &Path) -> Option<Metadata> {
        let path = dir.join(METADATA_FILE);
        let contents = match read_optional(&path) {
            Ok(contents) => contents?,
            Err(e) => {
                debug!("ignoring unreadable `{}`: {}", path.display(), e);
                return None;
            }
        };
        match Metadata::parse(&contents) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                debug!("ignoring malformed `{}`: {}", path.display(), e);
                None
            }
        }
    }
}

/// Represents the result of a discovery operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error discovering projects. Only failures reading the root
/// directory surface here.
#[derive(Debug)]
pub enum Error {
    /// Returned when the root directory can't be listed.
    WalkDir(walkdir::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::WalkDir(err) => write!(f, "reading project root: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::WalkDir(err) => Some(err),
        }
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator while walking the root.
    fn from(err: walkdir::Error) -> Error {
        Error::WalkDir(err)
    }
}
