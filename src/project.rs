//! Defines the [`Project`] and [`Metadata`] types. A [`Project`] is the fully
//! resolved record for one project directory; a [`Metadata`] is the raw,
//! optional-field view of the directory's `metadata.json` sidecar. Keeping the
//! two apart lets [`Project::resolve`] check which keys the sidecar actually
//! supplied after defaults have been applied.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The description used when the sidecar doesn't provide one.
pub const DEFAULT_DESCRIPTION: &str = "Prototype project";

/// Keys in a sidecar that aren't one of the recognized fields.
pub type Extra = BTreeMap<String, serde_json::Value>;

/// The raw contents of a `metadata.json` sidecar file. Every recognized field
/// is optional; unrecognized keys are collected into `extra`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Metadata {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "shortName")]
    pub short_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Metadata {
    /// Parses a sidecar document. The document must be a JSON object whose
    /// recognized keys, if present, hold strings.
    pub fn parse(input: &str) -> serde_json::Result<Metadata> {
        serde_json::from_str(input)
    }
}

/// A project directory discovered under the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// The directory name. The entry link points at `{folder}/`.
    pub folder: String,

    /// The sort key. Defaults to `folder`.
    pub name: String,

    /// The label shown on the index page.
    pub short_name: String,

    pub description: String,

    /// Sidecar keys that the index page doesn't use.
    pub extra: Extra,
}

impl Project {
    /// Builds the record for `folder`, overlaying `metadata` onto the
    /// folder-derived defaults. When the sidecar names the project but doesn't
    /// give a `shortName`, the label is the uppercased `name` (no dash
    /// replacement, unlike the folder default).
    pub fn resolve(folder: &str, metadata: Option<Metadata>) -> Project {
        let mut project = Project {
            folder: folder.to_owned(),
            name: folder.to_owned(),
            short_name: default_short_name(folder),
            description: DEFAULT_DESCRIPTION.to_owned(),
            extra: Extra::new(),
        };

        let metadata = match metadata {
            Some(metadata) => metadata,
            None => return project,
        };

        project.short_name = match (&metadata.short_name, &metadata.name) {
            (Some(short_name), _) => short_name.clone(),
            (None, Some(name)) => name.to_uppercase(),
            (None, None) => project.short_name,
        };
        if let Some(name) = metadata.name {
            project.name = name;
        }
        if let Some(description) = metadata.description {
            project.description = description;
        }

        project.extra = metadata.extra;
        // the directory name always wins
        project.extra.remove("folder");
        project
    }
}

/// Derives the default label from a directory name, e.g. `2024-01-nav-bar`
/// becomes `2024 01 NAV BAR`.
pub fn default_short_name(folder: &str) -> String {
    folder.to_uppercase().replace('-', " ")
}
