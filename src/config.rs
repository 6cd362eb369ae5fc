use crate::util::open;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The optional configuration file, looked up in the root directory.
pub const CONFIG_FILE: &str = "prototypes.yaml";

/// The default output file name, relative to the root.
pub const OUTPUT_FILE: &str = "index.html";

/// The text shown in the page header and footer.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Site {
    #[serde(default = "Site::default_title")]
    pub title: String,

    #[serde(default = "Site::default_description")]
    pub description: String,

    #[serde(default = "Site::default_footer")]
    pub footer: String,
}

impl Site {
    fn default_title() -> String {
        String::from("Prototypes")
    }

    fn default_description() -> String {
        String::from("Design explorations and UI experiments")
    }

    fn default_footer() -> String {
        String::from("pb-local-projects")
    }
}

impl Default for Site {
    fn default() -> Self {
        Site {
            title: Site::default_title(),
            description: Site::default_description(),
            footer: Site::default_footer(),
        }
    }
}

#[derive(Deserialize, Default)]
struct Project {
    #[serde(flatten)]
    site: Site,

    #[serde(default)]
    template: Option<PathBuf>,

    #[serde(default)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The directory whose children are scanned for projects.
    pub root_directory: PathBuf,

    /// The listing page to write. Overwritten on every run.
    pub output_file: PathBuf,

    /// A page template to use instead of the built-in one.
    pub template: Option<PathBuf>,

    pub site: Site,
}

impl Config {
    /// Loads the configuration for `dir`. If `dir` has no [`CONFIG_FILE`], the
    /// defaults apply. `output` overrides the configured output file and is
    /// taken as-is (not relative to `dir`).
    pub fn from_directory(dir: &Path, output: Option<&Path>) -> Result<Config> {
        let path = dir.join(CONFIG_FILE);
        let project = if path.exists() {
            match Config::load_project_file(&path) {
                Ok(project) => project,
                Err(e) => return Err(anyhow!("Loading configuration: {:?}", e)),
            }
        } else {
            Project::default()
        };

        Ok(Config {
            root_directory: dir.to_owned(),
            output_file: match (output, project.output) {
                (Some(output), _) => output.to_owned(),
                (None, Some(relpath)) => dir.join(relpath),
                (None, None) => dir.join(OUTPUT_FILE),
            },
            template: project.template.map(|relpath| dir.join(relpath)),
            site: project.site,
        })
    }

    fn load_project_file(path: &Path) -> Result<Project> {
        let file = open(path, "project")?;
        serde_yaml::from_reader(file).map_err(|e| anyhow!("Parsing `{}`: {}", path.display(), e))
    }
}
