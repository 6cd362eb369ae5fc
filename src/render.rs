//! Renders the listing page from a sorted slice of [`Project`]s.
//!
//! Templates use [`gtmpl`]'s Go-template syntax. The page value has the fields
//! `title`, `description`, `footer`, `has_projects`, and `projects`; each item
//! in `projects` has `number`, `folder`, `name`, `shortName`, and
//! `description` (see [`crate::value`]).
//!
//! Values are inserted verbatim. Nothing is HTML-escaped, so this is only
//! suitable for project folders and sidecars that the site's maintainer
//! controls.

use crate::config::Site;
use crate::project::Project;
use crate::value::entries;
use gtmpl::{Context, Template};
use gtmpl_value::Value;
use std::collections::HashMap;
use std::fmt;

/// The built-in page skeleton.
pub const PAGE_TEMPLATE: &str = include_str!("page-template.html");

/// Applies a parsed page template to lists of projects.
pub struct Renderer<'a> {
    template: Template,
    site: &'a Site,
}

impl<'a> Renderer<'a> {
    /// Parses `source` as the page template.
    pub fn new(source: &str, site: &'a Site) -> Result<Renderer<'a>> {
        let mut template = Template::default();
        template.parse(source).map_err(Error::ParseTemplate)?;
        Ok(Renderer { template, site })
    }

    /// Uses [`PAGE_TEMPLATE`].
    pub fn builtin(site: &'a Site) -> Result<Renderer<'a>> {
        Renderer::new(PAGE_TEMPLATE, site)
    }

    /// Renders the page for `projects`, which must already be sorted. The
    /// output depends only on the inputs, so rendering the same list twice
    /// gives identical bytes.
    pub fn render(&self, projects: &[Project]) -> Result<String> {
        let context = Context::from(self.to_value(projects)).map_err(Error::Template)?;
        let mut out: Vec<u8> = Vec::new();
        self.template.execute(&mut out, &context)?;
        String::from_utf8(out).map_err(|e| Error::Template(e.to_string()))
    }

    fn to_value(&self, projects: &[Project]) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), (&self.site.title).into());
        m.insert("description".to_owned(), (&self.site.description).into());
        m.insert("footer".to_owned(), (&self.site.footer).into());
        m.insert("has_projects".to_owned(), Value::Bool(!projects.is_empty()));
        m.insert("projects".to_owned(), entries(projects));
        Value::Object(m)
    }
}

/// The result of a fallible rendering operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing or executing a page template.
#[derive(Debug)]
pub enum Error {
    /// Returned when the template source doesn't parse.
    ParseTemplate(String),

    /// Returned when executing the template fails.
    Template(String),
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`]. This
    /// allows us to use the `?` operator when executing templates.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ParseTemplate(err) => write!(f, "parsing template: {}", err),
            Error::Template(err) => write!(f, "rendering template: {}", err),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::project::Metadata;
    use pretty_assertions::assert_eq;

    fn entry_count(html: &str) -> usize {
        html.matches(r#"<span class="project-number">"#).count()
    }

    fn placeholder_count(html: &str) -> usize {
        html.matches(r#"<div class="empty">No projects yet</div>"#).count()
    }

    #[test]
    fn test_render_empty() -> Result<()> {
        let site = Site::default();
        let html = Renderer::builtin(&site)?.render(&[])?;
        assert_eq!(1, placeholder_count(&html));
        assert_eq!(0, entry_count(&html));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Prototypes</title>"));
        assert!(html.contains(r#"<span class="footer-text">pb-local-projects</span>"#));
        Ok(())
    }

    #[test]
    fn test_render_entries_in_order() -> Result<()> {
        let site = Site::default();
        let projects = vec![
            Project::resolve("2024-02-b", None),
            Project::resolve("2024-01-a", None),
        ];
        let html = Renderer::builtin(&site)?.render(&projects)?;

        assert_eq!(2, entry_count(&html));
        assert_eq!(0, placeholder_count(&html));
        let first = html.find(r#"<a href="2024-02-b/" class="project">"#).unwrap();
        let second = html.find(r#"<a href="2024-01-a/" class="project">"#).unwrap();
        assert!(first < second);
        assert!(html.contains(r#"<span class="project-number">01</span>"#));
        assert!(html.contains(r#"<span class="project-number">02</span>"#));
        assert!(html.contains(r#"<span class="project-name">2024 02 B</span>"#));
        assert!(html.contains(r#"<span class="project-desc">Prototype project</span>"#));
        Ok(())
    }

    #[test]
    fn test_render_numbers_every_entry() -> Result<()> {
        let site = Site::default();
        let projects: Vec<Project> = (0..11)
            .map(|i| Project::resolve(&format!("p{:02}", 20 - i), None))
            .collect();
        let html = Renderer::builtin(&site)?.render(&projects)?;
        assert_eq!(11, entry_count(&html));
        for n in 1..=11 {
            let tag = format!(r#"<span class="project-number">{:02}</span>"#, n);
            assert!(html.contains(&tag), "missing {}", tag);
        }
        Ok(())
    }

    #[test]
    fn test_render_does_not_escape() -> Result<()> {
        let site = Site::default();
        let metadata = Metadata {
            short_name: Some(String::from("<em>Bold</em>")),
            description: Some(String::from("A & B")),
            ..Metadata::default()
        };
        let projects = vec![Project::resolve("x", Some(metadata))];
        let html = Renderer::builtin(&site)?.render(&projects)?;
        assert!(html.contains(r#"<span class="project-name"><em>Bold</em></span>"#));
        assert!(html.contains(r#"<span class="project-desc">A & B</span>"#));
        Ok(())
    }

    #[test]
    fn test_render_is_deterministic() -> Result<()> {
        let site = Site::default();
        let projects = vec![
            Project::resolve("b", None),
            Project::resolve("a", None),
        ];
        let renderer = Renderer::builtin(&site)?;
        assert_eq!(renderer.render(&projects)?, renderer.render(&projects)?);
        Ok(())
    }

    #[test]
    fn test_render_site_text() -> Result<()> {
        let site = Site {
            title: String::from("Experiments"),
            description: String::from("Things"),
            footer: String::from("lab"),
        };
        let html = Renderer::builtin(&site)?.render(&[])?;
        assert!(html.contains("<title>Experiments</title>"));
        assert!(html.contains("<h1>Experiments</h1>"));
        assert!(html.contains(r#"<p class="description">Things</p>"#));
        assert!(html.contains(r#"<span class="footer-text">lab</span>"#));
        Ok(())
    }

    #[test]
    fn test_render_custom_template() -> Result<()> {
        let site = Site::default();
        let renderer = Renderer::new(
            "{{range .projects}}{{.number}}:{{.name}};{{end}}",
            &site,
        )?;
        let projects = vec![
            Project::resolve("b", None),
            Project::resolve("a", None),
        ];
        assert_eq!("01:b;02:a;", renderer.render(&projects)?);
        Ok(())
    }

    #[test]
    fn test_parse_error() {
        let site = Site::default();
        match Renderer::new("{{if .title}}", &site) {
            Err(Error::ParseTemplate(_)) => {}
            _ => panic!("expected a parse error"),
        }
    }
}
