//! Conversions from [`Project`]s into template [`Value`]s.

use crate::project::Project;
use gtmpl_value::Value;
use std::collections::HashMap;

/// A [`Project`] at a position in the rendered listing. `number` is the
/// one-based position.
pub struct Entry<'a> {
    pub number: usize,
    pub project: &'a Project,
}

impl From<Entry<'_>> for Value {
    fn from(entry: Entry) -> Value {
        let p = entry.project;
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("number".to_owned(), format!("{:02}", entry.number).into());
        m.insert("folder".to_owned(), (&p.folder).into());
        m.insert("name".to_owned(), (&p.name).into());
        m.insert("shortName".to_owned(), (&p.short_name).into());
        m.insert("description".to_owned(), (&p.description).into());
        Value::Object(m)
    }
}

/// Numbers the projects in order and converts them into a [`Value::Array`].
pub fn entries(projects: &[Project]) -> Value {
    Value::Array(
        projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                Entry {
                    number: i + 1,
                    project,
                }
                .into()
            })
            .collect(),
    )
}
