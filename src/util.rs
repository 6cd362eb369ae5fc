use anyhow::{anyhow, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn open(path: &Path, kind: &str) -> Result<File> {
    match File::open(path) {
        Err(e) => Err(anyhow!("Opening {} file `{}`: {}", kind, path.display(), e)),
        Ok(file) => Ok(file),
    }
}

/// Reads a file to a string if it exists. A missing file is `Ok(None)`; any
/// other failure is returned.
pub fn read_optional(path: &Path) -> std::io::Result<Option<String>> {
    let mut contents = String::new();
    match File::open(path) {
        Ok(mut file) => {
            file.read_to_string(&mut contents)?;
            Ok(Some(contents))
        }
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => Ok(None),
            _ => Err(e),
        },
    }
}
