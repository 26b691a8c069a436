//! Configuration document loading, parsing and write-back.
//!
//! Documents are JSON or JSON5; the parser is picked from the file
//! extension. Parsing preserves document key order, which later drives
//! the order of emitted namespaces and constants.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Source format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Json5,
}

impl DocumentFormat {
    /// Pick the parser from the file extension. JSON5 is the default:
    /// it is a superset of JSON, so an unknown extension still parses
    /// plain JSON documents.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Json5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "JSON",
            DocumentFormat::Json5 => "JSON5",
        }
    }
}

/// Load and parse a configuration document.
pub fn load(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(path, &text)
}

/// Parse document text according to the extension of `path`.
pub fn parse(path: &Path, text: &str) -> Result<Value> {
    let format = DocumentFormat::from_path(path);
    match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| Error::DocumentParse {
            path: path.to_path_buf(),
            format: format.name().to_string(),
            message: e.to_string(),
        }),
        DocumentFormat::Json5 => json5::from_str(text).map_err(|e| Error::DocumentParse {
            path: path.to_path_buf(),
            format: format.name().to_string(),
            message: e.to_string(),
        }),
    }
}

/// Serialize a document as pretty JSON and write it out.
///
/// JSON5 niceties (comments, unquoted keys) are not preserved; a
/// rewritten document is always plain JSON.
pub fn save(path: &Path, root: &Value) -> Result<()> {
    let mut text = serde_json::to_string_pretty(root)?;
    text.push('\n');
    write_output(path, &text)
}

/// Write generated text with a single scoped write-then-flush.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    let mut file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    file.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Update the persisted project fields (`output-path`, `project-dir`,
/// `debug`, `dev`) ahead of a document rewrite, so the effective values
/// of this invocation become the new defaults.
pub fn update_project_fields(
    root: &mut Value,
    output_path: &str,
    project_dir: &str,
    debug: bool,
    dev: bool,
) -> Result<()> {
    let project = root
        .get_mut("project")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| Error::ProjectMetadata {
            path: "project".to_string(),
            message: "missing required section".to_string(),
        })?;
    project.insert("output-path".to_string(), Value::from(output_path));
    project.insert("project-dir".to_string(), Value::from(project_dir));
    project.insert("debug".to_string(), Value::from(debug));
    project.insert("dev".to_string(), Value::from(dev));
    Ok(())
}
