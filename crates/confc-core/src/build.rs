//! Tree construction from a parsed configuration document.
//!
//! The builder walks the reserved `config` section depth-first. Objects
//! become namespaces unless they carry the dependency marker key, in
//! which case they become a single dependency-bearing variable. Scalars
//! become classified variables. Arrays and nulls are fatal; errors
//! report the dotted document path of the offending key.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::classify;
use crate::context::BuildContext;
use crate::error::{Error, Result};
use crate::tree::{DependencyAxis, DependencySpec, Namespace, Variable};

/// Reserved key that turns an object into a dependency-bearing variable.
pub const DEPENDENCY_MARKER: &str = "dependency";

/// Reserved top-level section holding project metadata.
pub const PROJECT_SECTION: &str = "project";

/// Reserved top-level section holding the user configuration tree.
pub const CONFIG_SECTION: &str = "config";

/// Normalize a document key into a C++ identifier: every character
/// outside `[A-Za-z0-9_]` becomes `_`, and a leading digit gets an
/// underscore prefix. Applied to namespace and variable names alike;
/// dependency table keys are left untouched.
pub fn normalize_name(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.is_empty() {
        name.push('_');
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Build the user-configuration tree: a root namespace named from the
/// context, populated from the document's `config` section. A missing
/// `config` section yields an empty root.
pub fn build_tree(document: &Value, ctx: &BuildContext) -> Result<Namespace> {
    let top = document.as_object().ok_or(Error::RootNotObject)?;
    let mut root = Namespace::new(normalize_name(&ctx.root_namespace));

    if let Some(config) = top.get(CONFIG_SECTION) {
        let entries = config.as_object().ok_or_else(|| {
            Error::unsupported(CONFIG_SECTION, "the config section must be an object")
        })?;
        build_object(&mut root, entries, CONFIG_SECTION)?;
    }

    for key in top.keys() {
        if key != CONFIG_SECTION && key != PROJECT_SECTION {
            debug!(key = %key, "ignoring unknown top-level section");
        }
    }

    Ok(root)
}

fn build_object(ns: &mut Namespace, entries: &Map<String, Value>, path: &str) -> Result<()> {
    for (key, value) in entries {
        let name = normalize_name(key);
        let child_path = join_path(path, key);
        match value {
            Value::Object(child) => match child.get(DEPENDENCY_MARKER) {
                Some(marker) => {
                    let spec = dependency_spec(marker, child, &child_path)?;
                    ns.push_variable(Variable::dependent(name, spec), path)?;
                }
                None => {
                    let mut child_ns = Namespace::new(name);
                    build_object(&mut child_ns, child, &child_path)?;
                    ns.insert_child(child_ns, path)?;
                }
            },
            Value::Array(_) => {
                return Err(Error::unsupported(child_path, "arrays are not supported"));
            }
            scalar => match classify::classify_document_scalar(scalar) {
                Some(lit) => {
                    ns.push_variable(Variable::new(name, lit.kind, lit.value), path)?;
                }
                None => {
                    return Err(Error::unsupported(child_path, "null values are not supported"));
                }
            },
        }
    }
    Ok(())
}

/// Read a dependency table: the marker names the axis; every other entry
/// maps an axis value to the substituted text.
fn dependency_spec(marker: &Value, entries: &Map<String, Value>, path: &str) -> Result<DependencySpec> {
    let axis = marker
        .as_str()
        .and_then(DependencyAxis::parse)
        .ok_or_else(|| Error::InvalidAxis {
            path: path.to_string(),
            axis: match marker {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })?;

    let mut values = IndexMap::new();
    for (key, value) in entries {
        if key == DEPENDENCY_MARKER {
            continue;
        }
        let text = scalar_text(value).ok_or_else(|| {
            Error::unsupported(join_path(path, key), "dependency table entries must be scalar")
        })?;
        values.insert(key.clone(), text);
    }
    Ok(DependencySpec { axis, values })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(classify::canonical_number_text(n)),
        _ => None,
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
