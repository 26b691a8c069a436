//! Project metadata: required settings, version packing and the fixed
//! `project` namespace.
//!
//! The project namespace is compiled directly from settings and context,
//! never from the user tree, and it never passes through the dependency
//! resolver. Its field order is fixed so headers stay diffable.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::context::{BuildContext, BuildMode, BuildType};
use crate::error::{Error, Result};
use crate::scalar::ScalarKind;
use crate::tree::{Namespace, Variable};

/// Required fields of the document's `project` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectSettings {
    pub name: String,
    pub desc: String,
    #[serde(rename = "output-path")]
    pub output_path: String,
    #[serde(rename = "project-dir")]
    pub project_dir: String,
    pub version: String,
    pub debug: bool,
    pub dev: bool,
}

impl ProjectSettings {
    /// Extract the settings from a parsed document. The `project`
    /// section and every field in it are required.
    pub fn from_document(document: &Value) -> Result<Self> {
        let top = document.as_object().ok_or(Error::RootNotObject)?;
        let project = top.get("project").ok_or_else(|| Error::ProjectMetadata {
            path: "project".to_string(),
            message: "missing required section".to_string(),
        })?;
        serde_json::from_value(project.clone()).map_err(|e| Error::ProjectMetadata {
            path: "project".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse a `MAJOR.MINOR.PATCH` version string. Malformed strings degrade
/// to `0.0.0` with a warning rather than failing the build.
pub fn parse_version(version: &str) -> (u32, u32, u32) {
    match try_parse_version(version) {
        Some(parts) => parts,
        None => {
            warn!(version = %version, "malformed version string, falling back to 0.0.0");
            (0, 0, 0)
        }
    }
}

fn try_parse_version(version: &str) -> Option<(u32, u32, u32)> {
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

/// Pack a version triple into a single integer, eight bits per
/// component: `0x00MMmmpp`. Components above 255 are truncated.
pub fn pack_version(major: u32, minor: u32, patch: u32) -> u32 {
    ((major & 0xFF) << 16) | ((minor & 0xFF) << 8) | (patch & 0xFF)
}

/// Invert [`pack_version`].
pub fn unpack_version(packed: u32) -> (u32, u32, u32) {
    ((packed >> 16) & 0xFF, (packed >> 8) & 0xFF, packed & 0xFF)
}

/// Compile the fully-resolved `project` namespace from the settings and
/// the build context.
pub fn compile_project(settings: &ProjectSettings, ctx: &BuildContext) -> Result<Namespace> {
    let (major, minor, patch) = parse_version(&settings.version);
    let packed = pack_version(major, minor, patch);
    let debug = ctx.build_type == BuildType::Debug;
    let dev = ctx.mode == BuildMode::Development;

    let path = "project";
    let mut ns = Namespace::new(path);
    ns.push_variable(
        Variable::new("name", ScalarKind::String, settings.name.clone()),
        path,
    )?;
    ns.push_variable(
        Variable::new("description", ScalarKind::String, settings.desc.clone()),
        path,
    )?;
    if let Some(hash) = &ctx.commit_hash {
        ns.push_variable(Variable::new("git_hash", ScalarKind::String, hash.clone()), path)?;
    }
    ns.push_variable(
        Variable::new("version", ScalarKind::U32, packed.to_string()),
        path,
    )?;
    ns.push_variable(Variable::new("debug", ScalarKind::Bool, debug.to_string()), path)?;
    ns.push_variable(
        Variable::new("release", ScalarKind::Bool, (!debug).to_string()),
        path,
    )?;
    ns.push_variable(Variable::new("development", ScalarKind::Bool, dev.to_string()), path)?;
    ns.push_variable(
        Variable::new("production", ScalarKind::Bool, (!dev).to_string()),
        path,
    )?;
    ns.push_variable(
        Variable::new("target", ScalarKind::String, ctx.target.clone()),
        path,
    )?;
    ns.push_variable(
        Variable::new("system", ScalarKind::String, ctx.system.clone()),
        path,
    )?;
    ns.push_variable(Variable::new("arch", ScalarKind::String, ctx.arch.clone()), path)?;
    ns.push_variable(
        Variable::new("mode", ScalarKind::String, ctx.mode.as_str()),
        path,
    )?;
    ns.push_variable(
        Variable::new("type", ScalarKind::String, ctx.build_type.as_str()),
        path,
    )?;
    Ok(ns)
}
