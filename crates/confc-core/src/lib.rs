//! confc-core: compile hierarchical configuration documents into C++
//! constant headers.
//!
//! The pipeline: parse the document, extract the required project
//! settings, build the user tree from the `config` section, resolve
//! mode- and type-dependent values, attach the compiled `project`
//! namespace ahead of everything else, then emit the header text.
//! [`compile_header`] runs the in-memory stages in one call.

pub mod build;
pub mod classify;
pub mod context;
pub mod document;
pub mod emit;
pub mod error;
pub mod project;
pub mod resolve;
pub mod scalar;
pub mod tree;

pub use build::{build_tree, normalize_name};
pub use classify::{classify, classify_document_scalar, classify_scalar, Classified};
pub use context::{BuildContext, BuildMode, BuildType, CxxStandard};
pub use emit::emit_header;
pub use error::{Error, Result};
pub use project::{compile_project, pack_version, unpack_version, ProjectSettings};
pub use resolve::resolve;
pub use scalar::ScalarKind;
pub use tree::{DependencyAxis, DependencySpec, Namespace, Variable};

/// Compile a parsed document into header text.
///
/// The project namespace is compiled from `settings` and `ctx` after the
/// user tree has been resolved, so project metadata never passes through
/// the dependency resolver.
pub fn compile_header(
    document: &serde_json::Value,
    settings: &ProjectSettings,
    ctx: &BuildContext,
    copyright: &str,
) -> Result<String> {
    let mut root = build::build_tree(document, ctx)?;
    resolve::resolve(&mut root, ctx);
    let project = project::compile_project(settings, ctx)?;
    root.prepend_child(project, &ctx.root_namespace)?;
    Ok(emit::emit_header(&root, ctx, copyright))
}
