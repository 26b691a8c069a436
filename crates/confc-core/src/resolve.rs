//! Dependency resolution: substitute mode- and type-dependent values.

use tracing::warn;

use crate::context::BuildContext;
use crate::tree::{DependencyAxis, Namespace};

/// Resolve every dependency-bearing variable in the tree, depth-first.
///
/// The axis value of the current build picks the entry from the
/// variable's table. A missing entry degrades to the empty string with a
/// warning rather than failing the build. Variables without a dependency
/// are left untouched, so resolving an already-resolved tree is a no-op.
pub fn resolve(ns: &mut Namespace, ctx: &BuildContext) {
    for variable in ns.variables_mut() {
        let Some(spec) = variable.dependency.as_ref() else {
            continue;
        };
        let key = match spec.axis {
            DependencyAxis::Mode => ctx.mode.as_str(),
            DependencyAxis::Type => ctx.build_type.as_str(),
        };
        let resolved = match spec.values.get(key) {
            Some(value) => value.clone(),
            None => {
                warn!(
                    variable = %variable.name,
                    axis_value = %key,
                    "no dependency entry for the current build, substituting an empty string"
                );
                String::new()
            }
        };
        variable.value = resolved;
    }
    for child in ns.children_mut() {
        resolve(child, ctx);
    }
}
