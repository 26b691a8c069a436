//! Header emission: deterministic C++ text from a resolved tree.
//!
//! Output shape: a comment banner, `#pragma once` plus a classic include
//! guard derived from the output file name, the `<cstdint>` include
//! (and `<string_view>` from C++17 up), the version unpacking macros,
//! then one nested namespace block per tree node. Variables come before
//! child namespaces, both in tree order, indented four spaces per level.

use crate::context::{BuildContext, CxxStandard};
use crate::scalar::ScalarKind;
use crate::tree::Namespace;

const INDENT: &str = "    ";

/// Serialize the resolved tree into header text.
pub fn emit_header(root: &Namespace, ctx: &BuildContext, copyright: &str) -> String {
    let file_name = ctx
        .output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ctx.output_path.to_string_lossy().into_owned());
    let guard = guard_name(&file_name);

    let mut out = String::new();
    out.push_str("//\n");
    for line in copyright.lines() {
        out.push_str(&format!("// {line}\n"));
    }
    out.push_str("// Generated configuration header. Do not edit.\n");
    out.push_str("//\n\n");

    out.push_str("#pragma once\n\n");
    out.push_str(&format!("#ifndef {guard}\n"));
    out.push_str(&format!("#define {guard}\n\n"));

    out.push_str("#include <cstdint>\n");
    if ctx.std.supports_string_view() {
        out.push_str("#include <string_view>\n");
    }
    out.push('\n');

    out.push_str("#define CONFIG_VERSION_MAJOR(v) (((v) >> 16) & 0xFF)\n");
    out.push_str("#define CONFIG_VERSION_MINOR(v) (((v) >> 8) & 0xFF)\n");
    out.push_str("#define CONFIG_VERSION_PATCH(v) ((v) & 0xFF)\n\n");

    emit_namespace(&mut out, root, 0, ctx.std);

    out.push_str(&format!("\n#endif // {guard}\n"));
    out
}

fn emit_namespace(out: &mut String, ns: &Namespace, depth: usize, std: CxxStandard) {
    let indent = INDENT.repeat(depth);
    out.push_str(&format!("{indent}namespace {} {{\n", ns.name()));

    let inner = INDENT.repeat(depth + 1);
    for variable in ns.variables() {
        let rendered = match variable.kind {
            ScalarKind::String => string_literal(&variable.value),
            _ => variable.value.clone(),
        };
        out.push_str(&format!(
            "{inner}constexpr {} {} = {};\n",
            cxx_type(variable.kind, std),
            variable.name,
            rendered
        ));
    }
    for child in ns.children() {
        emit_namespace(out, child, depth + 1, std);
    }

    out.push_str(&format!("{indent}}}\n"));
}

/// Include-guard macro for an output file name: non-alphanumeric
/// characters become `_`, the rest are upper-cased.
fn guard_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// C++ type name for a scalar kind under the requested standard.
fn cxx_type(kind: ScalarKind, std: CxxStandard) -> &'static str {
    match kind {
        ScalarKind::Bool => "bool",
        ScalarKind::I8 => "std::int8_t",
        ScalarKind::U8 => "std::uint8_t",
        ScalarKind::I16 => "std::int16_t",
        ScalarKind::U16 => "std::uint16_t",
        ScalarKind::I32 => "std::int32_t",
        ScalarKind::U32 => "std::uint32_t",
        ScalarKind::I64 => "std::int64_t",
        ScalarKind::U64 => "std::uint64_t",
        ScalarKind::F32 => "float",
        ScalarKind::F64 => "double",
        ScalarKind::String => {
            if std.supports_string_view() {
                "std::string_view"
            } else {
                "const char*"
            }
        }
    }
}

/// Render a value as a C++ string literal, escaping the characters that
/// would break out of it.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
