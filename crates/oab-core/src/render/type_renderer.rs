//! Single-line type descriptors.
//!
//! The one rendering algorithm shared by parameters, request bodies,
//! responses, and the schema listing. Rule order is load-bearing: reference,
//! composition, array, object, primitive, verbatim fallback.

use crate::parse::schema::{CompositionKind, Schema, SchemaOrRef};

use super::context::RenderContext;
use super::refs::ref_display_name;

/// Render one schema node (possibly absent) as a single-line descriptor for
/// the given context. Identical `(node, context)` pairs always produce
/// byte-identical output.
pub fn type_label(schema: Option<&SchemaOrRef>, ctx: RenderContext) -> String {
    let Some(schema) = schema else {
        return ctx.unknown_token().to_string();
    };
    match schema {
        SchemaOrRef::Ref { ref_path } => ref_display_name(ref_path).to_string(),
        SchemaOrRef::Schema(node) => node_label(node, ctx),
    }
}

/// Same as [`type_label`] for an already-unwrapped inline node.
pub(super) fn node_label(node: &Schema, ctx: RenderContext) -> String {
    if let Some((kind, branches)) = node.composition() {
        return composition_label(kind, branches, ctx);
    }
    match node.type_name() {
        Some("array") => array_label(node, ctx),
        Some("object") => object_label(node, ctx),
        Some(t @ ("string" | "integer" | "number")) => primitive_label(t, node, ctx),
        Some(other) => other.to_string(),
        None => ctx.unknown_token().to_string(),
    }
}

/// Compositions carry detail only in request-body position; in every other
/// context they collapse to that context's unknown token.
fn composition_label(
    kind: CompositionKind,
    branches: &[SchemaOrRef],
    ctx: RenderContext,
) -> String {
    if ctx != RenderContext::RequestBody {
        return ctx.unknown_token().to_string();
    }
    let rendered: Vec<String> = branches.iter().map(branch_label).collect();
    format!("{}: [{}]", kind.as_str(), rendered.join(", "))
}

fn branch_label(branch: &SchemaOrRef) -> String {
    match branch {
        SchemaOrRef::Ref { ref_path } => ref_display_name(ref_path).to_string(),
        SchemaOrRef::Schema(node) if !node.properties.is_empty() => {
            let names: Vec<&str> = node.properties.keys().map(String::as_str).take(3).collect();
            let ellipsis = if node.properties.len() > 3 { ", ..." } else { "" };
            format!("{{{}{}}}", names.join(", "), ellipsis)
        }
        SchemaOrRef::Schema(node) => node.type_name().unwrap_or("inline").to_string(),
    }
}

fn array_label(node: &Schema, ctx: RenderContext) -> String {
    // Parameters never show item detail.
    if ctx == RenderContext::Parameter {
        return "array".to_string();
    }
    match node.items.as_deref() {
        None => "array".to_string(),
        Some(items) => format!("Array of {}", item_label(Some(items), ctx)),
    }
}

/// Item descriptor for an array schema: reference name, flat `object` for
/// inline objects, otherwise a recursive descriptor under the same context.
pub(super) fn item_label(items: Option<&SchemaOrRef>, ctx: RenderContext) -> String {
    match items {
        None => ctx.unknown_token().to_string(),
        Some(SchemaOrRef::Ref { ref_path }) => ref_display_name(ref_path).to_string(),
        Some(SchemaOrRef::Schema(item)) if item.is_object() => "object".to_string(),
        Some(items) => type_label(Some(items), ctx),
    }
}

fn object_label(node: &Schema, ctx: RenderContext) -> String {
    let opts = ctx.options();
    if node.properties.is_empty() || !opts.include_properties {
        return "object".to_string();
    }
    let limit = opts.property_limit.unwrap_or(node.properties.len());
    let names: Vec<&str> = node
        .properties
        .keys()
        .map(String::as_str)
        .take(limit)
        .collect();
    let ellipsis = if node.properties.len() > limit {
        ", ..."
    } else {
        ""
    };
    format!("Object ({}{})", names.join(", "), ellipsis)
}

fn primitive_label(type_name: &str, node: &Schema, ctx: RenderContext) -> String {
    // An enumerated value set takes precedence over format.
    if !node.enum_values.is_empty() {
        return format!("{type_name} [{}]", join_values(&node.enum_values));
    }
    if ctx.options().include_format {
        if let Some(format) = node.format.as_deref() {
            return format!("{type_name} (format: {format})");
        }
    }
    type_name.to_string()
}

/// Enumerated values joined for display: strings appear bare, everything else
/// through its JSON form.
pub fn join_values(values: &[serde_json::Value]) -> String {
    values
        .iter()
        .map(|v| match v.as_str() {
            Some(s) => s.to_string(),
            None => v.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
