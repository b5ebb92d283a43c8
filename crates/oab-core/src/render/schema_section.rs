//! The `SCHEMAS:` section.
//!
//! Each named schema renders as a type-summary line plus an indented body.
//! Inline object branches of top-level compositions get promoted to
//! synthesized "virtual" schemas so the branch list can name them; the
//! virtual blocks follow their parent immediately. Synthesis is one level
//! deep: a virtual schema never spawns further virtual schemas.

use std::collections::HashSet;
use std::fmt::Write;

use indexmap::IndexMap;

use crate::parse::schema::{Schema, SchemaOrRef};

use super::context::RenderContext;
use super::refs::ref_display_name;
use super::type_renderer::{item_label, node_label, type_label};

/// Accumulator for names synthesized during one listing pass. Seeded with the
/// real schema names so derived names never collide with them.
struct VirtualSchemas<'a> {
    pending: Vec<(String, &'a Schema)>,
    taken: HashSet<String>,
}

impl<'a> VirtualSchemas<'a> {
    fn new(real_names: impl Iterator<Item = &'a String>) -> Self {
        Self {
            pending: Vec::new(),
            taken: real_names.cloned().collect(),
        }
    }

    /// Register an inline branch under `<parent>__inline__<ordinal>`, bumping
    /// the ordinal past any name already in use.
    fn register(&mut self, parent: &str, ordinal: &mut usize, node: &'a Schema) -> String {
        let mut name = format!("{parent}__inline__{ordinal}");
        while self.taken.contains(&name) {
            *ordinal += 1;
            name = format!("{parent}__inline__{ordinal}");
        }
        *ordinal += 1;
        self.taken.insert(name.clone());
        self.pending.push((name.clone(), node));
        name
    }

    fn drain(&mut self) -> Vec<(String, &'a Schema)> {
        std::mem::take(&mut self.pending)
    }
}

/// Render the whole section, or `None` when the document declares no schemas.
pub fn schema_section(schemas: &IndexMap<String, SchemaOrRef>) -> Option<String> {
    if schemas.is_empty() {
        return None;
    }
    let mut out = String::from("SCHEMAS:\n> * = required\n\n");
    let mut registry = VirtualSchemas::new(schemas.keys());
    for (name, schema) in schemas {
        match schema {
            SchemaOrRef::Ref { ref_path } => {
                // A top-level alias: summary only.
                let _ = writeln!(out, "{name}: {}\n", ref_display_name(ref_path));
            }
            SchemaOrRef::Schema(node) => {
                schema_block(&mut out, name, node, Some(&mut registry));
                for (virtual_name, virtual_node) in registry.drain() {
                    schema_block(&mut out, &virtual_name, virtual_node, None);
                }
            }
        }
    }
    Some(out)
}

/// One named schema block. `registry` is `None` for virtual schemas, which
/// disables further synthesis.
fn schema_block<'a>(
    out: &mut String,
    name: &str,
    node: &'a Schema,
    mut registry: Option<&mut VirtualSchemas<'a>>,
) {
    if let Some((kind, branches)) = node.composition() {
        let mut ordinal = 1usize;
        let rendered: Vec<String> = branches
            .iter()
            .map(|branch| match branch {
                SchemaOrRef::Ref { ref_path } => ref_display_name(ref_path).to_string(),
                SchemaOrRef::Schema(b) if !b.properties.is_empty() => {
                    match registry.as_deref_mut() {
                        Some(reg) => reg.register(name, &mut ordinal, b),
                        None => b.type_name().unwrap_or("inline").to_string(),
                    }
                }
                SchemaOrRef::Schema(b) => b.type_name().unwrap_or("inline").to_string(),
            })
            .collect();
        let _ = writeln!(out, "{name}: {} [{}]\n", kind.as_str(), rendered.join(", "));
        return;
    }

    match node.type_name() {
        Some("array") => {
            let _ = writeln!(out, "{name}: array");
            let _ = writeln!(
                out,
                "  items: {}\n",
                item_label(node.items.as_deref(), RenderContext::SchemaListing)
            );
        }
        Some("object") if !node.properties.is_empty() => {
            let _ = writeln!(out, "{name}: object");
            for (prop_name, prop) in &node.properties {
                let marker = if node.required.contains(prop_name) { "*" } else { "" };
                let _ = writeln!(out, "  - {prop_name}{marker}: {}", property_label(prop));
            }
            out.push('\n');
        }
        _ => {
            // Primitive, bare object, or anything else: summary line only.
            let _ = writeln!(
                out,
                "{name}: {}\n",
                node_label(node, RenderContext::SchemaListing)
            );
        }
    }
}

/// Property types use a deliberately restricted rendering: a bare reference
/// flattens to `object`, except when wrapped as the single branch of a
/// composition, which surfaces the referenced name. Multi-branch compositions
/// list branch types without peeking at property names.
fn property_label(prop: &SchemaOrRef) -> String {
    let node = match prop {
        SchemaOrRef::Ref { .. } => return "object".to_string(),
        SchemaOrRef::Schema(node) => node,
    };
    if let Some((kind, branches)) = node.composition() {
        if let [SchemaOrRef::Ref { ref_path }] = branches {
            return ref_display_name(ref_path).to_string();
        }
        let rendered: Vec<String> = branches
            .iter()
            .map(|branch| match branch {
                SchemaOrRef::Ref { ref_path } => ref_display_name(ref_path).to_string(),
                SchemaOrRef::Schema(b) => b.declared_type().unwrap_or("inline").to_string(),
            })
            .collect();
        return format!("{} [{}]", kind.as_str(), rendered.join(", "));
    }
    type_label(Some(prop), RenderContext::SchemaListing)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn schemas(value: serde_json::Value) -> IndexMap<String, SchemaOrRef> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_listing_renders_nothing() {
        assert!(schema_section(&IndexMap::new()).is_none());
    }

    #[test]
    fn object_block_marks_required_properties() {
        let out = schema_section(&schemas(json!({
            "Pet": {
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": { "type": "integer" },
                    "note": { "type": "string" },
                },
            },
        })))
        .unwrap();
        assert_eq!(
            out,
            "SCHEMAS:\n> * = required\n\nPet: object\n  - id*: integer\n  - note: string\n\n"
        );
    }

    #[test]
    fn property_reference_flattens_to_object() {
        let out = schema_section(&schemas(json!({
            "Pet": {
                "type": "object",
                "properties": {
                    "owner": { "$ref": "#/components/schemas/Owner" },
                    "home": { "allOf": [{ "$ref": "#/components/schemas/Address" }] },
                },
            },
        })))
        .unwrap();
        assert!(out.contains("  - owner: object\n"));
        // The single-branch composition exception surfaces the name.
        assert!(out.contains("  - home: Address\n"));
    }

    #[test]
    fn multi_branch_property_composition_lists_types() {
        let out = schema_section(&schemas(json!({
            "Pet": {
                "type": "object",
                "properties": {
                    "origin": {
                        "oneOf": [
                            { "$ref": "#/components/schemas/Owner" },
                            { "type": "string" },
                            { "properties": { "country": {} } },
                        ],
                    },
                },
            },
        })))
        .unwrap();
        // No property peeking: the inline branch stays "inline".
        assert!(out.contains("  - origin: oneOf [Owner, string, inline]\n"));
    }

    #[test]
    fn inline_composition_branch_becomes_virtual_schema() {
        let out = schema_section(&schemas(json!({
            "Foo": {
                "allOf": [
                    { "$ref": "#/components/schemas/Bar" },
                    { "type": "object", "properties": { "x": { "type": "integer" }, "y": { "type": "integer" } } },
                ],
            },
        })))
        .unwrap();
        assert!(out.contains("Foo: allOf [Bar, Foo__inline__1]\n"));
        assert!(out.contains("Foo__inline__1: object\n  - x: integer\n  - y: integer\n"));
        // Exactly one virtual schema: once in the branch list, once as a block.
        assert_eq!(out.matches("__inline__").count(), 2);
    }

    #[test]
    fn virtual_block_follows_its_parent() {
        let out = schema_section(&schemas(json!({
            "Foo": {
                "oneOf": [
                    { "type": "object", "properties": { "a": {} } },
                ],
            },
            "Zed": { "type": "string" },
        })))
        .unwrap();
        let virtual_block = out.find("Foo__inline__1: object").unwrap();
        let zed = out.find("Zed: string").unwrap();
        assert!(virtual_block < zed);
    }

    #[test]
    fn derived_names_step_past_real_ones() {
        let out = schema_section(&schemas(json!({
            "Foo": {
                "oneOf": [
                    { "type": "object", "properties": { "a": {} } },
                    { "type": "object", "properties": { "b": {} } },
                ],
            },
            "Foo__inline__1": { "type": "string" },
        })))
        .unwrap();
        assert!(out.contains("Foo: oneOf [Foo__inline__2, Foo__inline__3]\n"));
    }

    #[test]
    fn virtual_schemas_do_not_spawn_virtual_schemas() {
        let out = schema_section(&schemas(json!({
            "Foo": {
                "oneOf": [
                    {
                        "type": "object",
                        "properties": {
                            "nested": {
                                "anyOf": [
                                    { "type": "object", "properties": { "deep": {} } },
                                ],
                            },
                        },
                    },
                ],
            },
        })))
        .unwrap();
        // One registration from Foo, nothing from the virtual block itself.
        assert!(out.contains("Foo: oneOf [Foo__inline__1]\n"));
        assert!(!out.contains("__inline__2"));
    }

    #[test]
    fn array_schema_lists_item_type() {
        let out = schema_section(&schemas(json!({
            "PetPage": {
                "type": "array",
                "items": { "$ref": "#/components/schemas/Pet" },
            },
        })))
        .unwrap();
        assert!(out.contains("PetPage: array\n  items: Pet\n\n"));
    }

    #[test]
    fn primitive_schema_has_no_body() {
        let out = schema_section(&schemas(json!({
            "Status": { "type": "string", "enum": ["active", "inactive"] },
        })))
        .unwrap();
        assert!(out.contains("Status: string [active, inactive]\n\n"));
    }
}
