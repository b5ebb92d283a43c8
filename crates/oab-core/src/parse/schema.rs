use indexmap::IndexMap;
use serde::Deserialize;

/// The `type` keyword: a single name, or a set of names in 3.1 documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    One(String),
    Many(Vec<String>),
}

impl TypeSet {
    /// First non-`"null"` entry; `"null"` survives only when nothing else is
    /// declared.
    pub fn primary(&self) -> Option<&str> {
        match self {
            TypeSet::One(t) => Some(t),
            TypeSet::Many(ts) => ts
                .iter()
                .map(String::as_str)
                .find(|t| *t != "null")
                .or_else(|| ts.first().map(String::as_str)),
        }
    }
}

/// A reference or inline schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

/// A composition keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionKind {
    AllOf,
    OneOf,
    AnyOf,
}

impl CompositionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CompositionKind::AllOf => "allOf",
            CompositionKind::OneOf => "oneOf",
            CompositionKind::AnyOf => "anyOf",
        }
    }
}

/// A schema node. Every field is optional: a sparse or malformed schema
/// reduces rendered detail, it never fails.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<TypeSet>,

    pub format: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default)]
    pub required: Vec<String>,

    pub items: Option<Box<SchemaOrRef>>,

    #[serde(rename = "allOf", default)]
    pub all_of: Vec<SchemaOrRef>,

    #[serde(rename = "oneOf", default)]
    pub one_of: Vec<SchemaOrRef>,

    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<SchemaOrRef>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,
}

impl Schema {
    /// Composition keyword on this node, if any, with its branches. `allOf`
    /// wins over `oneOf` wins over `anyOf` when a document declares several.
    pub fn composition(&self) -> Option<(CompositionKind, &[SchemaOrRef])> {
        if !self.all_of.is_empty() {
            Some((CompositionKind::AllOf, &self.all_of))
        } else if !self.one_of.is_empty() {
            Some((CompositionKind::OneOf, &self.one_of))
        } else if !self.any_of.is_empty() {
            Some((CompositionKind::AnyOf, &self.any_of))
        } else {
            None
        }
    }

    /// Declared `type` keyword, without the implied-object fallback.
    pub fn declared_type(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(TypeSet::primary)
    }

    /// Declared or implied type name. A node with properties but no `type`
    /// keyword counts as an object.
    pub fn type_name(&self) -> Option<&str> {
        self.declared_type()
            .or_else(|| (!self.properties.is_empty()).then_some("object"))
    }

    pub fn is_object(&self) -> bool {
        self.type_name() == Some("object")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(json: serde_json::Value) -> Schema {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn type_set_primary_skips_null() {
        let s = schema(serde_json::json!({ "type": ["null", "string"] }));
        assert_eq!(s.declared_type(), Some("string"));

        let only_null = schema(serde_json::json!({ "type": ["null"] }));
        assert_eq!(only_null.declared_type(), Some("null"));
    }

    #[test]
    fn properties_imply_object() {
        let s = schema(serde_json::json!({ "properties": { "a": {} } }));
        assert_eq!(s.type_name(), Some("object"));
        assert!(s.is_object());
        assert_eq!(s.declared_type(), None);
    }

    #[test]
    fn composition_priority() {
        let s = schema(serde_json::json!({
            "allOf": [{ "type": "string" }],
            "oneOf": [{ "type": "integer" }],
        }));
        let (kind, branches) = s.composition().unwrap();
        assert_eq!(kind, CompositionKind::AllOf);
        assert_eq!(branches.len(), 1);
    }
}
