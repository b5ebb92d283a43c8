use serde::Deserialize;

use super::schema::{SchemaOrRef, TypeSet};

/// A parameter in either physical shape. OpenAPI 3.x nests type information
/// under `schema`; Swagger 2.0 puts `type` and `enum` directly on the
/// parameter. Both sets of fields live here and the renderer picks the
/// version-appropriate ones. Parameter lines never show formats, so a 2.0
/// `format` key is left to serde's unknown-field handling.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,

    /// `path`, `query`, `header`, `cookie` — plus `body` and `formData` in
    /// Swagger 2.0. Kept as a free string so it renders verbatim.
    #[serde(rename = "in", default)]
    pub location: String,

    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    // OpenAPI 3.x (and Swagger 2.0 `in: body`)
    pub schema: Option<SchemaOrRef>,

    // Swagger 2.0 direct type info
    #[serde(rename = "type")]
    pub param_type: Option<TypeSet>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,
}

/// A reference or inline parameter.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Parameter(Parameter),
}
