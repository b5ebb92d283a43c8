use indexmap::IndexMap;
use serde::Deserialize;

use super::components::Components;
use super::operation::PathItem;
use super::parameter::ParameterOrRef;
use super::schema::SchemaOrRef;
use super::security::SecurityScheme;
use super::server::Server;

/// Info object describing the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,

    pub description: Option<String>,

    #[serde(default)]
    pub version: String,
}

/// Top-level document covering both physical shapes. OpenAPI 3.x keeps
/// reusable definitions under `components` and servers in a list; Swagger 2.0
/// keeps them at the top level next to `host`/`basePath`/`schemes`. Fields of
/// the shape that is not in play simply stay empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    pub openapi: Option<String>,

    pub swagger: Option<String>,

    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub servers: Vec<Server>,

    // Swagger 2.0 base URL pieces
    pub host: Option<String>,

    #[serde(rename = "basePath")]
    pub base_path: Option<String>,

    #[serde(default)]
    pub schemes: Vec<String>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub components: Components,

    /// Swagger 2.0 schema definitions.
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaOrRef>,

    /// Swagger 2.0 top-level reusable parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, ParameterOrRef>,

    /// Swagger 2.0 security schemes.
    #[serde(rename = "securityDefinitions", default)]
    pub security_definitions: IndexMap<String, SecurityScheme>,
}
