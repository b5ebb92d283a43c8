use indexmap::IndexMap;
use serde::Deserialize;

use super::parameter::ParameterOrRef;
use super::schema::SchemaOrRef;
use super::security::SecurityScheme;

/// Components object holding reusable definitions (OpenAPI 3.x).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrRef>,

    #[serde(default)]
    pub parameters: IndexMap<String, ParameterOrRef>,

    #[serde(rename = "securitySchemes", default)]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}
