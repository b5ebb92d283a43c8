use serde::Deserialize;

/// OAuth2 flow configuration (OpenAPI 3.x). Only flow names surface in the
/// summary, so the per-flow detail stays opaque.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthFlows {
    pub implicit: Option<serde_json::Value>,

    pub password: Option<serde_json::Value>,

    #[serde(rename = "clientCredentials")]
    pub client_credentials: Option<serde_json::Value>,

    #[serde(rename = "authorizationCode")]
    pub authorization_code: Option<serde_json::Value>,
}

/// A security scheme across versions. `type` stays a free string (`apiKey`,
/// `http`, `oauth2`, `openIdConnect`, 2.0's `basic`, ...) so an unknown kind
/// still renders instead of failing to decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type", default)]
    pub scheme_type: String,

    pub description: Option<String>,

    /// Key name, for `apiKey` schemes.
    pub name: Option<String>,

    #[serde(rename = "in")]
    pub location: Option<String>,

    /// HTTP auth scheme (`bearer`, `basic`, ...).
    pub scheme: Option<String>,

    #[serde(rename = "bearerFormat")]
    pub bearer_format: Option<String>,

    /// Swagger 2.0 single OAuth2 flow name.
    pub flow: Option<String>,

    pub flows: Option<OAuthFlows>,
}
