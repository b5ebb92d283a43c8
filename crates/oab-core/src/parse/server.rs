use serde::Deserialize;

/// A server URL definition (OpenAPI 3.x).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub url: String,

    pub description: Option<String>,
}
