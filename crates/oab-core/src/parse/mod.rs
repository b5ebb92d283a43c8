pub mod components;
pub mod document;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod security;
pub mod server;

pub use document::Document;

use crate::error::ParseError;

/// Decode a document from YAML. Both Swagger 2.0 and OpenAPI 3.x shapes are
/// accepted; version detection happens at render time.
pub fn from_yaml(input: &str) -> Result<Document, ParseError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Decode a document from JSON.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    Ok(serde_json::from_str(input)?)
}
