use indexmap::IndexMap;
use serde::Deserialize;

use super::media_type::MediaType;
use super::schema::SchemaOrRef;

/// A response in either physical shape: 3.x nests schemas per media type
/// under `content`, 2.0 attaches a single `schema` directly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    pub description: Option<String>,

    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    /// Swagger 2.0 response schema.
    pub schema: Option<SchemaOrRef>,
}
