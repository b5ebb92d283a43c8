use indexmap::IndexMap;
use serde::Deserialize;

use super::media_type::MediaType;

/// A request body definition (OpenAPI 3.x).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    pub description: Option<String>,

    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    #[serde(default)]
    pub required: bool,
}
