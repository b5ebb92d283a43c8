use serde::Deserialize;

use super::schema::SchemaOrRef;

/// A media type object. Only the schema matters for the summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    pub schema: Option<SchemaOrRef>,
}
