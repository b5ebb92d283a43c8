/// Where a type descriptor will appear. Verbosity and truncation depend on
/// the position, not on the schema itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    Parameter,
    RequestBody,
    Response,
    SchemaListing,
}

/// Flags derived once from a [`RenderContext`], never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub include_format: bool,
    pub include_properties: bool,
    pub property_limit: Option<usize>,
}

impl RenderContext {
    pub fn options(self) -> RenderOptions {
        match self {
            RenderContext::Parameter => RenderOptions {
                include_format: false,
                include_properties: true,
                property_limit: None,
            },
            RenderContext::RequestBody => RenderOptions {
                include_format: false,
                include_properties: true,
                property_limit: Some(3),
            },
            RenderContext::Response => RenderOptions {
                include_format: true,
                include_properties: true,
                property_limit: None,
            },
            RenderContext::SchemaListing => RenderOptions {
                include_format: false,
                include_properties: true,
                property_limit: None,
            },
        }
    }

    /// Placeholder for a schema this context cannot describe. The casing
    /// difference is a fixed per-context convention.
    pub fn unknown_token(self) -> &'static str {
        match self {
            RenderContext::Parameter => "unknown",
            _ => "Unknown",
        }
    }
}
