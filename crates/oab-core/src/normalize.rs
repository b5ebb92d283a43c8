//! Uniform view over the two physical document shapes.
//!
//! Swagger 2.0 and OpenAPI 3.x keep their reusable definitions in different
//! places and describe the base URL differently. A per-version adapter behind
//! one lookup trait normalizes that once, so the renderer never branches on
//! the version for lookups.

use indexmap::IndexMap;

use crate::parse::document::Document;
use crate::parse::parameter::{Parameter, ParameterOrRef};
use crate::parse::schema::SchemaOrRef;
use crate::parse::security::SecurityScheme;
use crate::parse::server::Server;

/// Which physical shape the source document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    SwaggerV2,
    OpenApiV3,
}

/// A document is Swagger 2.0 iff its `swagger` field equals exactly `"2.0"`;
/// anything else is treated as OpenAPI 3.x.
pub fn detect_version(doc: &Document) -> SpecVersion {
    if doc.swagger.as_deref() == Some("2.0") {
        SpecVersion::SwaggerV2
    } else {
        SpecVersion::OpenApiV3
    }
}

/// Version-specific lookups. Each adapter knows where its shape keeps
/// reusable definitions; everything downstream goes through this trait.
trait VersionAdapter {
    fn schemas(&self) -> &IndexMap<String, SchemaOrRef>;
    fn parameter(&self, name: &str) -> Option<&Parameter>;
    fn security_schemes(&self) -> &IndexMap<String, SecurityScheme>;
    fn base_url(&self) -> Option<String>;
}

struct SwaggerTwo<'a>(&'a Document);

impl VersionAdapter for SwaggerTwo<'_> {
    fn schemas(&self) -> &IndexMap<String, SchemaOrRef> {
        &self.0.definitions
    }

    fn parameter(&self, name: &str) -> Option<&Parameter> {
        match self.0.parameters.get(name)? {
            ParameterOrRef::Parameter(p) => Some(p),
            // Single-hop resolution only: an aliased entry is unresolvable.
            ParameterOrRef::Ref { .. } => None,
        }
    }

    fn security_schemes(&self) -> &IndexMap<String, SecurityScheme> {
        &self.0.security_definitions
    }

    fn base_url(&self) -> Option<String> {
        let host = self.0.host.as_deref().unwrap_or("");
        let base_path = self.0.base_path.as_deref().unwrap_or("");
        if host.is_empty() && base_path.is_empty() {
            return None;
        }
        let scheme = self.0.schemes.first().map(String::as_str).unwrap_or("https");
        Some(format!("{scheme}://{host}{base_path}"))
    }
}

struct OpenApiThree<'a>(&'a Document);

impl VersionAdapter for OpenApiThree<'_> {
    fn schemas(&self) -> &IndexMap<String, SchemaOrRef> {
        &self.0.components.schemas
    }

    fn parameter(&self, name: &str) -> Option<&Parameter> {
        match self.0.components.parameters.get(name)? {
            ParameterOrRef::Parameter(p) => Some(p),
            ParameterOrRef::Ref { .. } => None,
        }
    }

    fn security_schemes(&self) -> &IndexMap<String, SecurityScheme> {
        &self.0.components.security_schemes
    }

    fn base_url(&self) -> Option<String> {
        self.0.servers.first().map(|s| s.url.clone())
    }
}

/// Read-only view over one document, valid for a single render pass.
pub struct DocumentView<'a> {
    doc: &'a Document,
    version: SpecVersion,
    adapter: Box<dyn VersionAdapter + 'a>,
}

impl<'a> DocumentView<'a> {
    pub fn new(doc: &'a Document) -> Self {
        let version = detect_version(doc);
        let adapter: Box<dyn VersionAdapter + 'a> = match version {
            SpecVersion::SwaggerV2 => Box::new(SwaggerTwo(doc)),
            SpecVersion::OpenApiV3 => Box::new(OpenApiThree(doc)),
        };
        Self {
            doc,
            version,
            adapter,
        }
    }

    pub fn version(&self) -> SpecVersion {
        self.version
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Named schemas: 2.0 `definitions`, 3.x `components.schemas`.
    pub fn schemas(&self) -> &IndexMap<String, SchemaOrRef> {
        self.adapter.schemas()
    }

    /// Reusable parameter by name: 2.0 top-level `parameters`, 3.x
    /// `components.parameters`.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.adapter.parameter(name)
    }

    pub fn security_schemes(&self) -> &IndexMap<String, SecurityScheme> {
        self.adapter.security_schemes()
    }

    /// Primary base URL: first server entry (3.x) or
    /// `<scheme>://<host><basePath>` (2.0, scheme defaulting to `https`).
    pub fn base_url(&self) -> Option<String> {
        self.adapter.base_url()
    }

    /// Servers beyond the primary one (3.x only).
    pub fn extra_servers(&self) -> &[Server] {
        match self.version {
            SpecVersion::OpenApiV3 if self.doc.servers.len() > 1 => &self.doc.servers[1..],
            _ => &[],
        }
    }
}
