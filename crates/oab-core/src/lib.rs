//! Condense OpenAPI/Swagger documents (2.0 / 3.0 / 3.1) into compact
//! plain-text summaries sized for a language model's context window.
//!
//! The crate does no I/O: decode bytes with [`parse::from_yaml`] or
//! [`parse::from_json`], then hand the document to [`summarize`]. Both
//! physical document shapes collapse to one behavior behind
//! [`normalize::DocumentView`].

pub mod error;
pub mod normalize;
pub mod parse;
pub mod render;

pub use error::ParseError;
pub use render::summarize;
