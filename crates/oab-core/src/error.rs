use thiserror::Error;

/// Decode failures. These are the only fatal errors in the crate: the
/// rendering core has no error channel, every lookup miss degrades to a
/// placeholder or a dropped line instead of failing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
