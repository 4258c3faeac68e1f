use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ModelError {
    /// Message without the `validation error:` prefix, suitable for API bodies.
    pub fn message(&self) -> &str {
        match self {
            ModelError::Validation(msg) => msg,
        }
    }
}

/// A required text field counts as missing when it is absent or empty.
pub(crate) fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
