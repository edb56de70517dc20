/// Convenience result type used across the photobooth crate.
pub type PhotoboothResult<T> = Result<T, PhotoboothError>;

/// Error taxonomy for the fallible surfaces around the core.
///
/// Filters and overlay operations are total and never produce one of these. Errors come from
/// frame construction, strip composition, capture-flow transitions and configuration parsing.
#[derive(thiserror::Error, Debug)]
pub enum PhotoboothError {
    /// Invalid caller-provided data (buffer sizes, ranges, template ids).
    #[error("validation error: {0}")]
    Validation(String),

    /// A capture-flow action that is not legal in the current session state.
    #[error("flow error: {0}")]
    Flow(String),

    /// Errors while resizing, decoding or encoding images.
    #[error("image error: {0}")]
    Image(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhotoboothError {
    /// Build a [`PhotoboothError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PhotoboothError::Flow`] value.
    pub fn flow(msg: impl Into<String>) -> Self {
        Self::Flow(msg.into())
    }

    /// Build a [`PhotoboothError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`PhotoboothError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PhotoboothError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
