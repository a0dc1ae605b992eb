/// Convenience result type used across trackcard.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by the compositor and its helpers.
///
/// Degenerate but well-formed inputs (zero duration, empty strings, geometry that
/// collapses to nothing) are never reported here; they render as empty text or an
/// empty progress fill instead.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Cover or font bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The composited canvas could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid configuration or caller-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration and track data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CardError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for failures caused by undecodable cover or font bytes.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
