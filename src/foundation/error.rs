/// Crate-wide result alias.
pub type TraceResult<T> = Result<T, TraceError>;

/// Errors surfaced by the tracing engine.
///
/// Conditions the engine is expected to ride out (layers not yet allocated, empty character
/// lists, taps) are not errors; they are reported as skipped operations instead.
#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    /// Invalid configuration, geometry or index.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster surface allocation or compositing failure.
    #[error("surface error: {0}")]
    Surface(String),

    /// Practice session state failure.
    #[error("session error: {0}")]
    Session(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TraceError {
    /// Build a [`TraceError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TraceError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`TraceError::Session`].
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Build a [`TraceError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TraceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
