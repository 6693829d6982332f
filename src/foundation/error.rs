/// Convenience result type used across the trajectory engine.
pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Missing parameters and degenerate geometry are recovered inside the sampler and
/// the composer; they only surface here from the typed resolution layer.
#[derive(thiserror::Error, Debug)]
pub enum TrajectoryError {
    /// Invalid user-provided spec or record data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Animation type tag not present in the registry.
    #[error("unknown animation type: '{0}'")]
    UnknownAnimationType(String),

    /// A required parameter is absent or has the wrong shape.
    #[error("missing parameter '{key}' for animation type '{kind}'")]
    MissingParameter {
        /// Animation type tag being resolved.
        kind: String,
        /// Offending parameter key.
        key: String,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrajectoryError {
    /// Build a [`TrajectoryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrajectoryError::UnknownAnimationType`] value.
    pub fn unknown_type(tag: impl Into<String>) -> Self {
        Self::UnknownAnimationType(tag.into())
    }

    /// Build a [`TrajectoryError::MissingParameter`] value.
    pub fn missing(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingParameter {
            kind: kind.into(),
            key: key.into(),
        }
    }

    /// Build a [`TrajectoryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TrajectoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
