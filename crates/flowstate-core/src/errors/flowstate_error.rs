/// Top-level error for the FlowState engine.
///
/// The analyzer fails atomically: validation runs before any assessor, so an
/// error never comes with a partial analysis.
#[derive(Debug, thiserror::Error)]
pub enum FlowStateError {
    /// A caller-supplied context record is malformed.
    #[error("invalid context: {field} = {value} ({reason})")]
    InvalidContext {
        field: String,
        value: String,
        reason: String,
    },

    /// Configuration could not be parsed or violates its own invariants.
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl FlowStateError {
    /// Build an [`FlowStateError::InvalidContext`] from any displayable value.
    pub fn invalid_context(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidContext {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for FlowStateError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}
