/// Convenience result type used across the crate.
pub type FlagResult<T> = Result<T, FlagError>;

/// Error taxonomy for the editing core.
///
/// None of these are fatal: every path that produces one leaves the session in a well-defined
/// mode (`Standard` or point entry).
#[derive(thiserror::Error, Debug)]
pub enum FlagError {
    /// Rejected user input (for example a non-numeric projection plane field).
    #[error("validation error: {0}")]
    Validation(String),

    /// A flag could not be committed because the configured limit was reached.
    #[error("flag limit reached: at most {max} flags can be added")]
    FlagLimit {
        /// Configured maximum number of flags.
        max: usize,
    },

    /// The solver answered with a non-zero error code.
    #[error("solver error {code}: {message}")]
    Solver {
        /// Raw code reported by the solver.
        code: u32,
        /// Message mapped through the caller's [`crate::ErrorMessages`] table.
        message: String,
    },

    /// The requested action is not available in the active mode.
    #[error("mode error: {0}")]
    Mode(String),

    /// Transformation cache misuse or an incomplete frame table.
    #[error("cache error: {0}")]
    Cache(String),

    /// Errors when serializing or deserializing payloads.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlagError {
    /// Build a [`FlagError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlagError::Mode`] value.
    pub fn mode(msg: impl Into<String>) -> Self {
        Self::Mode(msg.into())
    }

    /// Build a [`FlagError::Cache`] value.
    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache(msg.into())
    }

    /// Build a [`FlagError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Text shown to the user when this error is surfaced through the UI hooks.
    pub fn user_message(&self) -> String {
        match self {
            Self::Solver { message, .. } => message.clone(),
            Self::FlagLimit { max } => format!("You can not add more than {max} flags!"),
            Self::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
