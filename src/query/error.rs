use thiserror::Error;

/// Errors raised while validating query input, before anything is sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Inputs are missing or mutually inconsistent.
    #[error("invalid query: {message}")]
    Validation {
        /// What was wrong with the input.
        message: String,
    },

    /// A named variant (media kind, metric, ...) is not supported.
    #[error("{kind} '{name}' is not supported")]
    Unsupported {
        /// Category of the variant, e.g. `"media"` or `"metric"`.
        kind: &'static str,
        /// Offending variant name.
        name: String,
    },

    /// The same target vector appears more than once in a target spec.
    #[error("target vector '{name}' is listed more than once")]
    DuplicateTargetVector {
        /// Duplicated vector name.
        name: String,
    },
}

impl QueryError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        QueryError::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn unsupported(kind: &'static str, name: impl Into<String>) -> Self {
        QueryError::Unsupported {
            kind,
            name: name.into(),
        }
    }
}
