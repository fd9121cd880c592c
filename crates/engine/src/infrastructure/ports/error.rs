//! Error types for port operations.

/// Plan store failures.
///
/// A missing plan is not an error: lookups return `None`.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// I/O against the backing store failed; `operation` names the step.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// A stored document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err)
    }
}
