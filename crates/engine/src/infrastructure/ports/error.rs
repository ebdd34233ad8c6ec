//! Error types for port operations.

/// Storage operation errors with context for debugging.
///
/// A missing record is not an error here; ports return `Option`/`bool`.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Storage operation failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Storage error with operation context.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            RepoError::storage("persist", "disk full").to_string(),
            "Storage error in persist: disk full"
        );
        assert_eq!(
            RepoError::serialization("trailing comma").to_string(),
            "Serialization error: trailing comma"
        );
    }
}
