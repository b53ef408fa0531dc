use thiserror::Error;

/// Error for session bookkeeping operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
