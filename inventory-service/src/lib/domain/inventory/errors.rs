use thiserror::Error;

/// Error for inventory operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidDateFormat(String),

    #[error("Product not found in catalog: {0}")]
    UnknownProduct(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
