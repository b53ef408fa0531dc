use chrono::NaiveDate;

use crate::user::models::UserId;

/// Read-only master catalog entry.
///
/// Loaded once at startup; immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: String,
    pub description: String,
    pub stock: i64,
}

/// A catalog product tracked by a user with its expiration date and the
/// urgency status derived when the record was created.
///
/// Assignments are created and listed, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAssignment {
    pub id: i64,
    pub user_id: UserId,
    pub code: String,
    pub description: String,
    pub stock: i64,
    pub expires_on: NaiveDate,
    pub status: String,
}

/// Assignment data before the row id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemAssignment {
    pub user_id: UserId,
    pub code: String,
    pub description: String,
    pub stock: i64,
    pub expires_on: NaiveDate,
    pub status: String,
}

/// Command to track a catalog product for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItemCommand {
    pub code: String,
    pub expires_on: NaiveDate,
}

impl AddItemCommand {
    pub fn new(code: String, expires_on: NaiveDate) -> Self {
        Self { code, expires_on }
    }
}
