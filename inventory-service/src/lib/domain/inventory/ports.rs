use async_trait::async_trait;

use crate::domain::inventory::models::AddItemCommand;
use crate::domain::inventory::models::CatalogEntry;
use crate::domain::inventory::models::ItemAssignment;
use crate::domain::inventory::models::NewItemAssignment;
use crate::inventory::errors::InventoryError;
use crate::user::models::UserId;

/// Port for inventory domain service operations.
#[async_trait]
pub trait InventoryServicePort: Send + Sync + 'static {
    /// Track a catalog product for a user, deriving its urgency status.
    ///
    /// # Errors
    /// * `UnknownProduct` - Code is not in the catalog
    /// * `DatabaseError` - Database operation failed
    async fn add_item(
        &self,
        user_id: UserId,
        command: AddItemCommand,
    ) -> Result<ItemAssignment, InventoryError>;

    /// List the items tracked by a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items(&self, user_id: UserId) -> Result<Vec<ItemAssignment>, InventoryError>;
}

/// Persistence operations for item assignments.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Persist a new assignment, returning it with its row id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, item: NewItemAssignment) -> Result<ItemAssignment, InventoryError>;

    /// Retrieve every assignment belonging to a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ItemAssignment>, InventoryError>;
}

/// Read-only master product catalog.
///
/// Backed by reference data loaded at process start; lookups never touch
/// external I/O.
pub trait Catalog: Send + Sync + 'static {
    /// Look up a product by code. Codes are matched after trimming,
    /// case-insensitively.
    fn lookup(&self, code: &str) -> Option<CatalogEntry>;
}
