use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::inventory::expiry;
use crate::domain::inventory::models::AddItemCommand;
use crate::domain::inventory::models::ItemAssignment;
use crate::domain::inventory::models::NewItemAssignment;
use crate::inventory::errors::InventoryError;
use crate::inventory::ports::Catalog;
use crate::inventory::ports::InventoryServicePort;
use crate::inventory::ports::ItemRepository;
use crate::user::models::UserId;

/// Domain service implementation for inventory operations.
pub struct InventoryService<IR, C>
where
    IR: ItemRepository,
    C: Catalog,
{
    items: Arc<IR>,
    catalog: Arc<C>,
}

impl<IR, C> InventoryService<IR, C>
where
    IR: ItemRepository,
    C: Catalog,
{
    pub fn new(items: Arc<IR>, catalog: Arc<C>) -> Self {
        Self { items, catalog }
    }
}

#[async_trait]
impl<IR, C> InventoryServicePort for InventoryService<IR, C>
where
    IR: ItemRepository,
    C: Catalog,
{
    async fn add_item(
        &self,
        user_id: UserId,
        command: AddItemCommand,
    ) -> Result<ItemAssignment, InventoryError> {
        let entry = self
            .catalog
            .lookup(&command.code)
            .ok_or_else(|| InventoryError::UnknownProduct(command.code.clone()))?;

        // The status is derived once, at creation time, against today.
        let status = expiry::classify(command.expires_on, Utc::now().date_naive()).to_string();

        self.items
            .insert(NewItemAssignment {
                user_id,
                code: entry.code,
                description: entry.description,
                stock: entry.stock,
                expires_on: command.expires_on,
                status,
            })
            .await
    }

    async fn list_items(&self, user_id: UserId) -> Result<Vec<ItemAssignment>, InventoryError> {
        self.items.list_for_user(&user_id).await
    }
}
