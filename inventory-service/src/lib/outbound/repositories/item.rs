use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::inventory::models::ItemAssignment;
use crate::domain::inventory::models::NewItemAssignment;
use crate::domain::user::models::UserId;
use crate::inventory::errors::InventoryError;
use crate::inventory::ports::ItemRepository;

pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_item_row(row: &SqliteRow) -> Result<ItemAssignment, InventoryError> {
    let database_error = |e: sqlx::Error| InventoryError::DatabaseError(e.to_string());

    let user_id: String = row.try_get("user_id").map_err(database_error)?;
    let expires_on: NaiveDate = row.try_get("expires_on").map_err(database_error)?;

    Ok(ItemAssignment {
        id: row.try_get("id").map_err(database_error)?,
        user_id: UserId(
            Uuid::parse_str(&user_id)
                .map_err(|e| InventoryError::DatabaseError(e.to_string()))?,
        ),
        code: row.try_get("code").map_err(database_error)?,
        description: row.try_get("description").map_err(database_error)?,
        stock: row.try_get("stock").map_err(database_error)?,
        expires_on,
        status: row.try_get("status").map_err(database_error)?,
    })
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn insert(&self, item: NewItemAssignment) -> Result<ItemAssignment, InventoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO items (user_id, code, description, stock, expires_on, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(item.user_id.to_string())
        .bind(&item.code)
        .bind(&item.description)
        .bind(item.stock)
        .bind(item.expires_on)
        .bind(&item.status)
        .execute(&self.pool)
        .await
        .map_err(|e| InventoryError::DatabaseError(e.to_string()))?;

        Ok(ItemAssignment {
            id: result.last_insert_rowid(),
            user_id: item.user_id,
            code: item.code,
            description: item.description,
            stock: item.stock,
            expires_on: item.expires_on,
            status: item.status,
        })
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ItemAssignment>, InventoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, code, description, stock, expires_on, status
            FROM items
            WHERE user_id = ?1
            ORDER BY id
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| InventoryError::DatabaseError(e.to_string()))?;

        rows.iter().map(map_item_row).collect()
    }
}
