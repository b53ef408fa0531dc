use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::session::models::Alert;
use crate::session::errors::SessionError;
use crate::session::ports::AlertRepository;

pub struct SqliteAlertRepository {
    pool: SqlitePool,
}

impl SqliteAlertRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_alert_row(row: &SqliteRow) -> Result<Alert, SessionError> {
    let database_error = |e: sqlx::Error| SessionError::DatabaseError(e.to_string());

    Ok(Alert {
        id: row.try_get("id").map_err(database_error)?,
        message: row.try_get("message").map_err(database_error)?,
        created_at: row.try_get("created_at").map_err(database_error)?,
    })
}

#[async_trait]
impl AlertRepository for SqliteAlertRepository {
    async fn record(&self, message: &str) -> Result<(), SessionError> {
        sqlx::query(
            r#"
            INSERT INTO alerts (message, created_at)
            VALUES (?1, ?2)
            "#,
        )
        .bind(message)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list_recent(&self) -> Result<Vec<Alert>, SessionError> {
        let rows = sqlx::query(
            r#"
            SELECT id, message, created_at
            FROM alerts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        rows.iter().map(map_alert_row).collect()
    }
}
