use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::session::models::SessionOverviewEntry;
use crate::domain::session::models::SessionRecord;
use crate::session::errors::SessionError;
use crate::session::ports::SessionRepository;

pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_overview_row(row: &SqliteRow) -> Result<SessionOverviewEntry, SessionError> {
    let database_error = |e: sqlx::Error| SessionError::DatabaseError(e.to_string());

    Ok(SessionOverviewEntry {
        token: row.try_get("token").map_err(database_error)?,
        username: row.try_get("username").map_err(database_error)?,
        client_ip: row.try_get("client_ip").map_err(database_error)?,
        client_agent: row.try_get("client_agent").map_err(database_error)?,
        expires_at: row.try_get("expires_at").map_err(database_error)?,
        active: row.try_get("active").map_err(database_error)?,
    })
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn record(&self, record: SessionRecord) -> Result<(), SessionError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (token, user_id, client_ip, client_agent, expires_at, active)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&record.token)
        .bind(record.user_id.to_string())
        .bind(&record.client_ip)
        .bind(&record.client_agent)
        .bind(record.expires_at)
        .bind(record.active)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn deactivate(&self, token: &str) -> Result<(), SessionError> {
        // Zero rows affected just means the token was never mirrored or is
        // already inactive; revocation stays idempotent.
        sqlx::query(
            r#"
            UPDATE sessions
            SET active = 0
            WHERE token = ?1
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list_with_users(&self) -> Result<Vec<SessionOverviewEntry>, SessionError> {
        let rows = sqlx::query(
            r#"
            SELECT s.token, u.username, s.client_ip, s.client_agent, s.expires_at, s.active
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            ORDER BY s.expires_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        rows.iter().map(map_overview_row).collect()
    }
}
