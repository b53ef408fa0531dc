use async_trait::async_trait;

use crate::domain::session::models::Alert;
use crate::domain::session::models::SessionOverviewEntry;
use crate::domain::session::models::SessionRecord;
use crate::session::errors::SessionError;

/// Port for session bookkeeping operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Mirror a freshly issued token for the administrative view.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn record_login(&self, record: SessionRecord) -> Result<(), SessionError>;

    /// Sessions joined with usernames plus the alerts log, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn overview(&self) -> Result<(Vec<SessionOverviewEntry>, Vec<Alert>), SessionError>;

    /// Revoke a token: drop it from the live store, deactivate its mirror
    /// row, and log an alert. Idempotent.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn revoke(&self, token: &str) -> Result<(), SessionError>;
}

/// Persistence operations for the session mirror.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    /// Persist a session row.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn record(&self, record: SessionRecord) -> Result<(), SessionError>;

    /// Clear the active flag on a session row. A missing row is not an
    /// error.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn deactivate(&self, token: &str) -> Result<(), SessionError>;

    /// Retrieve every session row joined with its owner's username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_with_users(&self) -> Result<Vec<SessionOverviewEntry>, SessionError>;
}

/// Persistence operations for the alerts log.
#[async_trait]
pub trait AlertRepository: Send + Sync + 'static {
    /// Append a message to the alerts log.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn record(&self, message: &str) -> Result<(), SessionError>;

    /// Retrieve alerts, most recent first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_recent(&self) -> Result<Vec<Alert>, SessionError>;
}
