use chrono::DateTime;
use chrono::Utc;

use crate::user::models::UserId;

/// Persisted mirror of an issued session token.
///
/// Administrative bookkeeping only; token validation runs against the
/// in-memory store, never against these rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: UserId,
    pub client_ip: String,
    pub client_agent: String,
    pub expires_at: DateTime<Utc>,
    pub active: bool,
}

/// A session row joined with its owner's username, as shown in the admin
/// view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOverviewEntry {
    pub token: String,
    pub username: String,
    pub client_ip: String,
    pub client_agent: String,
    pub expires_at: DateTime<Utc>,
    pub active: bool,
}

/// Entry in the administrative alerts log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
