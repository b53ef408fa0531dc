use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::session::models::Alert;
use crate::domain::session::models::SessionOverviewEntry;
use crate::domain::session::models::SessionRecord;
use crate::session::errors::SessionError;
use crate::session::ports::AlertRepository;
use crate::session::ports::SessionRepository;
use crate::session::ports::SessionServicePort;

/// Domain service implementation for session bookkeeping.
///
/// Coordinates the in-memory token store with its persisted mirror so
/// administrative revocation reaches both.
pub struct SessionService<SR, AR>
where
    SR: SessionRepository,
    AR: AlertRepository,
{
    sessions: Arc<SR>,
    alerts: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<SR, AR> SessionService<SR, AR>
where
    SR: SessionRepository,
    AR: AlertRepository,
{
    pub fn new(sessions: Arc<SR>, alerts: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            sessions,
            alerts,
            authenticator,
        }
    }
}

#[async_trait]
impl<SR, AR> SessionServicePort for SessionService<SR, AR>
where
    SR: SessionRepository,
    AR: AlertRepository,
{
    async fn record_login(&self, record: SessionRecord) -> Result<(), SessionError> {
        self.sessions.record(record).await
    }

    async fn overview(&self) -> Result<(Vec<SessionOverviewEntry>, Vec<Alert>), SessionError> {
        let sessions = self.sessions.list_with_users().await?;
        let alerts = self.alerts.list_recent().await?;
        Ok((sessions, alerts))
    }

    async fn revoke(&self, token: &str) -> Result<(), SessionError> {
        // The live store is the validation authority; drop the token there
        // first so the session dies even if the bookkeeping below fails.
        self.authenticator.revoke(token);

        self.sessions.deactivate(token).await?;

        let message = format!("Session revoked by administrator: {}", token);
        if let Err(e) = self.alerts.record(&message).await {
            tracing::error!(error = %e, "Failed to record revocation alert");
        }

        Ok(())
    }
}
