use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::Alert;
use crate::domain::session::models::SessionOverviewEntry;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn admin_overview(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<AdminOverviewResponseData>, ApiError> {
    require_admin(&state, &user).await?;

    let (sessions, alerts) = state
        .session_service
        .overview()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AdminOverviewResponseData {
            sessions: sessions.iter().map(SessionData::from).collect(),
            alerts: alerts.iter().map(AlertData::from).collect(),
        },
    ))
}

pub async fn revoke_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<RevokeSessionRequest>,
) -> Result<ApiSuccess<RevokeSessionResponseData>, ApiError> {
    require_admin(&state, &user).await?;

    state
        .session_service
        .revoke(&body.token)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RevokeSessionResponseData { token: body.token },
    ))
}

/// Resolve the caller and reject anyone without the admin role.
async fn require_admin(state: &AppState, user: &AuthenticatedUser) -> Result<(), ApiError> {
    let caller = state
        .user_service
        .get_user(&user.user_id)
        .await
        .map_err(ApiError::from)?;

    if !caller.role.is_admin() {
        tracing::warn!(user_id = %caller.id, "Non-admin attempted administrative action");
        return Err(ApiError::Forbidden("Access denied".to_string()));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevokeSessionRequest {
    token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevokeSessionResponseData {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminOverviewResponseData {
    pub sessions: Vec<SessionData>,
    pub alerts: Vec<AlertData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionData {
    pub token: String,
    pub username: String,
    pub client_ip: String,
    pub client_agent: String,
    pub expires_at: DateTime<Utc>,
    pub active: bool,
}

impl From<&SessionOverviewEntry> for SessionData {
    fn from(entry: &SessionOverviewEntry) -> Self {
        Self {
            token: entry.token.clone(),
            username: entry.username.clone(),
            client_ip: entry.client_ip.clone(),
            client_agent: entry.client_agent.clone(),
            expires_at: entry.expires_at,
            active: entry.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertData {
    pub id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Alert> for AlertData {
    fn from(alert: &Alert) -> Self {
        Self {
            id: alert.id,
            message: alert.message.clone(),
            created_at: alert.created_at,
        }
    }
}
