use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated user ID in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that resolves the bearer credential to a user id.
///
/// The whole `Authorization` header value goes to the authenticator, which
/// distinguishes malformed credentials, unsupported schemes, and unknown or
/// expired tokens internally; every kind collapses to the same 401 here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let credential = extract_credential(&req)?;

    let user_id = state.authenticator.authorize(credential).map_err(|e| {
        tracing::warn!(reason = %e, "Credential rejected");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(user_id),
    });

    Ok(next.run(req).await)
}

fn extract_credential(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized()
        })?;

    header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        unauthorized()
    })
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Unauthorized"
        })),
    )
        .into_response()
}
