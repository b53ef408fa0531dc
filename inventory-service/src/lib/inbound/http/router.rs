use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_item::add_item;
use super::handlers::admin::admin_overview;
use super::handlers::admin::revoke_session;
use super::handlers::list_items::list_items;
use super::handlers::login::login;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::inventory::service::InventoryService;
use crate::domain::session::service::SessionService;
use crate::domain::user::service::UserService;
use crate::outbound::catalog::InMemoryCatalog;
use crate::outbound::repositories::alert::SqliteAlertRepository;
use crate::outbound::repositories::item::SqliteItemRepository;
use crate::outbound::repositories::session::SqliteSessionRepository;
use crate::outbound::repositories::user::SqliteUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    pub inventory_service: Arc<InventoryService<SqliteItemRepository, InMemoryCatalog>>,
    pub session_service: Arc<SessionService<SqliteSessionRepository, SqliteAlertRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<SqliteUserRepository>>,
    inventory_service: Arc<InventoryService<SqliteItemRepository, InMemoryCatalog>>,
    session_service: Arc<SessionService<SqliteSessionRepository, SqliteAlertRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        inventory_service,
        session_service,
        authenticator,
    };

    // Route paths keep the original application's wire surface.
    let public_routes = Router::new()
        .route("/registro", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/agregar_producto", post(add_item))
        .route("/mis_productos", get(list_items))
        .route("/admin", get(admin_overview))
        .route("/admin/cerrar_sesion", post(revoke_session))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
