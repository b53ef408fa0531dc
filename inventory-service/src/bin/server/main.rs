use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use inventory_service::config::Config;
use inventory_service::domain::inventory::service::InventoryService;
use inventory_service::domain::session::service::SessionService;
use inventory_service::domain::user::models::Username;
use inventory_service::domain::user::ports::UserServicePort;
use inventory_service::domain::user::service::UserService;
use inventory_service::inbound::http::router::create_router;
use inventory_service::outbound::catalog::InMemoryCatalog;
use inventory_service::outbound::repositories::SqliteAlertRepository;
use inventory_service::outbound::repositories::SqliteItemRepository;
use inventory_service::outbound::repositories::SqliteSessionRepository;
use inventory_service::outbound::repositories::SqliteUserRepository;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "inventory-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        session_ttl_minutes = config.auth.session_ttl_minutes,
        catalog_path = %config.catalog.path,
        "Configuration loaded"
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(max_connections = 5, database = "sqlite", "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(Duration::minutes(
        config.auth.session_ttl_minutes,
    )));

    let catalog = Arc::new(InMemoryCatalog::load(&config.catalog.path));

    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let item_repository = Arc::new(SqliteItemRepository::new(pool.clone()));
    let session_repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let alert_repository = Arc::new(SqliteAlertRepository::new(pool));

    let user_service = Arc::new(UserService::new(user_repository));
    let inventory_service = Arc::new(InventoryService::new(item_repository, catalog));
    let session_service = Arc::new(SessionService::new(
        session_repository,
        alert_repository,
        Arc::clone(&authenticator),
    ));

    if let Some(admin_username) = &config.auth.admin_username {
        let username = Username::new(admin_username.clone())?;
        user_service.promote_to_admin(&username).await?;
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        user_service,
        inventory_service,
        session_service,
        authenticator,
    );

    axum::serve(http_listener, application).await?;

    Ok(())
}
