use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
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
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"[
    {"code": "A100", "description": "Widget", "stock": 12},
    {"code": "B200", "description": "Gadget", "stock": 3}
]"#;

/// Test application that spawns a real server against a scratch database
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    // Held so the scratch database outlives the server.
    _data_dir: TempDir,
    _pool: SqlitePool,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp dir");

        let db_path = data_dir.path().join("inventory.db");
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to open scratch database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let catalog_path = data_dir.path().join("catalog.json");
        std::fs::write(&catalog_path, CATALOG_JSON).expect("Failed to write catalog file");
        let catalog = Arc::new(InMemoryCatalog::load(&catalog_path));

        let authenticator = Arc::new(Authenticator::new(Duration::minutes(30)));

        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let item_repository = Arc::new(SqliteItemRepository::new(pool.clone()));
        let session_repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
        let alert_repository = Arc::new(SqliteAlertRepository::new(pool.clone()));

        let user_service = Arc::new(UserService::new(user_repository));
        let inventory_service = Arc::new(InventoryService::new(item_repository, catalog));
        let session_service = Arc::new(SessionService::new(
            session_repository,
            alert_repository,
            Arc::clone(&authenticator),
        ));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(
            Arc::clone(&user_service),
            inventory_service,
            session_service,
            authenticator,
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            user_service,
            _data_dir: data_dir,
            _pool: pool,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user through the API
    pub async fn register(&self, username: &str, password: &str) {
        let response = self
            .post("/registro")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Log a user in through the API and return the session token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Login response should carry a token")
            .to_string()
    }

    /// Grant the admin role directly, bypassing the HTTP surface
    pub async fn make_admin(&self, username: &str) {
        let username = Username::new(username.to_string()).expect("Invalid test username");
        let promoted = self
            .user_service
            .promote_to_admin(&username)
            .await
            .expect("Failed to promote user");
        assert!(promoted, "User to promote should exist");
    }
}
