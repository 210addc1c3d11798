pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod notify;
pub mod otp;
pub mod todos;

use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
pub use config::Settings;

pub use auth::{AuthService, AuthenticatedUser, TokenIssuer};
pub use db::{PgTodoRepository, PgUserRepository, Todo, TodoRepository, User, UserRepository};
pub use notify::{LogNotifier, Notifier};
pub use otp::{CodeStore, MemoryCodeStore};

/// Health check endpoint handler
/// Returns a JSON response with server status and timestamp
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Application state shared across all components
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub auth_service: Arc<AuthService>,
    pub todos: Arc<dyn TodoRepository>,
    pub codes: Arc<dyn CodeStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Connects to the database, applies migrations and wires the
    /// PostgreSQL repositories.
    pub async fn new(config: Settings) -> Result<Self> {
        let pool = db::operations::connect(
            &config.database.url,
            config.database.max_connections,
            Duration::from_secs(5),
        )
        .await?;
        db::operations::run_migrations(&pool).await?;

        Ok(Self::with_pool(config, pool))
    }

    /// Wires the state around an existing pool without touching it.
    pub fn with_pool(config: Settings, pool: PgPool) -> Self {
        let pool = Arc::new(pool);
        let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
        let todos: Arc<dyn TodoRepository> = Arc::new(PgTodoRepository::new(pool));

        Self::from_parts(
            config,
            todos,
            users,
            Arc::new(MemoryCodeStore::new()),
            Arc::new(LogNotifier),
        )
    }

    pub fn from_parts(
        config: Settings,
        todos: Arc<dyn TodoRepository>,
        users: Arc<dyn UserRepository>,
        codes: Arc<dyn CodeStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let tokens = TokenIssuer::new(
            &config.auth.jwt_secret,
            chrono::Duration::hours(config.auth.token_expiry_hours),
        );

        Self {
            config: Arc::new(config),
            auth_service: Arc::new(AuthService::new(users, tokens)),
            todos,
            codes,
            notifier,
        }
    }
}

/// Registers every route plus the JSON and query error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .route("/health", web::get().to(health_check))
    .configure(todos::configure)
    .configure(auth::configure);
}
