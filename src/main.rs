use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::net::TcpListener;
use std::time::Duration;
use todo_service::{config::CorsConfig, AppError, AppState, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn build_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        // CORS disabled - use most restrictive settings
        return Cors::default();
    }

    let cors = if config.allow_any_origin {
        Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials()
    };

    cors.max_age(config.max_age as usize)
}

#[actix_web::main]
async fn main() -> todo_service::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    // Load configuration
    let config = Settings::new()?;
    info!("Configuration loaded successfully ({})", config.environment);

    // Initialize application state
    let state = AppState::new(config.clone()).await?;
    let state = web::Data::new(state);
    info!("Database connected and migrations applied");

    // Sweep expired OTP codes
    let codes = state.codes.clone();
    let sweep_interval = Duration::from_secs(config.otp.sweep_interval_seconds);
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(sweep_interval).await;
            let purged = codes.purge_expired().await;
            if purged > 0 {
                info!("Purged {} expired OTP codes", purged);
            }
        }
    });

    let listener = TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))?;
    info!("Starting server at {}:{}", config.server.host, config.server.port);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_config))
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(todo_service::configure)
    })
    .listen(listener)?
    .workers(config.server.workers as usize)
    .run()
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}
