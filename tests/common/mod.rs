use sqlx::postgres::PgPoolOptions;
use todo_service::{AppState, Settings};

/// State backed by a pool that never connects; routes that stop before the
/// repositories can be exercised without a database.
pub fn lazy_state() -> AppState {
    let config = Settings::new_for_test().expect("Failed to load test config");
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("Failed to create lazy pool");
    AppState::with_pool(config, pool)
}
