use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::models::user::User;
use crate::domain::ports::UserRepository;
use crate::error::AppError;
use crate::state::AppState;
use crate::infra::repositories::{
    sqlite_condominium_repo::SqliteCondominiumRepo, sqlite_reservation_repo::SqliteReservationRepo,
    sqlite_spot_repo::SqliteSpotRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_sqlite_migrations(&pool).await;

    let state = build_state(config.clone(), pool);

    if let Some(email) = &config.bootstrap_manager_email {
        seed_manager(state.user_repo.as_ref(), &config.bootstrap_manager_name, email)
            .await
            .expect("Failed to seed bootstrap manager");
    }

    state
}

pub fn build_state(config: Config, pool: SqlitePool) -> AppState {
    AppState::new(
        config,
        Arc::new(SqliteCondominiumRepo::new(pool.clone())),
        Arc::new(SqliteUserRepo::new(pool.clone())),
        Arc::new(SqliteSpotRepo::new(pool.clone())),
        Arc::new(SqliteReservationRepo::new(pool)),
    )
}

/// Creates an approved manager with no condominium scope unless the email is taken.
pub async fn seed_manager(users: &dyn UserRepository, name: &str, email: &str) -> Result<Option<User>, AppError> {
    if users.find_by_email(email).await?.is_some() {
        return Ok(None);
    }

    let manager = users.create(&User::new_manager(name.to_string(), email.to_string(), None)).await?;
    info!(user_id = %manager.id, "Seeded bootstrap manager");
    Ok(Some(manager))
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
