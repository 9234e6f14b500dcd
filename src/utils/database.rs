use crate::types::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .idle_timeout(Duration::from_secs(15 * 60))
}

pub async fn connect(config: &DatabaseConfig) -> DatabaseConnection {
    DatabaseConnection {
        pool: pool_options(config)
            .connect(config.url.as_str())
            .await
            .unwrap_or_else(|e| {
                tracing::error!("{:}", e);
                panic!("Error connecting to database")
            }),
    }
}

/// Builds a pool that only dials the database on first use.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<DatabaseConnection, sqlx::Error> {
    pool_options(config)
        .connect_lazy(config.url.as_str())
        .map(|pool| DatabaseConnection { pool })
}

pub async fn migrate(db_conn: DatabaseConnection) {
    match sqlx::migrate!().run(&db_conn.pool).await {
        Ok(_) => (),
        Err(err) => {
            tracing::error!("{}", err);
            panic!("Failed to run database migrations");
        }
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// The referenced row does not exist.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_database_errors_are_constraint_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_foreign_key_violation(&sqlx::Error::PoolTimedOut));
    }
}
