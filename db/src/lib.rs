pub mod models;
pub mod repositories;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Opens the connection configured by `DATABASE_PATH`.
///
/// A value that is already a DSN is used as-is; anything else is treated as a
/// SQLite file path and opened in read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    connect_to(&config::database_path()).await
}

pub async fn connect_to(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url.to_string()
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(path_or_url).parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create database directory {}: {e}", parent.display());
            }
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    tracing::info!("Connecting to database at {url}");
    Database::connect(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unusable_directory_is_a_connect_error_not_a_panic() {
        let blocker =
            std::env::temp_dir().join(format!("metrics-db-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();
        let path = blocker.join("nested").join("metrics.db");

        let result = connect_to(path.to_str().unwrap()).await;

        std::fs::remove_file(&blocker).unwrap();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn dsn_is_used_as_is() {
        let db = connect_to("sqlite::memory:").await.unwrap();
        db.close().await.unwrap();
    }
}
