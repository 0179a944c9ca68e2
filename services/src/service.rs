use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced by the query surface.
///
/// "Not found" is not an error here; lookups return `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Invalid metric id '{0}'")]
    InvalidId(String),
}

pub type AppResult<T> = Result<T, AppError>;
