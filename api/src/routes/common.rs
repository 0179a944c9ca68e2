use axum::http::StatusCode;
use services::service::AppError;
use validator::ValidationErrors;

/// Joins all validation messages into one line for the response envelope.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// HTTP status for a failed query.
pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
        AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
