//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("unknown column: table {table} column {column}")]
    UnknownColumn { table: String, column: String },
    #[error("invalid primary key: table {table}")]
    InvalidPrimaryKey { table: String },
    #[error("relation target not defined: {table}.{column} -> {target}")]
    MissingRelationTarget {
        table: String,
        column: String,
        target: String,
    },
    #[error("duplicate path segment: {0}")]
    DuplicatePathSegment(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Method {0} not allowed")]
    MethodNotAllowed(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

/// Error body shape shared by every endpoint: `{ "message": "..." }`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Schema(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Db(e) => db_error_status(e),
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Store errors surface with the closest HTTP status: missing row 404,
/// constraint violations 409 or 422, anything else 500.
fn db_error_status(e: &sqlx::Error) -> StatusCode {
    match e {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND,
        sqlx::Error::Database(db) => {
            use sqlx::error::ErrorKind;
            match db.kind() {
                ErrorKind::ForeignKeyViolation | ErrorKind::UniqueViolation => StatusCode::CONFLICT,
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_not_allowed_message_names_the_method() {
        let e = AppError::MethodNotAllowed("DELETE".into());
        assert_eq!(e.to_string(), "Method DELETE not allowed");
    }

    #[test]
    fn row_not_found_maps_to_404() {
        assert_eq!(
            db_error_status(&sqlx::Error::RowNotFound),
            StatusCode::NOT_FOUND
        );
    }
}
