use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::common::response::ApiError;
use crate::common::validation::ValidationError;
use crate::infrastructure::store::StoreError;

/// The core's contract was broken by its caller, e.g. a movie mapped with a
/// genre it does not reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MappingError(pub String);

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Store(StoreError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        ServiceError::NotFound(format!("{} not found with id: {}", entity, id))
    }

    pub fn genre_name_taken(name: &str) -> Self {
        ServiceError::Conflict(format!("Genre with name '{}' already exists", name))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Mapping(_) | ServiceError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Constraint violations only reach this point when a concurrent request won
// the race against the service's own checks.
impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(message) => ServiceError::Conflict(message),
            StoreError::ForeignKeyViolation(message) | StoreError::MissingRow(message) => {
                ServiceError::NotFound(message)
            }
            StoreError::CheckViolation(message) => {
                ServiceError::Validation(ValidationError::new(message))
            }
            other => ServiceError::Store(other),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            error!(error = %err, "request failed");
            ApiError("Internal server error".to_string(), status)
        } else {
            warn!(error = %err, status = status.as_u16(), "request rejected");
            ApiError(err.to_string(), status)
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_status_codes() {
        assert_eq!(
            ServiceError::from(ValidationError::new("bad")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::genre_name_taken("Action").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::not_found("Movie", 3).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::from(MappingError("broken".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_name_the_entity() {
        assert_eq!(
            ServiceError::not_found("Genre", 999).to_string(),
            "Genre not found with id: 999"
        );
        assert_eq!(
            ServiceError::genre_name_taken("Action").to_string(),
            "Genre with name 'Action' already exists"
        );
    }

    #[test]
    fn store_constraint_violations_become_domain_errors() {
        let conflict = ServiceError::from(StoreError::UniqueViolation("dup".into()));
        assert!(matches!(conflict, ServiceError::Conflict(_)));

        let missing = ServiceError::from(StoreError::ForeignKeyViolation("gone".into()));
        assert!(matches!(missing, ServiceError::NotFound(_)));
    }
}
