//! Mapping of registry errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use honeyrae_core::RegistryError;
use serde::Serialize;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error returned by API handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        let status = match err {
            RegistryError::TicketNotFound(_)
            | RegistryError::EmployeeNotFound(_)
            | RegistryError::CustomerNotFound(_)
            | RegistryError::NoEmployees => StatusCode::NOT_FOUND,
            RegistryError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_errors_map_to_404() {
        for err in [
            RegistryError::TicketNotFound(1),
            RegistryError::EmployeeNotFound(1),
            RegistryError::CustomerNotFound(1),
            RegistryError::NoEmployees,
        ] {
            assert_eq!(ApiError::from(err).status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_id_mismatch_maps_to_400() {
        let err = ApiError::from(RegistryError::IdMismatch {
            path_id: 5,
            body_id: 6,
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message.contains("(6)"));
        assert!(err.message.contains("(5)"));
    }
}
