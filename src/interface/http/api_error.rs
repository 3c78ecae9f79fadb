use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// The single error surface of the HTTP layer: a status code and a body of
/// the shape `{ "message": string }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn from_domain(error: DomainError) -> Self {
        let status = match &error {
            DomainError::Validation(_) | DomainError::Conflict(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            DomainError::OwnerNotFound(_) | DomainError::PlaceNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::LinkageFailure(_)
            | DomainError::UnlinkageFailure(_)
            | DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            message: error.detail().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
