use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fridgely_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", m.clone()),
            ApiError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", m.clone()),
            ApiError::Forbidden(m) => (StatusCode::FORBIDDEN, "E_FORBIDDEN", m.clone()),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", m.clone()),
            ApiError::Conflict(m) => (StatusCode::CONFLICT, "E_CONFLICT", m.clone()),
            ApiError::ValidationError(m) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_VALIDATION", m.clone())
            }
            ApiError::InternalServerError(m) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_INTERNAL_SERVER_ERROR",
                m.clone(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = ErrorResponse {
            code: code.to_string(),
            message,
            status: status.as_u16() as i64,
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs the payload through its `Validate` impl and maps
/// failures onto the API error envelope.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::Invalid => ApiError::BadRequest("invalid input".to_string()),
            CoreError::Conflict(m) => ApiError::Conflict(m),
            CoreError::Forbidden(m) => ApiError::Forbidden(m),
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("incorrect email or password".to_string())
            }
            CoreError::InvalidToken => ApiError::Unauthorized("invalid token".to_string()),
            CoreError::TokenExpired => ApiError::Unauthorized("token expired".to_string()),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}
