use axum::{
    RequestPartsExt,
    extract::{Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use fridgely_core::domain::{
    authentication::{ports::AuthService, value_objects::Identity},
    common::entities::app_errors::CoreError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::http::server::app_state::AppState;

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Token not found")]
    TokenNotFound,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::InvalidToken => "Invalid token",
            AuthError::TokenExpired => "Token expired",
            AuthError::TokenNotFound => "Token not found",
        };

        let error_response = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: message.to_string(),
            status: StatusCode::UNAUTHORIZED.as_u16() as i64,
        };

        (StatusCode::UNAUTHORIZED, axum::Json(error_response)).into_response()
    }
}

/// The verified caller, taken from the request extensions the [`auth`]
/// middleware fills in. Rejects with 401 when the middleware did not run or
/// the token was missing.
pub struct RequiredIdentity(pub Identity);

impl<S> axum::extract::FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or(AuthError::TokenNotFound)
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Auth middleware: verifies the bearer access token against the core service
/// and inserts the resolved [`Identity`] as a request extension.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();
    let token = extract_token_from_bearer(&mut parts).await?;
    req = Request::from_parts(parts, body);

    let identity = state
        .service
        .authorize_request(token)
        .await
        .map_err(|e| match e {
            CoreError::TokenExpired => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
