use axum::extract::State;

use crate::application::http::{
    authentication::validators::RefreshTokenValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use fridgely_core::domain::{authentication::ports::AuthService, jwt::entities::TokenPair};

#[utoipa::path(
    post,
    path = "/refresh",
    tag = "auth",
    summary = "Refresh tokens",
    description = "Exchanges a valid refresh token for a new access/refresh pair.",
    request_body = RefreshTokenValidator,
    responses(
        (status = 200, body = TokenPair),
        (status = 401, description = "Invalid or expired refresh token")
    )
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RefreshTokenValidator>,
) -> Result<Response<TokenPair>, ApiError> {
    let tokens = state.service.refresh_token(payload.refresh_token).await?;

    Ok(Response::OK(tokens))
}
