use axum::extract::State;

use crate::application::http::{
    authentication::validators::LoginValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::handlers::get_me::UserResponse,
};
use fridgely_core::domain::{
    authentication::{ports::AuthService, value_objects::LoginInput},
    jwt::entities::TokenPair,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub tokens: TokenPair,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in",
    description = "Verifies the credentials and returns the profile together with a fresh token pair.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Incorrect email or password"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let output = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok(Response::OK(LoginResponse {
        user: UserResponse::from(output.user),
        tokens: output.tokens,
    }))
}
