use axum::extract::State;

use crate::application::http::{
    authentication::validators::RegisterValidator,
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
    authentication::{ports::AuthService, value_objects::RegisterInput},
    jwt::entities::TokenPair,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub tokens: TokenPair,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register a new account",
    description = "Creates a user account and returns the profile together with an initial token pair.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = RegisterResponse, description = "Account created"),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<RegisterResponse>, ApiError> {
    let output = state
        .service
        .register(RegisterInput {
            email: payload.email,
            password: payload.password,
            name: payload.name,
            username: payload.username,
            language: payload.language,
        })
        .await?;

    Ok(Response::Created(RegisterResponse {
        user: UserResponse::from(output.user),
        tokens: output.tokens,
    }))
}
