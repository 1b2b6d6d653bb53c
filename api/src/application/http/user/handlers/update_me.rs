use axum::extract::State;

use super::get_me::UserResponse;
use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        user::validators::UpdateMeValidator,
    },
};
use fridgely_core::domain::user::{ports::UserService, value_objects::UpdateUserInput};

#[utoipa::path(
    put,
    path = "/me",
    tag = "user",
    summary = "Update current user",
    description = "Partially updates the authenticated user's profile. Absent fields are left unchanged.",
    request_body = UpdateMeValidator,
    responses(
        (status = 200, body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_me(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateMeValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .update_me(
            identity,
            UpdateUserInput {
                name: payload.name,
                username: payload.username,
                language: payload.language,
            },
        )
        .await?;

    Ok(Response::OK(UserResponse::from(user)))
}
