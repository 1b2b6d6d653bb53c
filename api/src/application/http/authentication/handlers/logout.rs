use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

/// Tokens are stateless, so logout is a client-side discard. The endpoint
/// exists so clients have a single call to end a session with.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    summary = "Log out",
    responses(
        (status = 204, description = "Session ended")
    )
)]
pub async fn logout() -> Result<Response<()>, ApiError> {
    Ok(Response::NoContent)
}
