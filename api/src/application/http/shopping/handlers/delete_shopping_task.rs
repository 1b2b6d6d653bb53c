use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use fridgely_core::domain::shopping::ports::ShoppingService;

#[utoipa::path(
    delete,
    path = "/tasks/{task_id}",
    tag = "shopping",
    summary = "Delete task",
    params(
        ("task_id" = Uuid, Path, description = "Shopping task id"),
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Task belongs to another user"),
        (status = 404, description = "Task not found")
    )
)]
pub async fn delete_shopping_task(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(task_id): Path<Uuid>,
) -> Result<Response<()>, ApiError> {
    state.service.delete_task(identity, task_id).await?;

    Ok(Response::NoContent)
}
