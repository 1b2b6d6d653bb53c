use axum::extract::{Path, State};
use uuid::Uuid;

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
        shopping::validators::UpdateShoppingTaskValidator,
    },
};
use fridgely_core::domain::shopping::{
    entities::ShoppingTask,
    ports::ShoppingService,
    value_objects::UpdateShoppingTaskInput,
};

#[utoipa::path(
    put,
    path = "/tasks/{task_id}",
    tag = "shopping",
    summary = "Update task",
    description = "Partially updates a task. Setting `is_done` stamps or clears the completion time.",
    params(
        ("task_id" = Uuid, Path, description = "Shopping task id"),
    ),
    request_body = UpdateShoppingTaskValidator,
    responses(
        (status = 200, body = ShoppingTask),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Task belongs to another user"),
        (status = 404, description = "Task not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_shopping_task(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(task_id): Path<Uuid>,
    ValidateJson(payload): ValidateJson<UpdateShoppingTaskValidator>,
) -> Result<Response<ShoppingTask>, ApiError> {
    let task = state
        .service
        .update_task(
            identity,
            task_id,
            UpdateShoppingTaskInput {
                name: payload.name,
                quantity: payload.quantity,
                note: payload.note,
                is_done: payload.is_done,
            },
        )
        .await?;

    Ok(Response::OK(task))
}
