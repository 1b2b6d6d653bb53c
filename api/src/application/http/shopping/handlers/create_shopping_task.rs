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
        shopping::validators::CreateShoppingTaskValidator,
    },
};
use fridgely_core::domain::shopping::{
    entities::ShoppingTask,
    ports::ShoppingService,
    value_objects::CreateShoppingTaskInput,
};

#[utoipa::path(
    post,
    path = "/lists/{list_id}/tasks",
    tag = "shopping",
    summary = "Add task to list",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list id"),
    ),
    request_body = CreateShoppingTaskValidator,
    responses(
        (status = 201, body = ShoppingTask, description = "Task created"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "List belongs to another user"),
        (status = 404, description = "List not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_shopping_task(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(list_id): Path<Uuid>,
    ValidateJson(payload): ValidateJson<CreateShoppingTaskValidator>,
) -> Result<Response<ShoppingTask>, ApiError> {
    let task = state
        .service
        .create_task(
            identity,
            list_id,
            CreateShoppingTaskInput {
                name: payload.name,
                quantity: payload.quantity,
                note: payload.note,
            },
        )
        .await?;

    Ok(Response::Created(task))
}
