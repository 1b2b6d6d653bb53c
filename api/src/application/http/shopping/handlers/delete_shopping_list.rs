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
    path = "/lists/{list_id}",
    tag = "shopping",
    summary = "Delete shopping list",
    description = "Deletes the list and every task attached to it.",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list id"),
    ),
    responses(
        (status = 204, description = "List deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "List belongs to another user"),
        (status = 404, description = "List not found")
    )
)]
pub async fn delete_shopping_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(list_id): Path<Uuid>,
) -> Result<Response<()>, ApiError> {
    state.service.delete_list(identity, list_id).await?;

    Ok(Response::NoContent)
}
