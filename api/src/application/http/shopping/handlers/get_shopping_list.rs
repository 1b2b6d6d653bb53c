use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use fridgely_core::domain::shopping::{ports::ShoppingService, value_objects::ShoppingListWithTasks};

#[utoipa::path(
    get,
    path = "/lists/{list_id}",
    tag = "shopping",
    summary = "Get shopping list",
    description = "Returns one list together with its tasks.",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list id"),
    ),
    responses(
        (status = 200, body = ShoppingListWithTasks),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "List belongs to another user"),
        (status = 404, description = "List not found")
    )
)]
pub async fn get_shopping_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(list_id): Path<Uuid>,
) -> Result<Response<ShoppingListWithTasks>, ApiError> {
    let list = state.service.get_list(identity, list_id).await?;

    Ok(Response::OK(list))
}
