use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use fridgely_core::domain::shopping::{entities::ShoppingList, ports::ShoppingService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetShoppingListsResponse {
    pub data: Vec<ShoppingList>,
}

#[utoipa::path(
    get,
    path = "/lists",
    tag = "shopping",
    summary = "Get shopping lists",
    description = "Returns the caller's shopping lists in insertion order.",
    responses(
        (status = 200, body = GetShoppingListsResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_shopping_lists(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetShoppingListsResponse>, ApiError> {
    let lists = state.service.get_lists(identity).await?;

    Ok(Response::OK(GetShoppingListsResponse { data: lists }))
}
