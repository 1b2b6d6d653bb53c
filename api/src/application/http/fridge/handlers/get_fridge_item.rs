use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use fridgely_core::domain::fridge::{entities::FridgeItem, ports::FridgeService};

#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "fridge",
    summary = "Get fridge item",
    params(
        ("item_id" = Uuid, Path, description = "Fridge item id"),
    ),
    responses(
        (status = 200, body = FridgeItem),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Item belongs to another user"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_fridge_item(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(item_id): Path<Uuid>,
) -> Result<Response<FridgeItem>, ApiError> {
    let item = state.service.get_item(identity, item_id).await?;

    Ok(Response::OK(item))
}
