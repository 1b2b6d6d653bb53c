use axum::extract::{Query, State};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use fridgely_core::domain::fridge::{
    ports::FridgeService,
    value_objects::{ClassifiedInventory, InventoryFilter},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetInventoryQuery {
    /// One of `all`, `expiring_soon`, `freezer`, `cool`. Anything else is
    /// treated as `all`.
    pub filter: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "fridge",
    summary = "Get classified inventory",
    description = "Returns the caller's fridge inventory, filtered and split into items needing attention (3 days or fewer left) and items still good.",
    params(GetInventoryQuery),
    responses(
        (status = 200, body = ClassifiedInventory),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<GetInventoryQuery>,
) -> Result<Response<ClassifiedInventory>, ApiError> {
    let filter = query
        .filter
        .as_deref()
        .map(|raw| raw.parse().unwrap_or_default())
        .unwrap_or(InventoryFilter::All);

    let inventory = state.service.get_inventory(identity, filter).await?;

    Ok(Response::OK(inventory))
}
