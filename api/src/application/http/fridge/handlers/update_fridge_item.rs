use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        fridge::validators::UpdateFridgeItemValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use fridgely_core::domain::fridge::{
    entities::FridgeItem,
    ports::FridgeService,
    value_objects::UpdateFridgeItemInput,
};

#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "fridge",
    summary = "Update fridge item",
    description = "Partially updates an item. Absent fields are left unchanged.",
    params(
        ("item_id" = Uuid, Path, description = "Fridge item id"),
    ),
    request_body = UpdateFridgeItemValidator,
    responses(
        (status = 200, body = FridgeItem),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Item belongs to another user"),
        (status = 404, description = "Item not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_fridge_item(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(item_id): Path<Uuid>,
    ValidateJson(payload): ValidateJson<UpdateFridgeItemValidator>,
) -> Result<Response<FridgeItem>, ApiError> {
    let item = state
        .service
        .update_item(
            identity,
            item_id,
            UpdateFridgeItemInput {
                name: payload.name,
                quantity: payload.quantity,
                note: payload.note,
                purchase_date: payload.purchase_date,
                use_within_date: payload.use_within_date,
                location: payload.location,
                is_opened: payload.is_opened,
                opened_at: payload.opened_at,
            },
        )
        .await?;

    Ok(Response::OK(item))
}
