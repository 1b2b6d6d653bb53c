use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        fridge::validators::CreateFridgeItemValidator,
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
    value_objects::CreateFridgeItemInput,
};

#[utoipa::path(
    post,
    path = "",
    tag = "fridge",
    summary = "Add fridge item",
    description = "Stores a new item in the caller's fridge.",
    request_body = CreateFridgeItemValidator,
    responses(
        (status = 201, body = FridgeItem, description = "Item created"),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_fridge_item(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateFridgeItemValidator>,
) -> Result<Response<FridgeItem>, ApiError> {
    let item = state
        .service
        .create_item(
            identity,
            CreateFridgeItemInput {
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

    Ok(Response::Created(item))
}
