use axum::extract::State;

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
        shopping::validators::CreateShoppingListValidator,
    },
};
use fridgely_core::domain::shopping::{
    entities::ShoppingList,
    ports::ShoppingService,
    value_objects::CreateShoppingListInput,
};

#[utoipa::path(
    post,
    path = "/lists",
    tag = "shopping",
    summary = "Create shopping list",
    request_body = CreateShoppingListValidator,
    responses(
        (status = 201, body = ShoppingList, description = "List created"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_shopping_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateShoppingListValidator>,
) -> Result<Response<ShoppingList>, ApiError> {
    let list = state
        .service
        .create_list(
            identity,
            CreateShoppingListInput {
                name: payload.name,
                description: payload.description,
                due_date: payload.due_date,
            },
        )
        .await?;

    Ok(Response::Created(list))
}
