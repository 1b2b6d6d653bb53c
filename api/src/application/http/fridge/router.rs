use super::handlers::create_fridge_item::{__path_create_fridge_item, create_fridge_item};
use super::handlers::delete_fridge_item::{__path_delete_fridge_item, delete_fridge_item};
use super::handlers::get_fridge_item::{__path_get_fridge_item, get_fridge_item};
use super::handlers::get_inventory::{__path_get_inventory, get_inventory};
use super::handlers::update_fridge_item::{__path_update_fridge_item, update_fridge_item};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_fridge_item,
    get_inventory,
    get_fridge_item,
    update_fridge_item,
    delete_fridge_item
))]
pub struct FridgeApiDoc;

pub fn fridge_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/fridge/items", state.args.server.root_path),
            post(create_fridge_item).get(get_inventory),
        )
        .route(
            &format!("{}/fridge/items/{{item_id}}", state.args.server.root_path),
            get(get_fridge_item)
                .put(update_fridge_item)
                .delete(delete_fridge_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
