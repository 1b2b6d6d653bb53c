use super::handlers::create_shopping_list::{__path_create_shopping_list, create_shopping_list};
use super::handlers::create_shopping_task::{__path_create_shopping_task, create_shopping_task};
use super::handlers::delete_shopping_list::{__path_delete_shopping_list, delete_shopping_list};
use super::handlers::delete_shopping_task::{__path_delete_shopping_task, delete_shopping_task};
use super::handlers::get_shopping_list::{__path_get_shopping_list, get_shopping_list};
use super::handlers::get_shopping_lists::{__path_get_shopping_lists, get_shopping_lists};
use super::handlers::update_shopping_task::{__path_update_shopping_task, update_shopping_task};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_shopping_list,
    get_shopping_lists,
    get_shopping_list,
    delete_shopping_list,
    create_shopping_task,
    update_shopping_task,
    delete_shopping_task
))]
pub struct ShoppingApiDoc;

pub fn shopping_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/shopping/lists", state.args.server.root_path),
            post(create_shopping_list).get(get_shopping_lists),
        )
        .route(
            &format!(
                "{}/shopping/lists/{{list_id}}",
                state.args.server.root_path
            ),
            get(get_shopping_list).delete(delete_shopping_list),
        )
        .route(
            &format!(
                "{}/shopping/lists/{{list_id}}/tasks",
                state.args.server.root_path
            ),
            post(create_shopping_task),
        )
        .route(
            &format!(
                "{}/shopping/tasks/{{task_id}}",
                state.args.server.root_path
            ),
            put(update_shopping_task).delete(delete_shopping_task),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
