use super::handlers::get_me::{__path_get_me, get_me};
use super::handlers::update_me::{__path_update_me, update_me};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_me, update_me))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/me", state.args.server.root_path),
            get(get_me).put(update_me),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
