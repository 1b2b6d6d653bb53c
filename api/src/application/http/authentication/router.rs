use super::handlers::login::{__path_login, login};
use super::handlers::logout::{__path_logout, logout};
use super::handlers::refresh_token::{__path_refresh_token, refresh_token};
use super::handlers::register::{__path_register, register};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register, login, refresh_token, logout))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/auth/register"), post(register))
        .route(&format!("{root_path}/auth/login"), post(login))
        .route(&format!("{root_path}/auth/refresh"), post(refresh_token))
        .route(&format!("{root_path}/auth/logout"), post(logout))
}
