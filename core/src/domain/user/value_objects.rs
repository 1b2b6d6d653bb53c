use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub username: Option<String>,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub username: Option<String>,
    pub language: Option<String>,
}
