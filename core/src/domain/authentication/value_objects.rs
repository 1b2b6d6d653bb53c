use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{jwt::entities::TokenPair, user::entities::User};

/// The authenticated caller, resolved from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.user_id
    }
}

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub username: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthOutput {
    pub user: User,
    pub tokens: TokenPair,
}
