use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, user::value_objects::CreateUserRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub username: Option<String>,
    pub language: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(request: CreateUserRequest) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            email: request.email,
            password_hash: request.password_hash,
            name: request.name,
            username: request.username,
            language: request.language,
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        username: Option<String>,
        language: Option<String>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(u) = username {
            self.username = Some(u);
        }
        if let Some(l) = language {
            self.language = l;
        }
        self.updated_at = now;
    }
}
