use crate::{domain::user::entities::User, entity::users};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email.clone(),
            password_hash: model.password_hash.clone(),
            name: model.name.clone(),
            username: model.username.clone(),
            language: model.language.clone(),
            is_active: model.is_active,
            is_verified: model.is_verified,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}
