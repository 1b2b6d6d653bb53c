use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    fridge::ports::FridgeItemRepository,
    health::ports::HealthCheckRepository,
    shopping::ports::{ShoppingListRepository, ShoppingTaskRepository},
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::UpdateUserInput,
    },
};

impl<U, FI, SL, ST, H, HC> UserService for Service<U, FI, SL, ST, H, HC>
where
    U: UserRepository,
    FI: FridgeItemRepository,
    SL: ShoppingListRepository,
    ST: ShoppingTaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn get_me(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_me(&self, identity: Identity, input: UpdateUserInput) -> Result<User, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(identity.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        user.update(input.name, input.username, input.language);

        self.user_repository.update_user(user).await
    }
}
