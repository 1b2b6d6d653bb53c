use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    fridge::ports::FridgeItemRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    shopping::ports::{ShoppingListRepository, ShoppingTaskRepository},
    user::ports::UserRepository,
};

impl<U, FI, SL, ST, H, HC> HealthCheckService for Service<U, FI, SL, ST, H, HC>
where
    U: UserRepository,
    FI: FridgeItemRepository,
    SL: ShoppingListRepository,
    ST: ShoppingTaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
