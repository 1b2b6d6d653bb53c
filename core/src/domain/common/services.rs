use crate::domain::{
    crypto::ports::HasherRepository, fridge::ports::FridgeItemRepository,
    health::ports::HealthCheckRepository, jwt::services::JwtService,
    shopping::ports::{ShoppingListRepository, ShoppingTaskRepository},
    user::ports::UserRepository,
};

/// Aggregate of every port implementation the domain services run on.
///
/// The per-module service traits (`AuthService`, `FridgeService`, ...) are all
/// implemented on this single struct; each impl only constrains the type
/// parameters it actually touches.
#[derive(Clone)]
pub struct Service<U, FI, SL, ST, H, HC>
where
    U: UserRepository,
    FI: FridgeItemRepository,
    SL: ShoppingListRepository,
    ST: ShoppingTaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    pub user_repository: U,
    pub fridge_item_repository: FI,
    pub shopping_list_repository: SL,
    pub shopping_task_repository: ST,
    pub hasher_repository: H,
    pub health_check_repository: HC,
    pub jwt_service: JwtService,
}

impl<U, FI, SL, ST, H, HC> Service<U, FI, SL, ST, H, HC>
where
    U: UserRepository,
    FI: FridgeItemRepository,
    SL: ShoppingListRepository,
    ST: ShoppingTaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        fridge_item_repository: FI,
        shopping_list_repository: SL,
        shopping_task_repository: ST,
        hasher_repository: H,
        health_check_repository: HC,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            user_repository,
            fridge_item_repository,
            shopping_list_repository,
            shopping_task_repository,
            hasher_repository,
            health_check_repository,
            jwt_service,
        }
    }
}
