pub mod mappers;
pub mod repositories;

pub use repositories::shopping_list_repository::PostgresShoppingListRepository;
pub use repositories::shopping_task_repository::PostgresShoppingTaskRepository;
