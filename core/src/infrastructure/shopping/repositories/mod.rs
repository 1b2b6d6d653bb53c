pub mod shopping_list_repository;
pub mod shopping_task_repository;
