pub mod create_shopping_list;
pub mod create_shopping_task;
pub mod delete_shopping_list;
pub mod delete_shopping_task;
pub mod get_shopping_list;
pub mod get_shopping_lists;
pub mod update_shopping_task;
