pub mod fridge_items;
pub mod shopping_lists;
pub mod shopping_tasks;
pub mod users;
