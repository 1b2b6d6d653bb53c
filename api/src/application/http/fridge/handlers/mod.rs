pub mod create_fridge_item;
pub mod delete_fridge_item;
pub mod get_fridge_item;
pub mod get_inventory;
pub mod update_fridge_item;
