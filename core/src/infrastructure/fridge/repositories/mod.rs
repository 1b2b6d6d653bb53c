pub mod fridge_item_repository;
