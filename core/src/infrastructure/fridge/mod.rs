pub mod mappers;
pub mod repositories;

pub use repositories::fridge_item_repository::PostgresFridgeItemRepository;
