use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    fridge::{
        entities::FridgeItem,
        value_objects::{
            ClassifiedInventory, CreateFridgeItemInput, InventoryFilter, UpdateFridgeItemInput,
        },
    },
};

/// Repository trait for fridge items
#[cfg_attr(test, mockall::automock)]
pub trait FridgeItemRepository: Send + Sync {
    fn create_item(
        &self,
        item: FridgeItem,
    ) -> impl Future<Output = Result<FridgeItem, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<FridgeItem>, CoreError>> + Send;

    /// Items owned by `user_id`, in insertion order.
    fn get_by_owner(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FridgeItem>, CoreError>> + Send;

    fn update_item(
        &self,
        item: FridgeItem,
    ) -> impl Future<Output = Result<FridgeItem, CoreError>> + Send;

    fn delete_item(&self, item_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for fridge inventory operations
#[cfg_attr(test, mockall::automock)]
pub trait FridgeService: Send + Sync {
    fn create_item(
        &self,
        identity: Identity,
        input: CreateFridgeItemInput,
    ) -> impl Future<Output = Result<FridgeItem, CoreError>> + Send;

    /// Current snapshot of the caller's inventory, filtered and split into the
    /// attention/good partitions.
    fn get_inventory(
        &self,
        identity: Identity,
        filter: InventoryFilter,
    ) -> impl Future<Output = Result<ClassifiedInventory, CoreError>> + Send;

    fn get_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<FridgeItem, CoreError>> + Send;

    fn update_item(
        &self,
        identity: Identity,
        item_id: Uuid,
        input: UpdateFridgeItemInput,
    ) -> impl Future<Output = Result<FridgeItem, CoreError>> + Send;

    fn delete_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
