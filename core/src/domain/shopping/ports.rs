use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    shopping::{
        entities::{ShoppingList, ShoppingTask},
        value_objects::{
            CreateShoppingListInput, CreateShoppingTaskInput, ShoppingListWithTasks,
            UpdateShoppingTaskInput,
        },
    },
};

/// Repository trait for shopping lists
#[cfg_attr(test, mockall::automock)]
pub trait ShoppingListRepository: Send + Sync {
    fn create_list(
        &self,
        list: ShoppingList,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn get_by_id(
        &self,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingList>, CoreError>> + Send;

    fn get_by_owner(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    /// Deletes the list and every task attached to it.
    fn delete_list(&self, list_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for shopping tasks
#[cfg_attr(test, mockall::automock)]
pub trait ShoppingTaskRepository: Send + Sync {
    fn create_task(
        &self,
        task: ShoppingTask,
    ) -> impl Future<Output = Result<ShoppingTask, CoreError>> + Send;

    fn get_by_id(
        &self,
        task_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingTask>, CoreError>> + Send;

    fn get_by_list(
        &self,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ShoppingTask>, CoreError>> + Send;

    fn update_task(
        &self,
        task: ShoppingTask,
    ) -> impl Future<Output = Result<ShoppingTask, CoreError>> + Send;

    fn delete_task(&self, task_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for shopping list operations
#[cfg_attr(test, mockall::automock)]
pub trait ShoppingService: Send + Sync {
    fn create_list(
        &self,
        identity: Identity,
        input: CreateShoppingListInput,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn get_lists(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    fn get_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<ShoppingListWithTasks, CoreError>> + Send;

    fn delete_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_task(
        &self,
        identity: Identity,
        list_id: Uuid,
        input: CreateShoppingTaskInput,
    ) -> impl Future<Output = Result<ShoppingTask, CoreError>> + Send;

    fn update_task(
        &self,
        identity: Identity,
        task_id: Uuid,
        input: UpdateShoppingTaskInput,
    ) -> impl Future<Output = Result<ShoppingTask, CoreError>> + Send;

    fn delete_task(
        &self,
        identity: Identity,
        task_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
