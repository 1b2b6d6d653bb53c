use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        shopping::{entities::ShoppingList, ports::ShoppingListRepository},
    },
    entity::{
        shopping_lists::{ActiveModel, Column, Entity},
        shopping_tasks::{Column as TaskColumn, Entity as TaskEntity},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresShoppingListRepository {
    pub db: DatabaseConnection,
}

impl PostgresShoppingListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ShoppingListRepository for PostgresShoppingListRepository {
    async fn create_list(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let active_model = ActiveModel {
            id: Set(list.id),
            name: Set(list.name.clone()),
            description: Set(list.description.clone()),
            due_date: Set(list.due_date),
            created_by: Set(list.created_by),
            created_at: Set(list.created_at.fixed_offset()),
            updated_at: Set(list.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ShoppingList::from(created))
    }

    async fn get_by_id(&self, list_id: Uuid) -> Result<Option<ShoppingList>, CoreError> {
        let list = Entity::find()
            .filter(Column::Id.eq(list_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(list.map(ShoppingList::from))
    }

    async fn get_by_owner(&self, user_id: Uuid) -> Result<Vec<ShoppingList>, CoreError> {
        let lists = Entity::find()
            .filter(Column::CreatedBy.eq(user_id))
            .order_by(Column::CreatedAt, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping lists: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(lists.iter().map(ShoppingList::from).collect())
    }

    async fn delete_list(&self, list_id: Uuid) -> Result<(), CoreError> {
        // Tasks first; the FK also cascades but keeps the intent explicit.
        TaskEntity::delete_many()
            .filter(TaskColumn::ListId.eq(list_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping tasks: {}", e);
                CoreError::InternalServerError
            })?;

        Entity::delete_many()
            .filter(Column::Id.eq(list_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
