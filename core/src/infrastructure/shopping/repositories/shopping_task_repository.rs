use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        shopping::{entities::ShoppingTask, ports::ShoppingTaskRepository},
    },
    entity::shopping_tasks::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresShoppingTaskRepository {
    pub db: DatabaseConnection,
}

impl PostgresShoppingTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(task: &ShoppingTask) -> ActiveModel {
    ActiveModel {
        id: Set(task.id),
        list_id: Set(task.list_id),
        name: Set(task.name.clone()),
        quantity: Set(task.quantity.clone()),
        note: Set(task.note.clone()),
        is_done: Set(task.is_done),
        done_at: Set(task.done_at.map(|dt| dt.fixed_offset())),
        created_by: Set(task.created_by),
        created_at: Set(task.created_at.fixed_offset()),
        updated_at: Set(task.updated_at.fixed_offset()),
    }
}

impl ShoppingTaskRepository for PostgresShoppingTaskRepository {
    async fn create_task(&self, task: ShoppingTask) -> Result<ShoppingTask, CoreError> {
        let created = Entity::insert(to_active_model(&task))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create shopping task: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ShoppingTask::from(created))
    }

    async fn get_by_id(&self, task_id: Uuid) -> Result<Option<ShoppingTask>, CoreError> {
        let task = Entity::find()
            .filter(Column::Id.eq(task_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping task: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(task.map(ShoppingTask::from))
    }

    async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<ShoppingTask>, CoreError> {
        let tasks = Entity::find()
            .filter(Column::ListId.eq(list_id))
            .order_by(Column::CreatedAt, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping tasks: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(tasks.iter().map(ShoppingTask::from).collect())
    }

    async fn update_task(&self, task: ShoppingTask) -> Result<ShoppingTask, CoreError> {
        let updated = Entity::update(to_active_model(&task))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update shopping task: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ShoppingTask::from(updated))
    }

    async fn delete_task(&self, task_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(task_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping task: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
