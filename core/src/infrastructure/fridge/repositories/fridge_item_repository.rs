use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        fridge::{entities::FridgeItem, ports::FridgeItemRepository},
    },
    entity::fridge_items::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFridgeItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresFridgeItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(item: &FridgeItem) -> ActiveModel {
    ActiveModel {
        id: Set(item.id),
        name: Set(item.name.clone()),
        quantity: Set(item.quantity.clone()),
        note: Set(item.note.clone()),
        purchase_date: Set(item.purchase_date),
        use_within_date: Set(item.use_within_date),
        location: Set(item.location.as_str().to_string()),
        is_opened: Set(item.is_opened),
        opened_at: Set(item.opened_at.map(|dt| dt.fixed_offset())),
        created_by: Set(item.created_by),
        created_at: Set(item.created_at.fixed_offset()),
        updated_at: Set(item.updated_at.fixed_offset()),
    }
}

impl FridgeItemRepository for PostgresFridgeItemRepository {
    async fn create_item(&self, item: FridgeItem) -> Result<FridgeItem, CoreError> {
        let created = Entity::insert(to_active_model(&item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create fridge item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FridgeItem::from(created))
    }

    async fn get_by_id(&self, item_id: Uuid) -> Result<Option<FridgeItem>, CoreError> {
        let item = Entity::find()
            .filter(Column::Id.eq(item_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get fridge item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(item.map(FridgeItem::from))
    }

    async fn get_by_owner(&self, user_id: Uuid) -> Result<Vec<FridgeItem>, CoreError> {
        // Insertion order; uuid v7 primary keys are time ordered but
        // created_at is the explicit contract.
        let items = Entity::find()
            .filter(Column::CreatedBy.eq(user_id))
            .order_by(Column::CreatedAt, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get fridge items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(items.iter().map(FridgeItem::from).collect())
    }

    async fn update_item(&self, item: FridgeItem) -> Result<FridgeItem, CoreError> {
        let updated = Entity::update(to_active_model(&item))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update fridge item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FridgeItem::from(updated))
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete fridge item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
