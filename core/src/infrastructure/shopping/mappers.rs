use crate::{
    domain::shopping::entities::{ShoppingList, ShoppingTask},
    entity::{shopping_lists, shopping_tasks},
};

impl From<&shopping_lists::Model> for ShoppingList {
    fn from(model: &shopping_lists::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            due_date: model.due_date,
            created_by: model.created_by,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<shopping_lists::Model> for ShoppingList {
    fn from(model: shopping_lists::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&shopping_tasks::Model> for ShoppingTask {
    fn from(model: &shopping_tasks::Model) -> Self {
        Self {
            id: model.id,
            list_id: model.list_id,
            name: model.name.clone(),
            quantity: model.quantity.clone(),
            note: model.note.clone(),
            is_done: model.is_done,
            done_at: model.done_at.map(|dt| dt.to_utc()),
            created_by: model.created_by,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<shopping_tasks::Model> for ShoppingTask {
    fn from(model: shopping_tasks::Model) -> Self {
        Self::from(&model)
    }
}
