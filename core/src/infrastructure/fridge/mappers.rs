use crate::{
    domain::fridge::entities::{FridgeItem, StorageLocation},
    entity::fridge_items,
};

impl From<&fridge_items::Model> for FridgeItem {
    fn from(model: &fridge_items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            quantity: model.quantity.clone(),
            note: model.note.clone(),
            purchase_date: model.purchase_date,
            use_within_date: model.use_within_date,
            location: StorageLocation::from(model.location.as_str()),
            is_opened: model.is_opened,
            opened_at: model.opened_at.map(|dt| dt.to_utc()),
            created_by: model.created_by,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<fridge_items::Model> for FridgeItem {
    fn from(model: fridge_items::Model) -> Self {
        Self::from(&model)
    }
}
