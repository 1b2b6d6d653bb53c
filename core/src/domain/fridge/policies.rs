use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    fridge::entities::FridgeItem,
};

/// Fridge items are private to the user who created them.
pub fn can_access_item(identity: &Identity, item: &FridgeItem) -> Result<bool, CoreError> {
    Ok(item.created_by == identity.user_id)
}
