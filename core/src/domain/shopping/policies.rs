use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    shopping::entities::ShoppingList,
};

/// Shopping lists (and through them, their tasks) are private to their creator.
pub fn can_access_list(identity: &Identity, list: &ShoppingList) -> Result<bool, CoreError> {
    Ok(list.created_by == identity.user_id)
}
