use chrono::{DateTime, NaiveDate, Utc};
use fridgely_core::domain::fridge::entities::StorageLocation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFridgeItemValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "quantity is required"))]
    pub quantity: String,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,

    pub use_within_date: NaiveDate,

    pub location: StorageLocation,

    #[serde(default)]
    pub is_opened: bool,

    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
}

/// Partial update payload. A field left out keeps its stored value; there is
/// no way to clear `note`, `purchase_date`, or `opened_at` back to null here.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFridgeItemValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub quantity: Option<String>,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,

    #[serde(default)]
    pub use_within_date: Option<NaiveDate>,

    #[serde(default)]
    pub location: Option<StorageLocation>,

    #[serde(default)]
    pub is_opened: Option<bool>,

    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
}
