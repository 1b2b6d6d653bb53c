use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateShoppingListValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateShoppingTaskValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "quantity is required"))]
    pub quantity: String,

    #[serde(default)]
    pub note: Option<String>,
}

/// Partial update payload. A field left out keeps its stored value; an
/// existing `note` cannot be cleared back to null here.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateShoppingTaskValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub quantity: Option<String>,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub is_done: Option<bool>,
}
