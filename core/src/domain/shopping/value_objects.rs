use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::shopping::entities::{ShoppingList, ShoppingTask};

#[derive(Debug, Clone)]
pub struct CreateShoppingListInput {
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct CreateShoppingTaskInput {
    pub name: String,
    pub quantity: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateShoppingTaskInput {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub note: Option<String>,
    pub is_done: Option<bool>,
}

/// A list joined with its tasks, the shape the detail screen renders.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ShoppingListWithTasks {
    pub list: ShoppingList,
    pub tasks: Vec<ShoppingTask>,
}
