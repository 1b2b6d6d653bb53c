use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::fridge::entities::{FridgeItem, StorageLocation};

/// View restriction over the inventory, as picked in the client's filter row.
///
/// Parsing never fails: an unrecognized value falls back to `All`, mirroring
/// the client behavior where a filter switch without a matching branch shows
/// every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InventoryFilter {
    #[default]
    All,
    ExpiringSoon,
    Freezer,
    Cool,
}

impl FromStr for InventoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "expiring" | "expiring_soon" => InventoryFilter::ExpiringSoon,
            "freezer" => InventoryFilter::Freezer,
            "cool" => InventoryFilter::Cool,
            "all" => InventoryFilter::All,
            _ => InventoryFilter::All,
        })
    }
}

/// One fridge item together with its externally computed expiry countdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryEntry {
    pub item: FridgeItem,
    pub days_left: i64,
}

/// The classified inventory: `attention` holds items at or below the warning
/// threshold, `good` everything else. Both keep the input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifiedInventory {
    pub attention: Vec<InventoryEntry>,
    pub good: Vec<InventoryEntry>,
}

#[derive(Debug, Clone)]
pub struct CreateFridgeItemInput {
    pub name: String,
    pub quantity: String,
    pub note: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub use_within_date: NaiveDate,
    pub location: StorageLocation,
    pub is_opened: bool,
    pub opened_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFridgeItemInput {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub note: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub use_within_date: Option<NaiveDate>,
    pub location: Option<StorageLocation>,
    pub is_opened: Option<bool>,
    pub opened_at: Option<DateTime<Utc>>,
}
