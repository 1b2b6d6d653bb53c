use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Where an item lives in the fridge: the cool compartment (ngăn mát) or the
/// freezer (ngăn đông).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StorageLocation {
    Cool,
    Freezer,
}

impl StorageLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageLocation::Cool => "cool",
            StorageLocation::Freezer => "freezer",
        }
    }
}

impl From<&str> for StorageLocation {
    // Unknown values land in the cool compartment.
    fn from(value: &str) -> Self {
        match value {
            "freezer" => StorageLocation::Freezer,
            _ => StorageLocation::Cool,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FridgeItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: String, // free-form, e.g. "2.5kg" or "1 hộp"
    pub note: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub use_within_date: NaiveDate,
    pub location: StorageLocation,
    pub is_opened: bool,
    pub opened_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FridgeItemConfig {
    pub name: String,
    pub quantity: String,
    pub note: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub use_within_date: NaiveDate,
    pub location: StorageLocation,
    pub is_opened: bool,
    pub opened_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
}

impl FridgeItem {
    pub fn new(config: FridgeItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            quantity: config.quantity,
            note: config.note,
            purchase_date: config.purchase_date,
            use_within_date: config.use_within_date,
            location: config.location,
            is_opened: config.is_opened,
            opened_at: config.opened_at,
            created_by: config.created_by,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: Option<String>,
        quantity: Option<String>,
        note: Option<String>,
        purchase_date: Option<NaiveDate>,
        use_within_date: Option<NaiveDate>,
        location: Option<StorageLocation>,
        is_opened: Option<bool>,
        opened_at: Option<DateTime<Utc>>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(q) = quantity {
            self.quantity = q;
        }
        if let Some(n) = note {
            self.note = Some(n);
        }
        if let Some(p) = purchase_date {
            self.purchase_date = Some(p);
        }
        if let Some(u) = use_within_date {
            self.use_within_date = u;
        }
        if let Some(l) = location {
            self.location = l;
        }
        if let Some(o) = is_opened {
            self.is_opened = o;
        }
        if let Some(o) = opened_at {
            self.opened_at = Some(o);
        }
        self.updated_at = now;
    }

    /// Signed days until expiry; negative once the item is past its
    /// `use_within_date`.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.use_within_date - today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::generate_uuid_v7;

    #[test]
    fn update_with_absent_fields_preserves_values() {
        let today = Utc::now().date_naive();
        let mut item = FridgeItem::new(FridgeItemConfig {
            name: "Cà chua".to_string(),
            quantity: "2kg".to_string(),
            note: Some("mua ở chợ".to_string()),
            purchase_date: Some(today),
            use_within_date: today + chrono::Duration::days(3),
            location: StorageLocation::Cool,
            is_opened: true,
            opened_at: Some(Utc::now()),
            created_by: generate_uuid_v7(),
        });
        let before = item.clone();

        item.update(None, None, None, None, None, None, None, None);

        // Absent fields keep their stored values, optional ones included.
        assert_eq!(item.name, before.name);
        assert_eq!(item.note, before.note);
        assert_eq!(item.purchase_date, before.purchase_date);
        assert_eq!(item.opened_at, before.opened_at);
        assert_eq!(item.use_within_date, before.use_within_date);
    }
}
