use crate::domain::fridge::{
    entities::StorageLocation,
    value_objects::{ClassifiedInventory, InventoryEntry, InventoryFilter},
};

/// Items with this many days left (or fewer) need attention. The threshold is
/// inclusive: `days_left == 3` is already urgent. Expired items (negative
/// `days_left`) fall under the same rule.
pub const EXPIRY_ATTENTION_THRESHOLD_DAYS: i64 = 3;

pub fn needs_attention(days_left: i64) -> bool {
    days_left <= EXPIRY_ATTENTION_THRESHOLD_DAYS
}

fn matches_filter(entry: &InventoryEntry, filter: InventoryFilter) -> bool {
    match filter {
        InventoryFilter::All => true,
        InventoryFilter::ExpiringSoon => needs_attention(entry.days_left),
        InventoryFilter::Freezer => entry.item.location == StorageLocation::Freezer,
        InventoryFilter::Cool => entry.item.location == StorageLocation::Cool,
    }
}

/// Restricts `entries` to the selected filter, then splits the survivors into
/// the attention and good partitions. Both partitions preserve the relative
/// order of the input; nothing is re-sorted, dropped, or duplicated.
pub fn classify_inventory(
    entries: Vec<InventoryEntry>,
    filter: InventoryFilter,
) -> ClassifiedInventory {
    let filtered: Vec<InventoryEntry> = entries
        .into_iter()
        .filter(|entry| matches_filter(entry, filter))
        .collect();

    let (attention, good) = filtered
        .into_iter()
        .partition(|entry| needs_attention(entry.days_left));

    ClassifiedInventory { attention, good }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::generate_uuid_v7,
        fridge::entities::{FridgeItem, FridgeItemConfig},
    };

    fn entry(name: &str, days_left: i64, location: StorageLocation) -> InventoryEntry {
        let today = Utc::now().date_naive();
        let item = FridgeItem::new(FridgeItemConfig {
            name: name.to_string(),
            quantity: "1kg".to_string(),
            note: None,
            purchase_date: None,
            use_within_date: today + Duration::days(days_left),
            location,
            is_opened: false,
            opened_at: None,
            created_by: generate_uuid_v7(),
        });

        InventoryEntry { item, days_left }
    }

    fn sample_inventory() -> Vec<InventoryEntry> {
        vec![
            entry("Cà chua", 2, StorageLocation::Cool),
            entry("Sữa tươi", 1, StorageLocation::Cool),
            entry("Thịt heo", 5, StorageLocation::Freezer),
            entry("Cà rốt", 7, StorageLocation::Cool),
        ]
    }

    fn names(entries: &[InventoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.item.name.as_str()).collect()
    }

    fn ids(entries: &[InventoryEntry]) -> Vec<Uuid> {
        entries.iter().map(|e| e.item.id).collect()
    }

    #[test]
    fn all_filter_partitions_sample_inventory() {
        let result = classify_inventory(sample_inventory(), InventoryFilter::All);

        assert_eq!(names(&result.attention), vec!["Cà chua", "Sữa tươi"]);
        assert_eq!(names(&result.good), vec!["Thịt heo", "Cà rốt"]);
    }

    #[test]
    fn freezer_filter_keeps_only_freezer_items() {
        let result = classify_inventory(sample_inventory(), InventoryFilter::Freezer);

        assert!(result.attention.is_empty());
        assert_eq!(names(&result.good), vec!["Thịt heo"]);
    }

    #[test]
    fn cool_filter_keeps_only_cool_items() {
        let result = classify_inventory(sample_inventory(), InventoryFilter::Cool);

        assert_eq!(names(&result.attention), vec!["Cà chua", "Sữa tươi"]);
        assert_eq!(names(&result.good), vec!["Cà rốt"]);
    }

    #[test]
    fn expiring_filter_leaves_good_partition_empty() {
        let result = classify_inventory(sample_inventory(), InventoryFilter::ExpiringSoon);

        assert_eq!(names(&result.attention), vec!["Cà chua", "Sữa tươi"]);
        assert!(result.good.is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let entries = vec![
            entry("on the edge", 3, StorageLocation::Cool),
            entry("just past it", 4, StorageLocation::Cool),
        ];
        let result = classify_inventory(entries, InventoryFilter::All);

        assert_eq!(names(&result.attention), vec!["on the edge"]);
        assert_eq!(names(&result.good), vec!["just past it"]);
    }

    #[test]
    fn expired_items_stay_in_attention() {
        let entries = vec![entry("expired", -2, StorageLocation::Cool)];
        let result = classify_inventory(entries, InventoryFilter::All);

        assert_eq!(names(&result.attention), vec!["expired"]);
        assert!(result.good.is_empty());
    }

    #[test]
    fn empty_inventory_yields_empty_partitions() {
        let result = classify_inventory(Vec::new(), InventoryFilter::ExpiringSoon);

        assert!(result.attention.is_empty());
        assert!(result.good.is_empty());
    }

    #[test]
    fn partitions_cover_filtered_subset_exactly() {
        let entries = sample_inventory();
        let expected: Vec<Uuid> = entries.iter().map(|e| e.item.id).collect();

        let result = classify_inventory(entries, InventoryFilter::All);

        let mut combined = ids(&result.attention);
        combined.extend(ids(&result.good));
        combined.sort();
        let mut expected_sorted = expected;
        expected_sorted.sort();
        assert_eq!(combined, expected_sorted);
        assert_eq!(
            combined.len(),
            combined.iter().collect::<std::collections::HashSet<_>>().len()
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let entries = sample_inventory();

        let first = classify_inventory(entries.clone(), InventoryFilter::Cool);
        let second = classify_inventory(entries, InventoryFilter::Cool);

        assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_filter_string_falls_back_to_all() {
        assert_eq!(
            InventoryFilter::from_str("pantry").unwrap(),
            InventoryFilter::All
        );
        assert_eq!(
            InventoryFilter::from_str("EXPIRING").unwrap(),
            InventoryFilter::ExpiringSoon
        );
        assert_eq!(
            InventoryFilter::from_str("freezer").unwrap(),
            InventoryFilter::Freezer
        );
    }

    #[test]
    fn days_left_counts_down_to_expiry() {
        let today = Utc::now().date_naive();
        let item = entry("anything", 0, StorageLocation::Cool).item;

        assert_eq!(item.days_left(today), 0);
        assert_eq!(item.days_left(today - Duration::days(5)), 5);
        assert_eq!(item.days_left(today + Duration::days(2)), -2);
    }
}
