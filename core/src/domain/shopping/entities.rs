use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingTask {
    pub id: Uuid,
    pub list_id: Uuid,
    pub name: String,
    pub quantity: String,
    pub note: Option<String>,
    pub is_done: bool,
    pub done_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(
        name: String,
        description: Option<String>,
        due_date: Option<NaiveDate>,
        created_by: Uuid,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            description,
            due_date,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ShoppingTask {
    pub fn new(
        list_id: Uuid,
        name: String,
        quantity: String,
        note: Option<String>,
        created_by: Uuid,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            list_id,
            name,
            quantity,
            note,
            is_done: false,
            done_at: None,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        quantity: Option<String>,
        note: Option<String>,
        is_done: Option<bool>,
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
        if let Some(done) = is_done {
            self.is_done = done;
            self.done_at = if done { Some(now) } else { None };
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::generate_uuid_v7;

    #[test]
    fn toggling_done_tracks_done_at() {
        let mut task = ShoppingTask::new(
            generate_uuid_v7(),
            "Cà chua".to_string(),
            "2kg".to_string(),
            None,
            generate_uuid_v7(),
        );
        assert!(!task.is_done);
        assert!(task.done_at.is_none());

        task.update(None, None, None, Some(true));
        assert!(task.is_done);
        assert!(task.done_at.is_some());

        task.update(None, None, None, Some(false));
        assert!(!task.is_done);
        assert!(task.done_at.is_none());
    }

    #[test]
    fn update_with_absent_fields_preserves_note() {
        let mut task = ShoppingTask::new(
            generate_uuid_v7(),
            "Sữa tươi".to_string(),
            "1 hộp".to_string(),
            Some("loại không đường".to_string()),
            generate_uuid_v7(),
        );

        task.update(None, Some("2 hộp".to_string()), None, None);

        assert_eq!(task.quantity, "2 hộp");
        assert_eq!(task.note.as_deref(), Some("loại không đường"));
    }
}
