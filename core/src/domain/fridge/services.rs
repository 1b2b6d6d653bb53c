use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    fridge::{
        entities::{FridgeItem, FridgeItemConfig},
        helpers::classify_inventory,
        policies::can_access_item,
        ports::{FridgeItemRepository, FridgeService},
        value_objects::{
            ClassifiedInventory, CreateFridgeItemInput, InventoryEntry, InventoryFilter,
            UpdateFridgeItemInput,
        },
    },
    health::ports::HealthCheckRepository,
    shopping::ports::{ShoppingListRepository, ShoppingTaskRepository},
    user::ports::UserRepository,
};

impl<U, FI, SL, ST, H, HC> FridgeService for Service<U, FI, SL, ST, H, HC>
where
    U: UserRepository,
    FI: FridgeItemRepository,
    SL: ShoppingListRepository,
    ST: ShoppingTaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn create_item(
        &self,
        identity: Identity,
        input: CreateFridgeItemInput,
    ) -> Result<FridgeItem, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        let item = FridgeItem::new(FridgeItemConfig {
            name: input.name,
            quantity: input.quantity,
            note: input.note,
            purchase_date: input.purchase_date,
            use_within_date: input.use_within_date,
            location: input.location,
            is_opened: input.is_opened,
            opened_at: input.opened_at,
            created_by: identity.id(),
        });

        self.fridge_item_repository.create_item(item).await
    }

    async fn get_inventory(
        &self,
        identity: Identity,
        filter: InventoryFilter,
    ) -> Result<ClassifiedInventory, CoreError> {
        let items = self
            .fridge_item_repository
            .get_by_owner(identity.id())
            .await?;

        let today = Utc::now().date_naive();
        let entries = items
            .into_iter()
            .map(|item| InventoryEntry {
                days_left: item.days_left(today),
                item,
            })
            .collect();

        Ok(classify_inventory(entries, filter))
    }

    async fn get_item(&self, identity: Identity, item_id: Uuid) -> Result<FridgeItem, CoreError> {
        let item = self
            .fridge_item_repository
            .get_by_id(item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            can_access_item(&identity, &item),
            "fridge item belongs to another user",
        )?;

        Ok(item)
    }

    async fn update_item(
        &self,
        identity: Identity,
        item_id: Uuid,
        input: UpdateFridgeItemInput,
    ) -> Result<FridgeItem, CoreError> {
        let mut item = self.get_item(identity, item_id).await?;

        item.update(
            input.name,
            input.quantity,
            input.note,
            input.purchase_date,
            input.use_within_date,
            input.location,
            input.is_opened,
            input.opened_at,
        );

        self.fridge_item_repository.update_item(item).await
    }

    async fn delete_item(&self, identity: Identity, item_id: Uuid) -> Result<(), CoreError> {
        let item = self.get_item(identity, item_id).await?;

        self.fridge_item_repository.delete_item(item.id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::{
        common::{AuthConfig, generate_uuid_v7},
        crypto::ports::MockHasherRepository,
        fridge::{entities::StorageLocation, ports::MockFridgeItemRepository},
        health::ports::MockHealthCheckRepository,
        jwt::services::JwtService,
        shopping::ports::{MockShoppingListRepository, MockShoppingTaskRepository},
        user::ports::MockUserRepository,
    };

    type TestService = Service<
        MockUserRepository,
        MockFridgeItemRepository,
        MockShoppingListRepository,
        MockShoppingTaskRepository,
        MockHasherRepository,
        MockHealthCheckRepository,
    >;

    fn service(items: MockFridgeItemRepository) -> TestService {
        Service::new(
            MockUserRepository::new(),
            items,
            MockShoppingListRepository::new(),
            MockShoppingTaskRepository::new(),
            MockHasherRepository::new(),
            MockHealthCheckRepository::new(),
            JwtService::new(&AuthConfig {
                secret_key: "test-secret".to_string(),
                access_token_expires_minutes: 150,
                refresh_token_expires_minutes: 60 * 24 * 7,
            }),
        )
    }

    fn identity() -> Identity {
        Identity {
            user_id: generate_uuid_v7(),
            email: "an@example.com".to_string(),
        }
    }

    fn item_for(owner: Uuid, name: &str, days_left: i64, location: StorageLocation) -> FridgeItem {
        FridgeItem::new(FridgeItemConfig {
            name: name.to_string(),
            quantity: "1kg".to_string(),
            note: None,
            purchase_date: None,
            use_within_date: Utc::now().date_naive() + Duration::days(days_left),
            location,
            is_opened: false,
            opened_at: None,
            created_by: owner,
        })
    }

    #[tokio::test]
    async fn create_item_rejects_blank_name() {
        let service = service(MockFridgeItemRepository::new());

        let err = service
            .create_item(
                identity(),
                CreateFridgeItemInput {
                    name: "   ".to_string(),
                    quantity: "1kg".to_string(),
                    note: None,
                    purchase_date: None,
                    use_within_date: Utc::now().date_naive(),
                    location: StorageLocation::Cool,
                    is_opened: false,
                    opened_at: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Invalid);
    }

    #[tokio::test]
    async fn create_item_stamps_owner() {
        let identity = identity();
        let owner = identity.user_id;

        let mut items = MockFridgeItemRepository::new();
        items
            .expect_create_item()
            .withf(move |item| item.created_by == owner)
            .returning(|item| Box::pin(async move { Ok(item) }));

        let service = service(items);
        let item = service
            .create_item(
                identity,
                CreateFridgeItemInput {
                    name: "Cà chua".to_string(),
                    quantity: "2.5kg".to_string(),
                    note: None,
                    purchase_date: None,
                    use_within_date: Utc::now().date_naive() + Duration::days(2),
                    location: StorageLocation::Cool,
                    is_opened: false,
                    opened_at: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(item.created_by, owner);
    }

    #[tokio::test]
    async fn get_inventory_classifies_owned_items() {
        let identity = identity();
        let owner = identity.user_id;

        let mut items = MockFridgeItemRepository::new();
        items.expect_get_by_owner().returning(move |_| {
            Box::pin(async move {
                Ok(vec![
                    item_for(owner, "Sữa tươi", 1, StorageLocation::Cool),
                    item_for(owner, "Thịt heo", 5, StorageLocation::Freezer),
                ])
            })
        });

        let service = service(items);
        let inventory = service
            .get_inventory(identity, InventoryFilter::All)
            .await
            .unwrap();

        assert_eq!(inventory.attention.len(), 1);
        assert_eq!(inventory.attention[0].item.name, "Sữa tươi");
        assert_eq!(inventory.attention[0].days_left, 1);
        assert_eq!(inventory.good.len(), 1);
        assert_eq!(inventory.good[0].item.name, "Thịt heo");
    }

    #[tokio::test]
    async fn get_item_of_another_user_is_forbidden() {
        let foreign = item_for(generate_uuid_v7(), "Cà rốt", 7, StorageLocation::Cool);
        let item_id = foreign.id;

        let mut items = MockFridgeItemRepository::new();
        items
            .expect_get_by_id()
            .returning(move |_| {
                let foreign = foreign.clone();
                Box::pin(async move { Ok(Some(foreign)) })
            });

        let service = service(items);
        let err = service.get_item(identity(), item_id).await.unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn get_unknown_item_is_not_found() {
        let mut items = MockFridgeItemRepository::new();
        items
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(items);
        let err = service
            .get_item(identity(), generate_uuid_v7())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn update_item_applies_partial_input() {
        let identity = identity();
        let owned = item_for(identity.user_id, "Cà chua", 2, StorageLocation::Cool);
        let item_id = owned.id;

        let mut items = MockFridgeItemRepository::new();
        items
            .expect_get_by_id()
            .returning(move |_| {
                let owned = owned.clone();
                Box::pin(async move { Ok(Some(owned)) })
            });
        items
            .expect_update_item()
            .returning(|item| Box::pin(async move { Ok(item) }));

        let service = service(items);
        let updated = service
            .update_item(
                identity,
                item_id,
                UpdateFridgeItemInput {
                    quantity: Some("1kg".to_string()),
                    location: Some(StorageLocation::Freezer),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Cà chua");
        assert_eq!(updated.quantity, "1kg");
        assert_eq!(updated.location, StorageLocation::Freezer);
    }
}
