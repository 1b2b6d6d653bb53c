use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    fridge::ports::FridgeItemRepository,
    health::ports::HealthCheckRepository,
    shopping::{
        entities::{ShoppingList, ShoppingTask},
        policies::can_access_list,
        ports::{ShoppingListRepository, ShoppingService, ShoppingTaskRepository},
        value_objects::{
            CreateShoppingListInput, CreateShoppingTaskInput, ShoppingListWithTasks,
            UpdateShoppingTaskInput,
        },
    },
    user::ports::UserRepository,
};

impl<U, FI, SL, ST, H, HC> ShoppingService for Service<U, FI, SL, ST, H, HC>
where
    U: UserRepository,
    FI: FridgeItemRepository,
    SL: ShoppingListRepository,
    ST: ShoppingTaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn create_list(
        &self,
        identity: Identity,
        input: CreateShoppingListInput,
    ) -> Result<ShoppingList, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        let list = ShoppingList::new(input.name, input.description, input.due_date, identity.id());

        self.shopping_list_repository.create_list(list).await
    }

    async fn get_lists(&self, identity: Identity) -> Result<Vec<ShoppingList>, CoreError> {
        self.shopping_list_repository
            .get_by_owner(identity.id())
            .await
    }

    async fn get_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> Result<ShoppingListWithTasks, CoreError> {
        let list = self.owned_list(&identity, list_id).await?;
        let tasks = self.shopping_task_repository.get_by_list(list.id).await?;

        Ok(ShoppingListWithTasks { list, tasks })
    }

    async fn delete_list(&self, identity: Identity, list_id: Uuid) -> Result<(), CoreError> {
        let list = self.owned_list(&identity, list_id).await?;

        self.shopping_list_repository.delete_list(list.id).await
    }

    async fn create_task(
        &self,
        identity: Identity,
        list_id: Uuid,
        input: CreateShoppingTaskInput,
    ) -> Result<ShoppingTask, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        let list = self.owned_list(&identity, list_id).await?;

        let task = ShoppingTask::new(
            list.id,
            input.name,
            input.quantity,
            input.note,
            identity.id(),
        );

        self.shopping_task_repository.create_task(task).await
    }

    async fn update_task(
        &self,
        identity: Identity,
        task_id: Uuid,
        input: UpdateShoppingTaskInput,
    ) -> Result<ShoppingTask, CoreError> {
        let mut task = self.owned_task(&identity, task_id).await?;

        task.update(input.name, input.quantity, input.note, input.is_done);

        self.shopping_task_repository.update_task(task).await
    }

    async fn delete_task(&self, identity: Identity, task_id: Uuid) -> Result<(), CoreError> {
        let task = self.owned_task(&identity, task_id).await?;

        self.shopping_task_repository.delete_task(task.id).await
    }
}

impl<U, FI, SL, ST, H, HC> Service<U, FI, SL, ST, H, HC>
where
    U: UserRepository,
    FI: FridgeItemRepository,
    SL: ShoppingListRepository,
    ST: ShoppingTaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn owned_list(
        &self,
        identity: &Identity,
        list_id: Uuid,
    ) -> Result<ShoppingList, CoreError> {
        let list = self
            .shopping_list_repository
            .get_by_id(list_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            can_access_list(identity, &list),
            "shopping list belongs to another user",
        )?;

        Ok(list)
    }

    // Task access goes through the owning list.
    async fn owned_task(
        &self,
        identity: &Identity,
        task_id: Uuid,
    ) -> Result<ShoppingTask, CoreError> {
        let task = self
            .shopping_task_repository
            .get_by_id(task_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.owned_list(identity, task.list_id).await?;

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{AuthConfig, generate_uuid_v7},
        crypto::ports::MockHasherRepository,
        fridge::ports::MockFridgeItemRepository,
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

    fn service(lists: MockShoppingListRepository, tasks: MockShoppingTaskRepository) -> TestService {
        Service::new(
            MockUserRepository::new(),
            MockFridgeItemRepository::new(),
            lists,
            tasks,
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

    #[tokio::test]
    async fn get_list_joins_its_tasks() {
        let identity = identity();
        let list = ShoppingList::new("Đi chợ cuối tuần".to_string(), None, None, identity.user_id);
        let list_id = list.id;
        let task = ShoppingTask::new(
            list_id,
            "Cà chua".to_string(),
            "2kg".to_string(),
            None,
            identity.user_id,
        );

        let mut lists = MockShoppingListRepository::new();
        let stored = list.clone();
        lists
            .expect_get_by_id()
            .returning(move |_| {
                let stored = stored.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });

        let mut tasks = MockShoppingTaskRepository::new();
        let stored_task = task.clone();
        tasks
            .expect_get_by_list()
            .returning(move |_| {
                let stored_task = stored_task.clone();
                Box::pin(async move { Ok(vec![stored_task]) })
            });

        let service = service(lists, tasks);
        let result = service.get_list(identity, list_id).await.unwrap();

        assert_eq!(result.list, list);
        assert_eq!(result.tasks, vec![task]);
    }

    #[tokio::test]
    async fn task_in_foreign_list_is_forbidden() {
        let foreign_owner = generate_uuid_v7();
        let list = ShoppingList::new("someone else's".to_string(), None, None, foreign_owner);
        let task = ShoppingTask::new(
            list.id,
            "Sữa tươi".to_string(),
            "1 hộp".to_string(),
            None,
            foreign_owner,
        );
        let task_id = task.id;

        let mut lists = MockShoppingListRepository::new();
        lists
            .expect_get_by_id()
            .returning(move |_| {
                let list = list.clone();
                Box::pin(async move { Ok(Some(list)) })
            });

        let mut tasks = MockShoppingTaskRepository::new();
        tasks
            .expect_get_by_id()
            .returning(move |_| {
                let task = task.clone();
                Box::pin(async move { Ok(Some(task)) })
            });

        let service = service(lists, tasks);
        let err = service
            .update_task(identity(), task_id, UpdateShoppingTaskInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn create_list_rejects_blank_name() {
        let service = service(
            MockShoppingListRepository::new(),
            MockShoppingTaskRepository::new(),
        );

        let err = service
            .create_list(
                identity(),
                CreateShoppingListInput {
                    name: "".to_string(),
                    description: None,
                    due_date: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Invalid);
    }
}
