use crate::{
    domain::{common::FridgelyConfig, common::services::Service, jwt::services::JwtService},
    infrastructure::{
        crypto::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        fridge::PostgresFridgeItemRepository,
        health::PostgresHealthCheckRepository,
        shopping::{PostgresShoppingListRepository, PostgresShoppingTaskRepository},
        user::repository::PostgresUserRepository,
    },
};

/// The fully wired service: every port is backed by its Postgres adapter.
pub type FridgelyService = Service<
    PostgresUserRepository,
    PostgresFridgeItemRepository,
    PostgresShoppingListRepository,
    PostgresShoppingTaskRepository,
    Argon2HasherRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: FridgelyConfig) -> Result<FridgelyService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresFridgeItemRepository::new(db.clone()),
        PostgresShoppingListRepository::new(db.clone()),
        PostgresShoppingTaskRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        PostgresHealthCheckRepository::new(db),
        JwtService::new(&config.auth),
    ))
}
