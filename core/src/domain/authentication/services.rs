use crate::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{AuthOutput, Identity, LoginInput, RegisterInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    fridge::ports::FridgeItemRepository,
    health::ports::HealthCheckRepository,
    jwt::entities::{TokenPair, TokenType},
    shopping::ports::{ShoppingListRepository, ShoppingTaskRepository},
    user::{ports::UserRepository, value_objects::CreateUserRequest},
};

impl<U, FI, SL, ST, H, HC> AuthService for Service<U, FI, SL, ST, H, HC>
where
    U: UserRepository,
    FI: FridgeItemRepository,
    SL: ShoppingListRepository,
    ST: ShoppingTaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn register(&self, input: RegisterInput) -> Result<AuthOutput, CoreError> {
        let existing = self.user_repository.get_by_email(input.email.clone()).await?;
        if existing.is_some() {
            return Err(CoreError::Conflict("email already registered".to_string()));
        }

        let password_hash = self.hasher_repository.hash_password(&input.password).await?;

        let user = self
            .user_repository
            .create_user(CreateUserRequest {
                email: input.email,
                password_hash,
                name: input.name,
                username: input.username,
                language: input.language.unwrap_or_else(|| "en".to_string()),
            })
            .await?;

        let tokens = self.jwt_service.generate_token_pair(user.id, &user.email)?;

        Ok(AuthOutput { user, tokens })
    }

    async fn login(&self, input: LoginInput) -> Result<AuthOutput, CoreError> {
        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        if !user.is_active {
            return Err(CoreError::InvalidCredentials);
        }

        let verified = self
            .hasher_repository
            .verify_password(&input.password, &user.password_hash)
            .await?;
        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        let tokens = self.jwt_service.generate_token_pair(user.id, &user.email)?;

        Ok(AuthOutput { user, tokens })
    }

    async fn refresh_token(&self, refresh_token: String) -> Result<TokenPair, CoreError> {
        let claim = self
            .jwt_service
            .verify_token(&refresh_token, TokenType::Refresh)?;

        // The user must still exist and be active when the token is exchanged.
        let user = self
            .user_repository
            .get_by_id(claim.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        if !user.is_active {
            return Err(CoreError::InvalidToken);
        }

        self.jwt_service.generate_token_pair(user.id, &user.email)
    }

    async fn authorize_request(&self, token: String) -> Result<Identity, CoreError> {
        let claim = self.jwt_service.verify_token(&token, TokenType::Access)?;

        let user = self
            .user_repository
            .get_by_id(claim.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        if !user.is_active {
            return Err(CoreError::InvalidToken);
        }

        Ok(Identity {
            user_id: user.id,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::AuthConfig,
        crypto::ports::MockHasherRepository,
        fridge::ports::MockFridgeItemRepository,
        health::ports::MockHealthCheckRepository,
        jwt::services::JwtService,
        shopping::ports::{MockShoppingListRepository, MockShoppingTaskRepository},
        user::{entities::User, ports::MockUserRepository},
    };

    type TestService = Service<
        MockUserRepository,
        MockFridgeItemRepository,
        MockShoppingListRepository,
        MockShoppingTaskRepository,
        MockHasherRepository,
        MockHealthCheckRepository,
    >;

    fn jwt_service() -> JwtService {
        JwtService::new(&AuthConfig {
            secret_key: "test-secret".to_string(),
            access_token_expires_minutes: 150,
            refresh_token_expires_minutes: 60 * 24 * 7,
        })
    }

    fn service(users: MockUserRepository, hasher: MockHasherRepository) -> TestService {
        Service::new(
            users,
            MockFridgeItemRepository::new(),
            MockShoppingListRepository::new(),
            MockShoppingTaskRepository::new(),
            hasher,
            MockHealthCheckRepository::new(),
            jwt_service(),
        )
    }

    fn test_user(password_hash: &str) -> User {
        User::new(CreateUserRequest {
            email: "an@example.com".to_string(),
            password_hash: password_hash.to_string(),
            name: "An".to_string(),
            username: None,
            language: "vi".to_string(),
        })
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(test_user("hash"))) }));

        let service = service(users, MockHasherRepository::new());
        let err = service
            .register(RegisterInput {
                email: "an@example.com".to_string(),
                password: "secret".to_string(),
                name: "An".to_string(),
                username: None,
                language: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Conflict("email already registered".to_string()));
    }

    #[tokio::test]
    async fn register_hashes_password_and_issues_tokens() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(|_| Box::pin(async { Ok(None) }));
        users
            .expect_create_user()
            .withf(|request| request.password_hash == "hashed" && request.language == "en")
            .returning(|request| Box::pin(async move { Ok(User::new(request)) }));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_hash_password()
            .returning(|_| Box::pin(async { Ok("hashed".to_string()) }));

        let service = service(users, hasher);
        let output = service
            .register(RegisterInput {
                email: "an@example.com".to_string(),
                password: "secret".to_string(),
                name: "An".to_string(),
                username: None,
                language: None,
            })
            .await
            .unwrap();

        assert_eq!(output.user.email, "an@example.com");
        let claim = service
            .jwt_service
            .verify_token(&output.tokens.access_token, TokenType::Access)
            .unwrap();
        assert_eq!(claim.sub, output.user.id);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(test_user("hash"))) }));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let service = service(users, hasher);
        let err = service
            .login(LoginInput {
                email: "an@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn login_unknown_email_does_not_reveal_existence() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(|_| Box::pin(async { Ok(None) }));

        let service = service(users, MockHasherRepository::new());
        let err = service
            .login(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn refresh_rejects_access_token() {
        let users = MockUserRepository::new();
        let service = service(users, MockHasherRepository::new());

        let pair = service
            .jwt_service
            .generate_token_pair(crate::domain::common::generate_uuid_v7(), "an@example.com")
            .unwrap();

        let err = service.refresh_token(pair.access_token).await.unwrap_err();
        assert_eq!(err, CoreError::InvalidToken);
    }

    #[tokio::test]
    async fn authorize_request_resolves_identity() {
        let user = test_user("hash");
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        let stored = user.clone();
        users
            .expect_get_by_id()
            .returning(move |_| {
                let stored = stored.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });

        let service = service(users, MockHasherRepository::new());
        let pair = service
            .jwt_service
            .generate_token_pair(user_id, &user.email)
            .unwrap();

        let identity = service.authorize_request(pair.access_token).await.unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email, "an@example.com");
    }
}
