use std::future::Future;

use crate::domain::{
    authentication::value_objects::{AuthOutput, Identity, LoginInput, RegisterInput},
    common::entities::app_errors::CoreError,
    jwt::entities::TokenPair,
};

/// Service trait for authentication flows
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    fn refresh_token(
        &self,
        refresh_token: String,
    ) -> impl Future<Output = Result<TokenPair, CoreError>> + Send;

    /// Resolves a bearer access token into the caller's identity.
    fn authorize_request(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
