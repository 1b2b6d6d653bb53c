use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Password hashing behind a port so services never see the algorithm.
#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(
        &self,
        password: &str,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn verify_password(
        &self,
        password: &str,
        hash: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
