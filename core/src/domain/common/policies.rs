use crate::domain::common::entities::app_errors::CoreError;

/// Turns a policy verdict into a `Forbidden` error when the check does not pass.
pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_policy_is_ok() {
        assert!(ensure_policy(Ok(true), "nope").is_ok());
    }

    #[test]
    fn failing_policy_is_forbidden_with_message() {
        let err = ensure_policy(Ok(false), "not the owner").unwrap_err();
        assert_eq!(err, CoreError::Forbidden("not the owner".to_string()));
    }

    #[test]
    fn policy_error_is_passed_through() {
        let err = ensure_policy(Err(CoreError::NotFound), "ignored").unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }
}
