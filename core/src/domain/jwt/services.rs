use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use uuid::Uuid;

use crate::domain::{
    common::{AuthConfig, entities::app_errors::CoreError},
    jwt::entities::{JwtClaim, TokenPair, TokenType},
};

/// Issues and verifies HS256 token pairs.
#[derive(Clone)]
pub struct JwtService {
    secret_key: String,
    access_token_expires_minutes: i64,
    refresh_token_expires_minutes: i64,
}

impl JwtService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret_key: config.secret_key.clone(),
            access_token_expires_minutes: config.access_token_expires_minutes,
            refresh_token_expires_minutes: config.refresh_token_expires_minutes,
        }
    }

    pub fn generate_token_pair(&self, user_id: Uuid, email: &str) -> Result<TokenPair, CoreError> {
        let access_token = self.generate_token(
            user_id,
            email,
            TokenType::Access,
            self.access_token_expires_minutes,
        )?;
        let refresh_token = self.generate_token(
            user_id,
            email,
            TokenType::Refresh,
            self.refresh_token_expires_minutes,
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        email: &str,
        typ: TokenType,
        expires_minutes: i64,
    ) -> Result<String, CoreError> {
        let now = Utc::now();
        let claim = JwtClaim {
            sub: user_id,
            email: email.to_string(),
            typ,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(expires_minutes)).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claim,
            &EncodingKey::from_secret(self.secret_key.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to encode token: {}", e);
            CoreError::InternalServerError
        })
    }

    /// Decodes a token and checks both signature and `typ`; a valid refresh
    /// token is still rejected where an access token is expected.
    pub fn verify_token(&self, token: &str, expected: TokenType) -> Result<JwtClaim, CoreError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<JwtClaim>(
            token,
            &DecodingKey::from_secret(self.secret_key.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CoreError::TokenExpired,
            _ => CoreError::InvalidToken,
        })?;

        if data.claims.typ != expected {
            return Err(CoreError::InvalidToken);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::generate_uuid_v7;

    fn service() -> JwtService {
        JwtService::new(&AuthConfig {
            secret_key: "test-secret".to_string(),
            access_token_expires_minutes: 150,
            refresh_token_expires_minutes: 60 * 24 * 7,
        })
    }

    #[test]
    fn access_token_round_trips() {
        let service = service();
        let user_id = generate_uuid_v7();

        let pair = service.generate_token_pair(user_id, "an@example.com").unwrap();
        let claim = service
            .verify_token(&pair.access_token, TokenType::Access)
            .unwrap();

        assert_eq!(claim.sub, user_id);
        assert_eq!(claim.email, "an@example.com");
        assert_eq!(claim.typ, TokenType::Access);
    }

    #[test]
    fn refresh_token_is_not_an_access_token() {
        let service = service();
        let pair = service
            .generate_token_pair(generate_uuid_v7(), "an@example.com")
            .unwrap();

        let err = service
            .verify_token(&pair.refresh_token, TokenType::Access)
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidToken);

        assert!(
            service
                .verify_token(&pair.refresh_token, TokenType::Refresh)
                .is_ok()
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = service();
        let now = Utc::now();
        let claim = JwtClaim {
            sub: generate_uuid_v7(),
            email: "an@example.com".to_string(),
            typ: TokenType::Access,
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claim,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        let err = service.verify_token(&token, TokenType::Access).unwrap_err();
        assert_eq!(err, CoreError::TokenExpired);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let service = service();
        let other = JwtService::new(&AuthConfig {
            secret_key: "other-secret".to_string(),
            access_token_expires_minutes: 150,
            refresh_token_expires_minutes: 60 * 24 * 7,
        });

        let pair = other
            .generate_token_pair(generate_uuid_v7(), "an@example.com")
            .unwrap();
        let err = service
            .verify_token(&pair.access_token, TokenType::Access)
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidToken);
    }
}
