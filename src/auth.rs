use std::{sync::Arc, time::{SystemTime, UNIX_EPOCH}};

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::JwtConfig, error::AppError, routes::AppState};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    sub: String,
}

/// Resolves a bearer token to the id of the user it was issued for.
pub trait IdentityProvider: Send + Sync {
    fn verify(&self, token: &str) -> foodprep_shared::Result<String>;
}

/// HS256 tokens signed with the shared secret.
pub struct JwtIdentity {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentity {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.to_owned()]);
        validation.set_audience(&[config.audience.to_owned()]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    pub fn shared(config: &JwtConfig) -> Arc<dyn IdentityProvider> {
        Arc::new(Self::new(config))
    }
}

impl IdentityProvider for JwtIdentity {
    fn verify(&self, token: &str) -> foodprep_shared::Result<String> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(error = %e, "rejected bearer token");
                foodprep_shared::Error::Unauthorized
            })?;

        if token_data.claims.sub.is_empty() {
            return Err(foodprep_shared::Error::Unauthorized);
        }

        Ok(token_data.claims.sub)
    }
}

pub fn generate_token(config: &JwtConfig, sub: impl Into<String>) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let exp = config
        .expiration_days
        .checked_mul(24 * 60 * 60)
        .and_then(|ttl| now.checked_add(ttl))
        .ok_or_else(|| anyhow::anyhow!("jwt expiration_days is out of range"))?;
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp,
        iat: now,
        iss: config.issuer.to_owned(),
        sub: sub.into(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

/// Id of the caller, taken from the `Authorization: Bearer` header.
pub struct AuthUser(pub String);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthorized("No token provided".to_owned()))?;

        let user_id = state
            .identity
            .verify(bearer.token())
            .map_err(|_| AppError::Unauthorized("Invalid token".to_owned()))?;

        Ok(AuthUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            issuer: "foodprep".to_owned(),
            audience: "foodprep-api".to_owned(),
            expiration_days: 1,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let token = generate_token(&config(), "john").unwrap();

        assert_eq!(JwtIdentity::new(&config()).verify(&token).unwrap(), "john");
    }

    #[test]
    fn test_rejects_foreign_tokens() {
        let identity = JwtIdentity::new(&config());

        let other_secret = JwtConfig {
            secret: "another_secret_key_minimum_32_characters".to_owned(),
            ..config()
        };
        let token = generate_token(&other_secret, "john").unwrap();
        assert!(identity.verify(&token).is_err());

        let other_audience = JwtConfig {
            audience: "someone-else".to_owned(),
            ..config()
        };
        let token = generate_token(&other_audience, "john").unwrap();
        assert!(identity.verify(&token).is_err());

        assert!(identity.verify("not-a-jwt").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_expiration() {
        let config = JwtConfig {
            expiration_days: u64::MAX,
            ..config()
        };

        assert!(generate_token(&config, "john").is_err());
    }
}
