use crate::{
    error::{self, Error, Result},
    state::Config,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use chrono::{Duration, Utc};
use entity::users;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Identity claims carried by the bearer token, mirroring the payload the
/// login endpoint signs: the user row minus the credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub iat: i64,
    pub exp: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .remove::<Claims>()
            .ok_or(error::COULD_NOT_GET_CLAIMS)
    }
}

pub trait JwtTrait: Send + Sync + 'static {
    fn encode(&self, user: &users::Model) -> Result<String>;
    fn get_claims(&self, token: &str) -> Result<Claims>;
}

pub struct Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry: Duration,
}

impl Jwt {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry: Duration::hours(expiry_hours),
        }
    }

    pub fn from_env(config: &Config) -> Self {
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET is not set");
        Self::new(&secret, config.token_expiry_hours)
    }
}

static VALIDATION: Lazy<Validation> = Lazy::new(|| {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 5;

    validation
});

impl JwtTrait for Jwt {
    fn encode(&self, user: &users::Model) -> Result<String> {
        let now = Utc::now();

        let claims = Claims {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding).map_err(|err| {
            error!("failed to sign token: {:?}", err);
            error::INTERNAL
        })
    }

    fn get_claims(&self, token: &str) -> Result<Claims> {
        match jsonwebtoken::decode(token, &self.decoding, &VALIDATION) {
            Ok(decoded) => Ok(decoded.claims),
            Err(err) => {
                warn!(error = err.to_string(), "tried invalid token");
                Err(error::JWT_INVALID_TOKEN)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> users::Model {
        users::Model {
            id: 7,
            username: "ana@example.com".to_owned(),
            password: "hash".to_owned(),
            first_name: "Ana".to_owned(),
            last_name: "García".to_owned(),
        }
    }

    #[test]
    fn token_round_trip() {
        let jwt = Jwt::new("test-secret", 12);

        let token = jwt.encode(&user()).unwrap();
        let claims = jwt.get_claims(&token).unwrap();

        assert_eq!(claims.id, 7);
        assert_eq!(claims.username, "ana@example.com");
        assert_eq!(claims.first_name, "Ana");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let jwt = Jwt::new("test-secret", 12);
        let other = Jwt::new("other-secret", 12);

        let token = other.encode(&user()).unwrap();

        assert!(jwt.get_claims(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        let jwt = Jwt::new("test-secret", 12);

        assert!(jwt.get_claims("not.a.token").is_err());
    }
}
