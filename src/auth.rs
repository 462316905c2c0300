use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, routes::AppState};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub exp: u64,
}

pub fn generate_token(secret: &str, user_id: i64, ttl_secs: u64) -> anyhow::Result<String> {
    let now = time::OffsetDateTime::now_utc().unix_timestamp().max(0) as u64;
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + ttl_secs,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Returns the numeric user id carried by a valid token.
pub fn validate_token(secret: &str, token: &str) -> anyhow::Result<i64> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(token_data.claims.sub.parse()?)
}

/// Caller authenticated with `Authorization: Bearer <jwt>`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    token: String,
}

impl AuthUser {
    /// The `Authorization` header value, forwarded to the payment service.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthorized("missing bearer token".to_owned()))?;

        let user_id = validate_token(&state.jwt_secret, bearer.token()).map_err(|e| {
            tracing::warn!(error = %e, "rejected bearer token");
            ApiError::Unauthorized("invalid or expired token".to_owned())
        })?;

        Ok(AuthUser {
            user_id,
            token: bearer.token().to_owned(),
        })
    }
}
