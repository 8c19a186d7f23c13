use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::types::RecordId;

pub mod password;

/// Bearer token claims: the owning user's identity plus issuance and expiry
/// instants. Never persisted; reconstructed by `validate_jwt` on each request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: RecordId,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Claims expiring a fixed window after issuance (configured TTL).
    pub fn new(user_id: RecordId) -> Self {
        let now = Utc::now();
        let expiry_secs = config::config().security.jwt_expiry_secs;
        let exp = (now + Duration::seconds(expiry_secs)).timestamp();

        Self {
            user_id,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token generation failed: {0}")]
    TokenGeneration(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("JWT secret is not configured")]
    MissingSecret,
}

/// Sign claims into a compact token. Unforgeable without the shared secret.
pub fn generate_jwt(claims: Claims) -> Result<String, AuthError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, &claims, &encoding_key).map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

/// Verify signature and expiry, returning the embedded claims unchanged.
///
/// There is no revocation list: a token stays valid until its expiry
/// regardless of subsequent account changes.
pub fn validate_jwt(token: &str) -> Result<Claims, AuthError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    // Tokens expire exactly at `exp`, no grace window
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}
