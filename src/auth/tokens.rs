//! Session Token Service
//!
//! Mints and verifies stateless HS256 bearer tokens proving a
//! previously-authenticated identity.
//!
//! Tokens carry `{sub = identity email, iat, exp}` and are verified purely
//! by signature and expiry against the configured key; nothing is persisted
//! and no revocation list exists. A token therefore stays valid for its full
//! TTL regardless of later account-state changes.
//!
//! The signing key and TTL are injected at construction. The key must be at
//! least 256 bits, enforced in [`crate::server::config::AppConfig`].

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the identity's normalized email
    pub sub: String,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: u64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: u64,
}

/// Token verification failures.
///
/// Exactly three kinds: anything the decoder reports beyond a bad signature
/// or expiry collapses into `Malformed`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token is malformed")]
    Malformed,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

/// Stateless token issuer and verifier.
///
/// Cheap to clone: holds only the derived key material and the TTL.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl TokenService {
    /// Build a token service from a signing secret and a TTL in seconds.
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is invalid at any instant >= exp.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
        }
    }

    /// Issue a signed token for the given subject.
    ///
    /// Claims are `{sub, iat = now, exp = now + TTL}`. No side effects:
    /// issued tokens are not recorded anywhere.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now().timestamp().max(0) as u64;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(TokenError::from)
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    ///
    /// - `InvalidSignature` - signature does not match the configured key
    /// - `Expired` - current time is at or past the token's expiry
    /// - `Malformed` - the token cannot be parsed
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Configured token lifetime in seconds.
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}
