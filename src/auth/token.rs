use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Username
    pub exp: i64,     // Expiration time
    pub iat: i64,     // Issued at
}

/// Signs and checks HS256 bearer tokens. Nothing is persisted, so a token
/// stays valid until it expires.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, expiry: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry,
        }
    }

    pub fn issue(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            exp: (now + self.expiry).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Returns the username carried by a valid, unexpired token.
    pub fn verify(&self, token: &str) -> Result<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims.sub)
    }
}
