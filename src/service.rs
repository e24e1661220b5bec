//! Sign/verify facade over a configured secret.
//! Used by: main, library callers.

use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation};
use serde::Serialize;

use crate::config::TokenConfig;
use crate::error::Result;
use crate::token::claims::Payload;
use crate::token::sign::sign_token;
use crate::token::verify::{validation, verify_token};

/// Capability handed to code that needs to issue or check tokens.
pub trait Authenticator: Send + Sync {
    fn sign(&self, payload: &Payload) -> Result<String>;
    fn verify(&self, token: &str) -> Result<Payload>;
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in: Duration,
}

impl TokenService {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret()),
            decoding_key: DecodingKey::from_secret(config.secret()),
            validation: validation(),
            expires_in: config.expires_in(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&TokenConfig::from_env())
    }

    /// Signs any value that serializes to a JSON object.
    pub fn sign<T: Serialize + ?Sized>(&self, payload: &T) -> Result<String> {
        let token = sign_token(payload, &self.encoding_key, self.expires_in)?;
        tracing::debug!(expires_in = self.expires_in.num_seconds(), "token signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<Payload> {
        verify_token(token, &self.decoding_key, &self.validation)
    }
}

impl Authenticator for TokenService {
    fn sign(&self, payload: &Payload) -> Result<String> {
        TokenService::sign(self, payload)
    }

    fn verify(&self, token: &str) -> Result<Payload> {
        TokenService::verify(self, token)
    }
}
