//! Secret and expiration policy.
//! Used by: service, main.

use std::fmt;

use chrono::Duration;

pub const SECRET_ENV: &str = "JWT_SECRET";
pub const DEFAULT_SECRET: &str = "your-secret-key-please-change-it-production";
pub const DEFAULT_EXPIRES_IN_SECS: i64 = 24 * 60 * 60;

#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    expires_in: Duration,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_in: Duration::seconds(DEFAULT_EXPIRES_IN_SECS),
        }
    }

    /// Reads `JWT_SECRET` once. Unset or empty falls back to the placeholder.
    pub fn from_env() -> Self {
        Self::from_secret_var(std::env::var(SECRET_ENV).ok())
    }

    fn from_secret_var(value: Option<String>) -> Self {
        match value.filter(|s| !s.is_empty()) {
            Some(secret) => Self::new(secret),
            None => {
                tracing::warn!("{} not set, using insecure default secret", SECRET_ENV);
                Self::new(DEFAULT_SECRET)
            }
        }
    }

    pub fn with_expiration(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
