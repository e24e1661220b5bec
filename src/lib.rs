//! authtoken: sign and verify time-bounded HS256 authentication tokens.
//! Used by: binary entrypoint, embedding services.

pub mod config;
pub mod error;
pub mod service;
pub mod token;

pub use config::TokenConfig;
pub use error::{Error, Result};
pub use service::{Authenticator, TokenService};
pub use token::claims::Payload;
