//! HS256 token signing.
//! Used by: service.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::error::{Cause, Result};
use crate::token::claims::{stamp, to_payload};

pub const ALGORITHM: Algorithm = Algorithm::HS256;

pub fn sign_token<T: Serialize + ?Sized>(
    payload: &T,
    key: &EncodingKey,
    expires_in: Duration,
) -> Result<String> {
    Ok(encode_payload(payload, key, expires_in)?)
}

fn encode_payload<T: Serialize + ?Sized>(
    payload: &T,
    key: &EncodingKey,
    expires_in: Duration,
) -> std::result::Result<String, Cause> {
    let mut claims = to_payload(payload)?;
    stamp(&mut claims, Utc::now(), expires_in)?;
    Ok(encode(&Header::new(ALGORITHM), &claims, key)?)
}
