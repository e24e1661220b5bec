//! HMAC token verification.
//! Used by: service.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::error::{Cause, Result};
use crate::token::claims::{Payload, EXPIRES_AT};
use crate::token::sign::ALGORITHM;

/// Any HMAC algorithm, no clock leeway, `exp` and `nbf` checked only when
/// present. Audience is not checked.
pub fn validation() -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    validation.required_spec_claims.clear();
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation
}

pub fn verify_token(token: &str, key: &DecodingKey, validation: &Validation) -> Result<Payload> {
    let data = decode::<Payload>(token, key, validation).map_err(Cause::from)?;
    check_not_expired(&data.claims, Utc::now().timestamp())?;
    Ok(data.claims)
}

/// A token is already expired in the second its `exp` names.
fn check_not_expired(payload: &Payload, now: i64) -> std::result::Result<(), Cause> {
    match payload.get(EXPIRES_AT).and_then(|exp| exp.as_i64()) {
        Some(exp) if exp <= now => Err(Cause::Jwt(ErrorKind::ExpiredSignature.into())),
        _ => Ok(()),
    }
}
