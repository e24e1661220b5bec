//! Payload type and the registered claims stamped onto it at issuance.
//! Used by: token::sign, token::verify, service.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Cause;

/// Caller-supplied claims. Opaque apart from `iat`, `exp` and `nbf`.
pub type Payload = Map<String, Value>;

pub const ISSUED_AT: &str = "iat";
pub const EXPIRES_AT: &str = "exp";

pub fn to_payload<T: Serialize + ?Sized>(value: &T) -> Result<Payload, Cause> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Cause::NotAnObject(kind(&other))),
    }
}

/// Adds `iat` (unless the caller set one) and `exp = iat + expires_in`.
pub fn stamp(payload: &mut Payload, now: DateTime<Utc>, expires_in: Duration) -> Result<(), Cause> {
    if payload.contains_key(EXPIRES_AT) {
        return Err(Cause::ReservedClaim);
    }
    let issued_at = match payload.get(ISSUED_AT) {
        Some(value) => value.as_i64().ok_or(Cause::InvalidIssuedAt)?,
        None => now.timestamp(),
    };
    let expires_at = issued_at
        .checked_add(expires_in.num_seconds())
        .ok_or(Cause::InvalidIssuedAt)?;
    payload.insert(ISSUED_AT.into(), issued_at.into());
    payload.insert(EXPIRES_AT.into(), expires_at.into());
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn object_becomes_payload() -> Result<(), Cause> {
        let payload = to_payload(&json!({"userId": 7, "role": "admin"}))?;
        assert_eq!(payload.get("userId"), Some(&json!(7)));
        assert_eq!(payload.len(), 2);
        Ok(())
    }

    #[test]
    fn struct_becomes_payload() -> Result<(), Cause> {
        #[derive(Serialize)]
        struct Login<'a> {
            user: &'a str,
        }
        let payload = to_payload(&Login { user: "ana" })?;
        assert_eq!(payload.get("user"), Some(&json!("ana")));
        Ok(())
    }

    #[test]
    fn scalar_is_not_a_payload() {
        let result = to_payload("just a string");
        assert!(matches!(result, Err(Cause::NotAnObject("string"))));
        let result = to_payload(&[1, 2, 3]);
        assert!(matches!(result, Err(Cause::NotAnObject("array"))));
    }

    #[test]
    fn non_string_keys_fail_serialization() {
        let mut map = HashMap::new();
        map.insert((1u8, 2u8), "pair");
        assert!(matches!(to_payload(&map), Err(Cause::Serialization(_))));
    }

    #[test]
    fn stamp_sets_iat_and_exp() -> Result<(), Cause> {
        let now = Utc::now();
        let mut payload = Payload::new();
        stamp(&mut payload, now, Duration::days(1))?;
        assert_eq!(payload[ISSUED_AT], json!(now.timestamp()));
        assert_eq!(payload[EXPIRES_AT], json!(now.timestamp() + 86_400));
        Ok(())
    }

    #[test]
    fn stamp_keeps_caller_iat() -> Result<(), Cause> {
        let mut payload = to_payload(&json!({"iat": 1_000}))?;
        stamp(&mut payload, Utc::now(), Duration::seconds(60))?;
        assert_eq!(payload[ISSUED_AT], json!(1_000));
        assert_eq!(payload[EXPIRES_AT], json!(1_060));
        Ok(())
    }

    #[test]
    fn stamp_rejects_existing_exp() -> Result<(), Cause> {
        let mut payload = to_payload(&json!({"exp": 1}))?;
        let result = stamp(&mut payload, Utc::now(), Duration::days(1));
        assert!(matches!(result, Err(Cause::ReservedClaim)));
        Ok(())
    }

    #[test]
    fn stamp_rejects_iat_that_would_overflow_exp() -> Result<(), Cause> {
        let mut payload = to_payload(&json!({"iat": i64::MAX}))?;
        let result = stamp(&mut payload, Utc::now(), Duration::days(1));
        assert!(matches!(result, Err(Cause::InvalidIssuedAt)));
        assert!(!payload.contains_key(EXPIRES_AT));
        Ok(())
    }

    #[test]
    fn stamp_rejects_non_numeric_iat() -> Result<(), Cause> {
        let mut payload = to_payload(&json!({"iat": "yesterday"}))?;
        let result = stamp(&mut payload, Utc::now(), Duration::days(1));
        assert!(matches!(result, Err(Cause::InvalidIssuedAt)));
        Ok(())
    }
}
