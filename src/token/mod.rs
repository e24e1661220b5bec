//! Token payloads, signing, and verification.
//! Used by: service.

pub mod claims;
pub mod sign;
pub mod verify;
