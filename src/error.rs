//! Validation errors for raw CIDR input.

use thiserror::Error;

/// Why a raw `A.B.C.D/P` string was rejected.
///
/// Derivations never fail once a [`crate::models::CidrBlock`] exists, so every
/// variant here describes bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Missing prefix: expected A.B.C.D/P, got '{input}'")]
    MissingPrefix { input: String },

    #[error("Malformed address '{address}': {reason}")]
    MalformedAddress { address: String, reason: String },

    #[error("Octet {position} out of range: '{value}' is not in 0..=255")]
    OctetRange { position: usize, value: String },

    #[error("Prefix out of range: '{value}' is not an integer in 0..=32")]
    PrefixRange { value: String },

    #[error("Malformed binary address '{0}': expected four groups of 8 bits")]
    MalformedBinary(String),
}
