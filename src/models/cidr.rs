//! IPv4 address plus prefix length.
//!
//! Provides [`CidrBlock`], the single validated input every derivation runs on.

use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// A validated IPv4 address with its prefix length (0-32).
///
/// Built once per query by the validator and never mutated.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    addr: Ipv4Addr,
    prefix: u8,
}

impl CidrBlock {
    /// Build a block from an already parsed address.
    ///
    /// # Examples
    /// ```
    /// use cidr_calc::models::CidrBlock;
    /// use std::net::Ipv4Addr;
    /// assert!(CidrBlock::new(Ipv4Addr::new(10, 0, 0, 1), 33).is_err());
    /// ```
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<CidrBlock, CidrError> {
        if prefix > MAX_LENGTH {
            return Err(CidrError::PrefixRange {
                value: prefix.to_string(),
            });
        }
        Ok(CidrBlock { addr, prefix })
    }

    /// The address as entered, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Number of leading network bits.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<CidrBlock>().map_err(de::Error::custom)
    }
}
