//! Dotted-binary rendering of IPv4 addresses.
//!
//! Every octet is written as exactly 8 bits, groups joined by `.`,
//! e.g. `01011011.01111100.11100110.11001101`.

use crate::error::CidrError;
use itertools::Itertools;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Four groups of exactly eight bits.
static BINARY_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_binary_regex() -> &'static Regex {
    BINARY_REGEX.get_or_init(|| {
        Regex::new(r"^([01]{8})\.([01]{8})\.([01]{8})\.([01]{8})$").expect("Invalid Regex")
    })
}

/// Render an address as four zero padded 8-bit groups.
///
/// # Examples
/// ```
/// use cidr_calc::models::to_binary;
/// use std::net::Ipv4Addr;
/// assert_eq!(
///     to_binary(Ipv4Addr::new(91, 124, 230, 205)),
///     "01011011.01111100.11100110.11001101"
/// );
/// ```
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// Parse a dotted-binary string back into an address.
pub fn from_binary(binary: &str) -> Result<Ipv4Addr, CidrError> {
    let caps = get_binary_regex()
        .captures(binary.trim())
        .ok_or_else(|| CidrError::MalformedBinary(binary.to_string()))?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // The regex guarantees 8 binary digits, which always fit a u8.
        *octet = u8::from_str_radix(&caps[i + 1], 2)
            .map_err(|_| CidrError::MalformedBinary(binary.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Convert a dotted-binary string straight to dotted-quad text.
pub fn to_dotted_quad(binary: &str) -> Result<String, CidrError> {
    Ok(from_binary(binary)?.to_string())
}
