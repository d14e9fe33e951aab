//! Validation of raw `A.B.C.D/P` input.
//!
//! Checks run in a fixed order and stop at the first failure:
//! separator, address shape, octet range (all four octets), prefix range.

use crate::error::CidrError;
use crate::models::{CidrBlock, MAX_LENGTH};
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// ASCII decimal digits only. `\d` would also accept other Unicode digits.
static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_decimal_regex() -> &'static Regex {
    DECIMAL_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Validate a raw CIDR string and build a [`CidrBlock`].
///
/// Surrounding whitespace is ignored. The input is only borrowed.
///
/// # Examples
/// ```
/// use cidr_calc::processing::parse_cidr;
/// let block = parse_cidr("91.124.230.205/30").unwrap();
/// assert_eq!(block.prefix(), 30);
/// assert!(parse_cidr("1.2.3.4").is_err());
/// ```
pub fn parse_cidr(raw: &str) -> Result<CidrBlock, CidrError> {
    let raw = raw.trim();
    log::trace!("parse_cidr({raw})");

    let (address, prefix) = raw.split_once('/').ok_or_else(|| CidrError::MissingPrefix {
        input: raw.to_string(),
    })?;

    let addr = parse_address(address)?;
    let prefix = parse_prefix(prefix)?;

    CidrBlock::new(addr, prefix)
}

fn parse_address(address: &str) -> Result<Ipv4Addr, CidrError> {
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != 4 {
        return Err(CidrError::MalformedAddress {
            address: address.to_string(),
            reason: format!("expected 4 octets, found {}", parts.len()),
        });
    }

    if let Some((i, part)) = parts
        .iter()
        .enumerate()
        .find(|(_, part)| !get_decimal_regex().is_match(part))
    {
        return Err(CidrError::MalformedAddress {
            address: address.to_string(),
            reason: format!("octet {} '{}' is not a decimal number", i + 1, part),
        });
    }

    let mut octets = [0u8; 4];
    for (i, part) in parts.iter().enumerate() {
        // Digits only at this point, so a parse failure means > 255.
        octets[i] = part.parse().map_err(|_| CidrError::OctetRange {
            position: i + 1,
            value: part.to_string(),
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn parse_prefix(prefix: &str) -> Result<u8, CidrError> {
    let out_of_range = || CidrError::PrefixRange {
        value: prefix.to_string(),
    };
    if !get_decimal_regex().is_match(prefix) {
        return Err(out_of_range());
    }
    match prefix.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(out_of_range()),
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cidr(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let block = parse_cidr("91.124.230.205/30").unwrap();
        assert_eq!(block.addr(), Ipv4Addr::new(91, 124, 230, 205));
        assert_eq!(block.prefix(), 30);

        let block = parse_cidr("  0.0.0.0/0\n").unwrap();
        assert_eq!(block.addr(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(block.prefix(), 0);

        assert_eq!(parse_cidr("255.255.255.255/32").unwrap().prefix(), 32);
    }

    #[test]
    fn test_missing_prefix() {
        assert_eq!(
            parse_cidr("1.2.3.4").unwrap_err(),
            CidrError::MissingPrefix {
                input: "1.2.3.4".to_string()
            }
        );
        assert!(matches!(
            parse_cidr("text").unwrap_err(),
            CidrError::MissingPrefix { .. }
        ));
    }

    #[test]
    fn test_malformed_address() {
        for raw in [
            "a.b.c.d/24",
            "1.2.3/24",
            "1.2.3.4.5/24",
            "1.2..4/24",
            "/24",
            "1.2.3.-4/24",
            "1.2.3.+4/24",
            "1.2.3.٣/24",
        ] {
            assert!(
                matches!(
                    parse_cidr(raw).unwrap_err(),
                    CidrError::MalformedAddress { .. }
                ),
                "expected MalformedAddress for {raw}"
            );
        }
    }

    #[test]
    fn test_octet_range_checks_all_four() {
        assert_eq!(
            parse_cidr("300.1.1.1/24").unwrap_err(),
            CidrError::OctetRange {
                position: 1,
                value: "300".to_string()
            }
        );
        assert_eq!(
            parse_cidr("1.1.1.256/24").unwrap_err(),
            CidrError::OctetRange {
                position: 4,
                value: "256".to_string()
            }
        );
        assert!(matches!(
            parse_cidr("1.99999999999999999999.1.1/24").unwrap_err(),
            CidrError::OctetRange { position: 2, .. }
        ));
    }

    #[test]
    fn test_prefix_range() {
        for raw in ["1.2.3.4/33", "1.2.3.4/", "1.2.3.4/x", "1.2.3.4/-1", "1.2.3.4/24/8", "1.2.3.4/999"] {
            assert!(
                matches!(parse_cidr(raw).unwrap_err(), CidrError::PrefixRange { .. }),
                "expected PrefixRange for {raw}"
            );
        }
    }

    #[test]
    fn test_check_order() {
        // Bad octet is reported before bad prefix.
        assert!(matches!(
            parse_cidr("300.1.1.1/40").unwrap_err(),
            CidrError::OctetRange { .. }
        ));
        // Shape is reported before range.
        assert!(matches!(
            parse_cidr("300.x.1.1/24").unwrap_err(),
            CidrError::MalformedAddress { .. }
        ));
    }

    #[test]
    fn test_from_str() {
        let block: CidrBlock = "10.0.0.1/32".parse().unwrap();
        assert_eq!(block.to_string(), "10.0.0.1/32");
        assert!("10.0.0.1".parse::<CidrBlock>().is_err());
    }
}
