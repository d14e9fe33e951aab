//! Private address range sets.

use std::net::Ipv4Addr;

/// A `(network, prefix)` pair that an address may fall inside.
pub type PrivateRange = (Ipv4Addr, u8);

/// Default rule: first octet `10`, or first two octets exactly `172.16` or
/// `192.168`. Narrower than RFC 1918, which spans `172.16.0.0/12`.
pub const NARROW_PRIVATE_RANGES: &[PrivateRange] = &[
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 16),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

/// Full RFC 1918 private space.
pub const RFC1918_PRIVATE_RANGES: &[PrivateRange] = &[
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

fn in_range(addr: Ipv4Addr, (network, prefix): PrivateRange) -> bool {
    let mask = u32::MAX.checked_shl(32u32.saturating_sub(u32::from(prefix))).unwrap_or(0);
    u32::from(addr) & mask == u32::from(network) & mask
}

/// True when `addr` lies in any of `ranges`.
pub fn is_private_in(addr: Ipv4Addr, ranges: &[PrivateRange]) -> bool {
    ranges.iter().any(|&range| in_range(addr, range))
}

/// Private check using [`NARROW_PRIVATE_RANGES`].
///
/// # Examples
/// ```
/// use cidr_calc::models::is_private;
/// use std::net::Ipv4Addr;
/// assert!(is_private(Ipv4Addr::new(192, 168, 1, 10)));
/// assert!(!is_private(Ipv4Addr::new(172, 17, 0, 1)));
/// ```
pub fn is_private(addr: Ipv4Addr) -> bool {
    is_private_in(addr, NARROW_PRIVATE_RANGES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_rule() {
        assert!(is_private(Ipv4Addr::new(10, 0, 0, 1)));
        assert!(is_private(Ipv4Addr::new(10, 255, 255, 255)));
        assert!(is_private(Ipv4Addr::new(172, 16, 200, 3)));
        assert!(is_private(Ipv4Addr::new(192, 168, 0, 0)));
        assert!(!is_private(Ipv4Addr::new(91, 124, 230, 205)));
        assert!(!is_private(Ipv4Addr::new(11, 0, 0, 1)));
        assert!(!is_private(Ipv4Addr::new(172, 31, 0, 1)));
        assert!(!is_private(Ipv4Addr::new(192, 169, 0, 1)));
    }

    #[test]
    fn test_rfc1918_rule() {
        let rfc = |a, b, c, d| is_private_in(Ipv4Addr::new(a, b, c, d), RFC1918_PRIVATE_RANGES);
        assert!(rfc(172, 16, 0, 0));
        assert!(rfc(172, 31, 255, 255));
        assert!(!rfc(172, 32, 0, 0));
        assert!(!rfc(172, 15, 255, 255));
        assert!(rfc(10, 9, 8, 7));
    }

    #[test]
    fn test_empty_set() {
        assert!(!is_private_in(Ipv4Addr::new(10, 0, 0, 1), &[]));
    }
}
