//! Network, broadcast and mask derivation.
//!
//! All three come from [`fill_host_bits`], so the mask and the two range
//! ends always agree on where the prefix stops.

use crate::models::{to_binary, CidrBlock};
use std::net::Ipv4Addr;

/// Value written into the host part of an address.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HostFill {
    Zeros,
    Ones,
}

/// Keep the first `prefix` bits of `addr` and force the rest to `fill`.
///
/// `prefix` above 32 is treated as 32.
///
/// # Examples
/// ```
/// use cidr_calc::processing::{fill_host_bits, HostFill};
/// use std::net::Ipv4Addr;
/// let ip = Ipv4Addr::new(192, 168, 1, 42);
/// assert_eq!(fill_host_bits(ip, 24, HostFill::Zeros), Ipv4Addr::new(192, 168, 1, 0));
/// assert_eq!(fill_host_bits(ip, 24, HostFill::Ones), Ipv4Addr::new(192, 168, 1, 255));
/// ```
pub fn fill_host_bits(addr: Ipv4Addr, prefix: u8, fill: HostFill) -> Ipv4Addr {
    let host_mask = u32::MAX.checked_shr(u32::from(prefix)).unwrap_or(0);
    let bits = u32::from(addr);
    let filled = match fill {
        HostFill::Zeros => bits & !host_mask,
        HostFill::Ones => bits | host_mask,
    };
    Ipv4Addr::from(filled)
}

/// Subnet mask for a prefix length as a dotted-quad address.
pub fn subnet_mask(prefix: u8) -> Ipv4Addr {
    fill_host_bits(Ipv4Addr::BROADCAST, prefix, HostFill::Zeros)
}

/// Subnet mask rendered as four 8-bit groups.
///
/// # Examples
/// ```
/// use cidr_calc::processing::subnet_mask_binary;
/// assert_eq!(subnet_mask_binary(30), "11111111.11111111.11111111.11111100");
/// ```
pub fn subnet_mask_binary(prefix: u8) -> String {
    to_binary(subnet_mask(prefix))
}

/// Address with every host bit cleared.
pub fn network_address(block: &CidrBlock) -> Ipv4Addr {
    fill_host_bits(block.addr(), block.prefix(), HostFill::Zeros)
}

/// Address with every host bit set.
pub fn broadcast_address(block: &CidrBlock) -> Ipv4Addr {
    fill_host_bits(block.addr(), block.prefix(), HostFill::Ones)
}
