//! Usable host range and count.

use super::derive::{broadcast_address, network_address};
use crate::models::{CidrBlock, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Number of addresses a host can be assigned: `2^(32 - prefix) - 2`,
/// never below zero. /31 and /32 give 0.
///
/// # Examples
/// ```
/// use cidr_calc::processing::usable_hosts;
/// assert_eq!(usable_hosts(24), 254);
/// assert_eq!(usable_hosts(31), 0);
/// ```
pub fn usable_hosts(prefix: u8) -> u64 {
    let host_bits = u32::from(MAX_LENGTH.saturating_sub(prefix));
    (1u64 << host_bits).saturating_sub(2)
}

/// Network address plus one, or `None` when the block has no usable hosts.
///
/// The increment runs on the whole 32-bit value, never on a single octet.
pub fn first_usable(block: &CidrBlock) -> Option<Ipv4Addr> {
    if usable_hosts(block.prefix()) == 0 {
        return None;
    }
    u32::from(network_address(block))
        .checked_add(1)
        .map(Ipv4Addr::from)
}

/// Broadcast address minus one, or `None` when the block has no usable hosts.
pub fn last_usable(block: &CidrBlock) -> Option<Ipv4Addr> {
    if usable_hosts(block.prefix()) == 0 {
        return None;
    }
    u32::from(broadcast_address(block))
        .checked_sub(1)
        .map(Ipv4Addr::from)
}
