//! The derived record for one CIDR block.

use crate::models::{is_private_in, CidrBlock, IpClass, PrivateRange};
use crate::processing::{
    broadcast_address, first_usable, last_usable, network_address, subnet_mask,
    subnet_mask_binary, usable_hosts,
};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Every value derived from a [`CidrBlock`], computed once for display.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CidrReport {
    /// The block as entered.
    pub cidr: CidrBlock,
    pub ip_address: Ipv4Addr,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    /// Dotted-binary mask, e.g. `11111111.11111111.11111111.11111100`.
    pub subnet_mask: String,
    pub subnet_mask_dotted: Ipv4Addr,
    /// None for /31 and /32.
    pub first_usable: Option<Ipv4Addr>,
    /// None for /31 and /32.
    pub last_usable: Option<Ipv4Addr>,
    pub usable_hosts: u64,
    pub ip_class: IpClass,
    pub private: bool,
}

impl CidrReport {
    /// Derive the full report, judging "private" against `private_ranges`.
    pub fn new(block: &CidrBlock, private_ranges: &[PrivateRange]) -> CidrReport {
        let report = CidrReport {
            cidr: *block,
            ip_address: block.addr(),
            network_address: network_address(block),
            broadcast_address: broadcast_address(block),
            subnet_mask: subnet_mask_binary(block.prefix()),
            subnet_mask_dotted: subnet_mask(block.prefix()),
            first_usable: first_usable(block),
            last_usable: last_usable(block),
            usable_hosts: usable_hosts(block.prefix()),
            ip_class: IpClass::of(block.addr()),
            private: is_private_in(block.addr(), private_ranges),
        };
        log::debug!(
            "report {} network={} broadcast={} hosts={}",
            block,
            report.network_address,
            report.broadcast_address,
            report.usable_hosts
        );
        report
    }
}
