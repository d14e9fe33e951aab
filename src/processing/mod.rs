//! CIDR processing logic.
//!
//! This module contains the validator and the derivations built on it:
//! - [`validate`] - Raw input to [`crate::models::CidrBlock`]
//! - [`derive`] - Network, broadcast and mask
//! - [`hosts`] - Usable host range and count

mod derive;
mod hosts;
mod validate;

// Re-export public functions
pub use derive::{
    broadcast_address, fill_host_bits, network_address, subnet_mask, subnet_mask_binary, HostFill,
};
pub use hosts::{first_usable, last_usable, usable_hosts};
pub use validate::parse_cidr;
