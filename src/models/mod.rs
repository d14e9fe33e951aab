//! Domain models for the CIDR calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`CidrBlock`] - IPv4 address with prefix length
//! - [`IpClass`] - classful address category
//! - private range sets and dotted-binary conversion helpers

mod binary;
mod cidr;
mod class;
mod private;

// Re-export public types
pub use binary::{from_binary, to_binary, to_dotted_quad};
pub use cidr::{CidrBlock, MAX_LENGTH};
pub use class::IpClass;
pub use private::{
    is_private, is_private_in, PrivateRange, NARROW_PRIVATE_RANGES, RFC1918_PRIVATE_RANGES,
};
