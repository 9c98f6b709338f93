//! Domain models for CIDR expansion.
//!
//! - [`Cidr`] - an IPv4 or IPv6 block in `address/prefix` notation
//! - [`address`] helpers - mask and increment arithmetic on raw octets

mod address;
mod cidr;

// Re-export public types
pub use address::{
    apply_mask, fill_host_bits, increment, prefix_mask, IPV4_WIDTH, IPV6_WIDTH,
};
pub use cidr::Cidr;
