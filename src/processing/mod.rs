//! Address enumeration.
//!
//! - [`walk`] - inclusive walk from network to broadcast address
//! - [`hosts`] - the walk with network and broadcast removed

mod hosts;
mod walk;

// Re-export public functions
pub use hosts::{expand_cidr, hosts, Hosts};
pub use walk::BlockWalk;
