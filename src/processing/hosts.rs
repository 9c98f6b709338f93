//! Host enumeration: the inclusive block walk with both edges removed.

use super::walk::BlockWalk;
use crate::error::ParseError;
use crate::models::Cidr;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone)]
enum FamilyWalk {
    V4(BlockWalk<4>),
    V6(BlockWalk<16>),
}

impl Iterator for FamilyWalk {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        match self {
            FamilyWalk::V4(walk) => walk.next().map(|o| IpAddr::V4(Ipv4Addr::from(o))),
            FamilyWalk::V6(walk) => walk.next().map(|o| IpAddr::V6(Ipv6Addr::from(o))),
        }
    }
}

/// Lazy, ascending iterator over the host addresses of a [`Cidr`].
///
/// The network address is dropped up front; the broadcast address is dropped
/// by holding one address back and ending when the walk has nothing after it.
/// Blocks of one or two addresses (`/31`, `/32`, `/127`, `/128`) yield nothing.
#[derive(Debug, Clone)]
pub struct Hosts {
    walk: FamilyWalk,
    pending: Option<IpAddr>,
}

impl Hosts {
    pub fn new(cidr: &Cidr) -> Hosts {
        let mut walk = match cidr.addr {
            IpAddr::V4(v4) => FamilyWalk::V4(BlockWalk::new(v4.octets(), cidr.prefix)),
            IpAddr::V6(v6) => FamilyWalk::V6(BlockWalk::new(v6.octets(), cidr.prefix)),
        };
        // network address
        walk.next();
        let pending = walk.next();
        Hosts { walk, pending }
    }
}

impl Iterator for Hosts {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        let candidate = self.pending.take()?;
        // Whatever the walk ends on is the broadcast address.
        self.pending = Some(self.walk.next()?);
        Some(candidate)
    }
}

/// Host addresses of an already parsed block.
pub fn hosts(cidr: &Cidr) -> Hosts {
    Hosts::new(cidr)
}

/// Expand a CIDR string into the ascending list of its host addresses.
///
/// # Examples
/// ```
/// use cidr_expand::expand_cidr;
/// assert_eq!(expand_cidr("10.0.0.0/30").unwrap(), vec!["10.0.0.1", "10.0.0.2"]);
/// ```
pub fn expand_cidr(cidr: &str) -> Result<Vec<String>, ParseError> {
    let cidr = Cidr::new(cidr)?;
    log::debug!(
        "expand_cidr({cidr}) network={} broadcast={} hosts={}",
        cidr.network(),
        cidr.broadcast(),
        cidr.host_count()
    );
    Ok(hosts(&cidr).map(|ip| ip.to_string()).collect())
}
