//! CIDR block parsing and block-level calculations.
//!
//! Provides [`Cidr`] for IPv4 and IPv6 blocks in `address/prefix` notation.

use super::address::{apply_mask, fill_host_bits, prefix_mask, IPV4_WIDTH, IPV6_WIDTH};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// A CIDR block: an address plus the number of fixed leading bits.
///
/// The address is kept as written; use [`Cidr::network`] for the masked form.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as given in the input.
    pub addr: IpAddr,
    /// The prefix length (0-32 for IPv4, 0-128 for IPv6).
    pub prefix: u8,
}

impl Cidr {
    /// Create a new [`Cidr`] from a string such as `"10.0.0.0/24"`.
    ///
    /// Surrounding whitespace is ignored. The prefix must be plain decimal
    /// digits; leading zeros are allowed (`/08` is `/8`).
    pub fn new(addr_cidr: &str) -> Result<Cidr, ParseError> {
        let input = addr_cidr.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        let (addr_str, prefix_str) = input
            .split_once('/')
            .ok_or_else(|| ParseError::MissingPrefix(input.to_string()))?;

        let addr: IpAddr = addr_str
            .parse()
            .map_err(|_| ParseError::InvalidAddress {
                input: input.to_string(),
                addr: addr_str.to_string(),
            })?;
        let prefix = parse_prefix(prefix_str).ok_or_else(|| ParseError::InvalidPrefix {
            input: input.to_string(),
            prefix: prefix_str.to_string(),
        })?;

        let width = width_of(&addr);
        if prefix > u32::from(width) {
            return Err(ParseError::PrefixOutOfRange {
                input: input.to_string(),
                prefix,
                width,
            });
        }

        Ok(Cidr {
            addr,
            prefix: prefix as u8,
        })
    }

    /// Address width in bits, 32 or 128.
    pub fn width(&self) -> u8 {
        width_of(&self.addr)
    }

    /// The lowest (network) address of the block.
    pub fn network(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(v4) => {
                let octets = apply_mask(v4.octets(), prefix_mask(self.prefix));
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            IpAddr::V6(v6) => {
                let octets = apply_mask(v6.octets(), prefix_mask(self.prefix));
                IpAddr::V6(Ipv6Addr::from(octets))
            }
        }
    }

    /// The highest (broadcast) address of the block.
    pub fn broadcast(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(v4) => {
                let octets = fill_host_bits(v4.octets(), prefix_mask(self.prefix));
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            IpAddr::V6(v6) => {
                let octets = fill_host_bits(v6.octets(), prefix_mask(self.prefix));
                IpAddr::V6(Ipv6Addr::from(octets))
            }
        }
    }

    /// Check if an address is inside this block. Other families never are.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.addr, ip) {
            (IpAddr::V4(_), IpAddr::V4(_)) | (IpAddr::V6(_), IpAddr::V6(_)) => {
                Cidr {
                    addr: ip,
                    prefix: self.prefix,
                }
                .network()
                    == self.network()
            }
            _ => false,
        }
    }

    /// Number of addresses in the block, network and broadcast included.
    ///
    /// Saturates at `u128::MAX` for `::/0`.
    pub fn address_count(&self) -> u128 {
        let host_bits = u32::from(self.width() - self.prefix);
        1u128.checked_shl(host_bits).unwrap_or(u128::MAX)
    }

    /// Number of host addresses, excluding network and broadcast.
    ///
    /// Exact for every block, `::/0` included.
    pub fn host_count(&self) -> u128 {
        let host_bits = u32::from(self.width() - self.prefix);
        if host_bits == 0 {
            return 0;
        }
        // highest host offset, i.e. address_count - 1
        let last_offset = u128::MAX >> (128 - host_bits);
        last_offset.saturating_sub(1)
    }
}

fn width_of(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => IPV4_WIDTH,
        IpAddr::V6(_) => IPV6_WIDTH,
    }
}

fn parse_prefix(prefix: &str) -> Option<u32> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

impl FromStr for Cidr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}
