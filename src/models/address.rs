//! Fixed-width address arithmetic on raw octets.
//!
//! Everything here works on `[u8; N]` so the same code serves IPv4 (`N = 4`)
//! and IPv6 (`N = 16`). Byte 0 is the most significant.

/// Bit width of an IPv4 address.
pub const IPV4_WIDTH: u8 = 32;
/// Bit width of an IPv6 address.
pub const IPV6_WIDTH: u8 = 128;

/// Build a mask with the leading `prefix` bits set.
///
/// A prefix longer than the array is clamped to all ones.
///
/// # Examples
/// ```
/// use cidr_expand::models::prefix_mask;
/// assert_eq!(prefix_mask::<4>(20), [255, 255, 240, 0]);
/// ```
pub fn prefix_mask<const N: usize>(prefix: u8) -> [u8; N] {
    let mut mask = [0u8; N];
    let mut remaining = prefix as usize;
    for byte in mask.iter_mut() {
        let bits = remaining.min(8);
        if bits > 0 {
            *byte = 0xFF << (8 - bits);
        }
        remaining -= bits;
    }
    mask
}

/// Byte-wise AND, giving the network address of `addr`.
pub fn apply_mask<const N: usize>(addr: [u8; N], mask: [u8; N]) -> [u8; N] {
    std::array::from_fn(|i| addr[i] & mask[i])
}

/// Set every host bit, giving the broadcast address of `addr`.
pub fn fill_host_bits<const N: usize>(addr: [u8; N], mask: [u8; N]) -> [u8; N] {
    std::array::from_fn(|i| addr[i] | !mask[i])
}

/// Add one to an address, carrying into more significant bytes.
///
/// Returns `None` when every byte wraps, i.e. `addr` was all ones.
pub fn increment<const N: usize>(addr: [u8; N]) -> Option<[u8; N]> {
    let mut next = addr;
    for byte in next.iter_mut().rev() {
        let (value, carried) = byte.overflowing_add(1);
        *byte = value;
        if !carried {
            return Some(next);
        }
    }
    None
}
