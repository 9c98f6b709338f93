//! Inclusive walk over every address of a block.

use crate::models::{apply_mask, increment, prefix_mask};

/// Iterates from the network address up to and including the broadcast
/// address of a block of `N`-byte addresses.
///
/// Each step emits the current address, increments it, and stops once the
/// next address no longer carries the block's fixed bits (or the increment
/// overflowed past the all-ones address).
#[derive(Debug, Clone)]
pub struct BlockWalk<const N: usize> {
    network: [u8; N],
    mask: [u8; N],
    current: Option<[u8; N]>,
}

impl<const N: usize> BlockWalk<N> {
    pub fn new(base: [u8; N], prefix: u8) -> Self {
        let mask = prefix_mask(prefix);
        let network = apply_mask(base, mask);
        BlockWalk {
            network,
            mask,
            current: Some(network),
        }
    }

    fn in_block(&self, addr: [u8; N]) -> bool {
        apply_mask(addr, self.mask) == self.network
    }
}

impl<const N: usize> Iterator for BlockWalk<N> {
    type Item = [u8; N];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.current = increment(current).filter(|next| self.in_block(*next));
        Some(current)
    }
}
