//! Hashers shared by the unit and property tests.

use std::hash::{BuildHasher, Hasher};

/// Sends every key to bucket 0, forcing one chain per table.
#[derive(Clone, Default)]
pub(crate) struct ConstBuildHasher;
pub(crate) struct ConstHasher;

impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}

impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}
