//! chained-hashtable: a single-threaded hash table from `i64` keys to
//! `String` values, resolving collisions by separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Storage: a `Vec` of buckets; each bucket is a chain (`Vec<(i64,
//!   String)>`) holding every pair whose key hashes to that index under the
//!   current capacity.
//! - Indexing: `hash(key) % capacity`, where `hash` comes from the table's
//!   `BuildHasher` (an unseeded SipHash builder unless one is supplied).
//! - Growth: after every `put`, if `len / capacity >= load_factor` the
//!   bucket array is multiplied by `GROWTH_COEFFICIENT` and every pair is
//!   rehashed individually into the new array.
//!
//! Constraints
//! - Keys are unique within the table; `put` on an existing key overwrites
//!   its value in place and does not change `len`.
//! - `len` counts distinct keys: incremented on append, decremented on a
//!   successful `remove`.
//! - Capacity is at least 1 and the load factor lies in `(0.0, 1.0]`;
//!   both are checked at construction, the only fallible operation.
//! - Growth never loses pairs. Old chains that meet in the same new bucket
//!   are merged, not overwritten.
//!
//! Notes and non-goals
//! - No shrinking on removal; `clear()` keeps the bucket count.
//! - No ordering guarantees for `iter`, `keys` or `values`.
//! - Not thread-safe; mutation requires `&mut self`, so a resize is never
//!   observable half-done.

mod config;
mod error;
pub mod hash_table;
mod hash_table_proptest;
#[cfg(test)]
mod test_util;

// Public surface
pub use config::{TableConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, GROWTH_COEFFICIENT};
pub use error::TableError;
pub use hash_table::{DefaultKeyHasher, HashTable, Iter};
