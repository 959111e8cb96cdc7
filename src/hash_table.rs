//! HashTable: separate chaining over a growable bucket array.

use crate::config::{TableConfig, GROWTH_COEFFICIENT};
use crate::error::TableError;
use core::fmt;
use core::hash::{BuildHasher, BuildHasherDefault};
use hashbrown::HashSet;
use log::debug;
use std::collections::hash_map::DefaultHasher;

/// Unseeded SipHash builder: the same key always lands in the same bucket
/// for a given capacity.
pub type DefaultKeyHasher = BuildHasherDefault<DefaultHasher>;

type Bucket = Vec<(i64, String)>;

pub struct HashTable<S = DefaultKeyHasher> {
    hasher: S,
    buckets: Vec<Bucket>,
    len: usize, // distinct keys across all buckets
    load_factor: f64,
}

impl HashTable {
    pub fn new(capacity: usize, load_factor: f64) -> Result<Self, TableError> {
        Self::from_config(TableConfig::new(capacity, load_factor))
    }

    pub fn from_config(config: TableConfig) -> Result<Self, TableError> {
        Self::with_hasher(config, DefaultKeyHasher::default())
    }
}

impl Default for HashTable {
    fn default() -> Self {
        // The default configuration is valid, so no check is needed.
        Self::from_valid_config(TableConfig::default(), DefaultKeyHasher::default())
    }
}

fn empty_buckets(capacity: usize) -> Vec<Bucket> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Bucket::new);
    buckets
}

/// Iterator over every `(key, value)` pair, bucket by bucket.
pub struct Iter<'a> {
    buckets: core::slice::Iter<'a, Bucket>,
    chain: core::slice::Iter<'a, (i64, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i64, &'a str);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((k, v)) = self.chain.next() {
                return Some((*k, v.as_str()));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }
}

impl<S> HashTable<S>
where
    S: BuildHasher,
{
    pub fn with_hasher(config: TableConfig, hasher: S) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, hasher))
    }

    fn from_valid_config(config: TableConfig, hasher: S) -> Self {
        debug!(
            "creating hash table: capacity={}, load_factor={}",
            config.capacity, config.load_factor
        );
        Self {
            hasher,
            buckets: empty_buckets(config.capacity),
            len: 0,
            load_factor: config.load_factor,
        }
    }

    /// Bucket index of `key` for a table of `capacity` buckets.
    fn index_for(&self, key: i64, capacity: usize) -> usize {
        (self.hasher.hash_one(key) % capacity as u64) as usize
    }

    fn bucket_of(&self, key: i64) -> usize {
        self.index_for(key, self.buckets.len())
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    pub fn search(&self, key: i64) -> Option<&str> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.search(key).is_some()
    }

    /// Insert `key -> value`, or overwrite the value of an existing key.
    /// Returns the previous value on update.
    ///
    /// Growth is checked after every call: once `len / capacity` reaches the
    /// load factor the bucket array is multiplied by `GROWTH_COEFFICIENT`
    /// and every pair is rehashed into it.
    pub fn put(&mut self, key: i64, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        let idx = self.bucket_of(key);
        let bucket = &mut self.buckets[idx];
        let previous = match bucket.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(core::mem::replace(v, value)),
            None => {
                bucket.push((key, value));
                self.len += 1;
                None
            }
        };

        if self.len as f64 / self.buckets.len() as f64 >= self.load_factor {
            self.grow();
        }
        previous
    }

    pub fn remove(&mut self, key: i64) -> Option<String> {
        let idx = self.bucket_of(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|(k, _)| *k == key)?;
        let (_, value) = bucket.swap_remove(pos);
        self.len -= 1;
        Some(value)
    }

    /// Drop every pair; the bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    pub fn keys(&self) -> HashSet<i64> {
        let mut keys = HashSet::with_capacity(self.len);
        keys.extend(self.iter().map(|(k, _)| k));
        keys
    }

    pub fn values(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(self.len);
        values.extend(self.iter().map(|(_, v)| v.to_owned()));
        values
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
        }
    }

    // Each pair is placed by its own hash under the new capacity; chains are
    // appended to, never overwritten.
    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * GROWTH_COEFFICIENT;
        let mut rehashed = empty_buckets(new_capacity);
        for (key, value) in core::mem::take(&mut self.buckets).into_iter().flatten() {
            rehashed[self.index_for(key, new_capacity)].push((key, value));
        }
        self.buckets = rehashed;
        debug!(
            "hash table grew: capacity {} -> {}, entries={}",
            old_capacity, new_capacity, self.len
        );
    }
}

impl<'a, S> IntoIterator for &'a HashTable<S>
where
    S: BuildHasher,
{
    type Item = (i64, &'a str);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> fmt::Debug for HashTable<S>
where
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
