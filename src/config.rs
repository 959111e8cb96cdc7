//! Construction parameters for `HashTable`.

use crate::error::TableError;

/// Bucket count used by `TableConfig::default()`.
pub const DEFAULT_CAPACITY: usize = 16;
/// Load factor used by `TableConfig::default()`.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
/// Multiplier applied to the bucket count when the load factor is reached.
pub const GROWTH_COEFFICIENT: usize = 2;

/// Initial capacity and growth threshold of a table.
///
/// Both values are checked by [`TableConfig::validate`] before any table is
/// allocated; the load factor stays fixed for the table's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub capacity: usize,
    pub load_factor: f64,
}

impl TableConfig {
    pub fn new(capacity: usize, load_factor: f64) -> Self {
        Self {
            capacity,
            load_factor,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks `capacity >= 1` and `0.0 < load_factor <= 1.0`. NaN fails the
    /// range check.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.capacity == 0 {
            return Err(TableError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(TableError::InvalidLoadFactor {
                load_factor: self.load_factor,
            });
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the default configuration is valid.
    #[test]
    fn default_is_valid() {
        let c = TableConfig::default();
        assert_eq!(c.capacity, DEFAULT_CAPACITY);
        assert_eq!(c.load_factor, DEFAULT_LOAD_FACTOR);
        assert!(c.validate().is_ok());
    }

    /// Invariant: zero capacity is rejected with `InvalidCapacity`.
    #[test]
    fn zero_capacity_rejected() {
        let c = TableConfig::default().with_capacity(0);
        assert_eq!(
            c.validate(),
            Err(TableError::InvalidCapacity { capacity: 0 })
        );
    }

    /// Invariant: load factors outside (0.0, 1.0] are rejected; both bounds
    /// behave as documented.
    #[test]
    fn load_factor_bounds() {
        for lf in [0.0, -0.5, 1.000_001, 2.0, f64::INFINITY, f64::NEG_INFINITY] {
            match TableConfig::new(4, lf).validate() {
                Err(TableError::InvalidLoadFactor { load_factor }) => assert_eq!(load_factor, lf),
                other => panic!("unexpected result for {lf}: {:?}", other),
            }
        }
        assert!(matches!(
            TableConfig::new(4, f64::NAN).validate(),
            Err(TableError::InvalidLoadFactor { .. })
        ));
        assert!(TableConfig::new(4, 1.0).validate().is_ok());
        assert!(TableConfig::new(4, f64::MIN_POSITIVE).validate().is_ok());
    }

    /// Invariant: capacity is checked before the load factor.
    #[test]
    fn capacity_checked_first() {
        assert!(matches!(
            TableConfig::new(0, 0.0).validate(),
            Err(TableError::InvalidCapacity { .. })
        ));
    }
}
