//! Construction errors.

use thiserror::Error;

/// Raised when a table is built from invalid parameters. No other
/// operation on a table can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TableError {
    #[error("hash table capacity must be greater than zero, got {capacity}")]
    InvalidCapacity { capacity: usize },
    #[error("hash table load factor must be in range (0.0, 1.0], got {load_factor}")]
    InvalidLoadFactor { load_factor: f64 },
}
