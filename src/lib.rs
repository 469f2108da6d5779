pub mod error;
pub mod geometry;
pub mod partition;

/// Number of letters a [`BalanceTracker`](partition::BalanceTracker) counts.
pub const ALPHABET_LEN: usize = 26;
/// Lowest byte a tracker slot maps to.
pub const FIRST_LETTER: u8 = b'a';

pub use error::PartitionError;

pub mod prelude {
    pub use super::geometry::Point3;
    pub use super::partition::{
        is_balanced, minimum_substrings_in_partition, BalanceTracker, PartitionTable,
    };
    pub use super::PartitionError;
}
