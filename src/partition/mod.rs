pub mod partitioner;
pub mod tracker;

use super::*;

pub use partitioner::{is_balanced, minimum_substrings_in_partition, PartitionTable};
pub use tracker::BalanceTracker;

/// Check that every byte of `s` is a letter a tracker can count.
pub(crate) fn validate(s: &str) -> Result<&[u8], PartitionError> {
    let bytes = s.as_bytes();
    match bytes.iter().position(|b| !b.is_ascii_lowercase()) {
        Some(index) => {
            let byte = bytes[index];
            tracing::debug!("rejecting input: byte {:#04x} at offset {}", byte, index);
            Err(PartitionError::InvalidCharacter { index, byte })
        }
        None => Ok(bytes),
    }
}
