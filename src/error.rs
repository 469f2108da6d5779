/// Errors that can occur while partitioning a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// The input contains a byte that is not a lowercase ASCII letter.
    #[error("invalid character {byte:#04x} at byte {index}, expected a lowercase ASCII letter")]
    InvalidCharacter { index: usize, byte: u8 },

    /// No sequence of balanced pieces covers the whole input.
    #[error("no balanced partition covers the {len}-byte input")]
    Unpartitionable { len: usize },
}
