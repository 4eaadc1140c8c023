use core::fmt;

/// Errors from the checked buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The destination holds fewer elements than the source.
    DestinationTooShort {
        /// Number of elements to copy.
        needed: usize,
        /// Number of elements the destination holds.
        available: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::DestinationTooShort { needed, available } => write!(
                f,
                "destination holds {available} elements but {needed} are needed"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}
