//! API for tasks writing output.
//!
//! Percent-encoding and recomposition produce new byte strings. Both can be
//! written to a newly allocated buffer, to a caller-provided fixed-size
//! buffer, or appended to an existing growable buffer.

use crate::buffer::error::Error;

/// Processes the data and write it somewhere.
pub trait ProcessAndWrite: Sized {
    /// Borrowed output types.
    type OutputBorrowed: ?Sized;
    /// Owned output types.
    type OutputOwned;

    /// Processes the data, and writes it to the newly allocated buffer.
    ///
    /// # Failures
    ///
    /// This fails if failed to allocate memory.
    fn allocate_and_write(self) -> Result<Self::OutputOwned, Error>;

    /// Processes the data, and writes it to the given byte slice.
    ///
    /// # Failures
    ///
    /// This fails if the buffer is not large enough.
    /// The buffer content is unspecified on failure.
    fn write_to_byte_slice(self, buf: &mut [u8]) -> Result<&Self::OutputBorrowed, Error>;

    /// Processes the data, and appends it to the given owned buffer.
    ///
    /// Returns the whole content of the buffer.
    ///
    /// # Panics
    ///
    /// This panics if failed to allocate memory.
    /// To avoid panic on allocation failure, use [`try_append_to_owned`].
    ///
    /// [`try_append_to_owned`]: `Self::try_append_to_owned`
    fn append_to_owned(self, buf: &mut Self::OutputOwned) -> &Self::OutputBorrowed {
        match self.try_append_to_owned(buf) {
            Ok(v) => v,
            Err(e) => panic!("buffer error: {}", e),
        }
    }

    /// Processes the data, and appends it to the given owned buffer.
    ///
    /// Returns the whole content of the buffer.
    ///
    /// # Failures
    ///
    /// This fails if failed to allocate memory.
    /// The buffer content is unchanged on failure.
    fn try_append_to_owned(self, buf: &mut Self::OutputOwned)
        -> Result<&Self::OutputBorrowed, Error>;
}
