//! Buffer error.

use core::fmt;

use alloc::collections::TryReserveError;

/// An error on writing output.
///
/// Splitting and parsing never fail; only the operations writing output
/// (percent-encoding and recomposition) return this error.
#[derive(Debug, Clone)]
pub struct Error {
    /// Inner error representation.
    // Use indirect private type to make `BufferTooSmallError` private.
    // Note, however, the value of `BufferTooSmallError` can be exposed as
    // `&std::error::Error` through `std::error::Error::source()`.
    repr: ErrorRepr,
}

impl Error {
    /// Returns the kind of the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlsplit::quote::quote_to_slice;
    /// use urlsplit::ErrorKind;
    ///
    /// let mut buf = [0_u8; 4];
    /// let err = quote_to_slice(b"a b", b"", &mut buf).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::OutOfSpace);
    /// ```
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::Allocate(_) => ErrorKind::OutOfMemory,
            ErrorRepr::BufferFull(_) => ErrorKind::OutOfSpace,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            ErrorRepr::Allocate(_) => f.write_str("memory allocation failed"),
            ErrorRepr::BufferFull(_) => f.write_str("buffer full"),
        }
    }
}

impl From<BufferTooSmallError> for Error {
    #[inline]
    fn from(e: BufferTooSmallError) -> Self {
        Self {
            repr: ErrorRepr::BufferFull(e),
        }
    }
}

impl From<TryReserveError> for Error {
    #[inline]
    fn from(e: TryReserveError) -> Self {
        Self {
            repr: ErrorRepr::Allocate(e),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.repr {
            ErrorRepr::Allocate(e) => Some(e),
            ErrorRepr::BufferFull(e) => Some(e),
        }
    }
}

/// Kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Memory allocation for the output failed.
    OutOfMemory,
    /// The caller-provided output buffer is too small.
    OutOfSpace,
}

/// Internal representation of `Error`.
#[derive(Debug, Clone)]
enum ErrorRepr {
    /// Memory allocation error for growable buffers.
    Allocate(TryReserveError),
    /// Capacity error for fixed-size buffer.
    BufferFull(BufferTooSmallError),
}

/// An error indicating that the buffer is too small.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BufferTooSmallError(());

impl BufferTooSmallError {
    /// Creates a new error.
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self(())
    }
}

impl fmt::Display for BufferTooSmallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("destination buffer does not have enough capacity")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for BufferTooSmallError {}
