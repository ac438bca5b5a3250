//! Buffers.

use alloc::vec::Vec;

use self::error::BufferTooSmallError;

pub(crate) mod error;

/// A trait for possibly extensible buffer types.
pub(crate) trait Buffer<'a> {
    /// Error on extending buffer.
    type ExtendError;

    /// Returns the content in a byte slice.
    #[must_use]
    fn as_bytes(&self) -> &[u8];
    /// Returns the content in a byte slice.
    fn into_bytes(self) -> &'a [u8];
    /// Makes sure that `additional` more bytes can be pushed without failure.
    fn ensure_capacity(&mut self, additional: usize) -> Result<(), Self::ExtendError>;
    /// Appends the given bytes.
    fn push_bytes(&mut self, s: &[u8]) -> Result<(), Self::ExtendError>;
    /// Writes the optional bytes with the prefix.
    fn push_optional_with_prefix(
        &mut self,
        prefix: &[u8],
        body: Option<&[u8]>,
    ) -> Result<(), Self::ExtendError> {
        if let Some(body) = body {
            self.push_bytes(prefix)?;
            self.push_bytes(body)?;
        }
        Ok(())
    }
}

impl<'a> Buffer<'a> for &'a mut Vec<u8> {
    type ExtendError = alloc::collections::TryReserveError;

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }

    #[inline]
    fn into_bytes(self) -> &'a [u8] {
        self.as_slice()
    }

    #[inline]
    fn ensure_capacity(&mut self, additional: usize) -> Result<(), Self::ExtendError> {
        (**self).try_reserve(additional)
    }

    fn push_bytes(&mut self, s: &[u8]) -> Result<(), Self::ExtendError> {
        // Cannot use `(**self).extend_from_slice(s)` alone, as it panics on OOM.
        (**self).try_reserve(s.len())?;
        (**self).extend_from_slice(s);
        Ok(())
    }
}

/// Byte slice as a modifiable buffer.
#[derive(Debug)]
pub(crate) struct ByteSliceBuf<'a> {
    /// Target slice.
    buf: &'a mut [u8],
    /// Content length, not the buffer size.
    len: usize,
}

impl<'a> ByteSliceBuf<'a> {
    /// Creates a byte slice buffer.
    #[inline]
    #[must_use]
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }
}

impl<'a> Buffer<'a> for ByteSliceBuf<'a> {
    type ExtendError = BufferTooSmallError;

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    fn into_bytes(self) -> &'a [u8] {
        &self.buf[..self.len]
    }

    #[inline]
    fn ensure_capacity(&mut self, additional: usize) -> Result<(), Self::ExtendError> {
        if self.buf.len() - self.len < additional {
            return Err(BufferTooSmallError::new());
        }
        Ok(())
    }

    fn push_bytes(&mut self, s: &[u8]) -> Result<(), Self::ExtendError> {
        let s_end = self.len + s.len();
        if self.buf.len() < s_end {
            return Err(BufferTooSmallError::new());
        }

        self.buf[self.len..s_end].copy_from_slice(s);
        self.len = s_end;

        Ok(())
    }

    fn push_optional_with_prefix(
        &mut self,
        prefix: &[u8],
        body: Option<&[u8]>,
    ) -> Result<(), Self::ExtendError> {
        if let Some(body) = body {
            let prefix_end = self.len + prefix.len();
            let body_end = prefix_end + body.len();
            if self.buf.len() < body_end {
                return Err(BufferTooSmallError::new());
            }
            self.buf[self.len..prefix_end].copy_from_slice(prefix);
            self.buf[prefix_end..body_end].copy_from_slice(body);
            self.len = body_end;
        }
        Ok(())
    }
}
