//! Percent-encoding.
//!
//! Every byte which is not in the [safe set][`SafeSet`] is encoded as `%XX`
//! with upper-case hexadecimal digits. There is no context-sensitive
//! encoding: whether a byte is encoded depends only on the safe set.
//!
//! Output can be written in three ways:
//!
//! * to a newly allocated string ([`quote`], [`quote_plus`],
//!   [`Quoter::quote`]),
//! * to a caller-provided fixed-size buffer ([`quote_to_slice`]), or
//! * in place, over the input itself ([`quote_in_place`],
//!   [`quote_in_place_vec`]).
//!
//! The encoding is not idempotent: `%` is not in the always-safe set, so
//! encoding an encoded string again encodes its `%` bytes.
//!
//! ```
//! # fn main() -> Result<(), urlsplit::Error> {
//! use urlsplit::quote::quote;
//!
//! let once = quote(b"a b", b"")?;
//! assert_eq!(once, "a%20b");
//! assert_eq!(quote(&once, b"")?, "a%2520b");
//! # Ok(())
//! # }
//! ```

use core::fmt::{self, Write as _};

use alloc::string::String;
use alloc::vec::Vec;

use crate::buffer::error::{BufferTooSmallError, Error};
use crate::buffer::{Buffer, ByteSliceBuf};
use crate::log::debug;
use crate::task::ProcessAndWrite;

pub use self::table::SafeSet;

mod table;

/// Upper-case hexadecimal digits.
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Returns the percent-encoded triplet for the byte.
#[inline]
#[must_use]
fn escape(b: u8) -> [u8; 3] {
    [
        b'%',
        HEX_UPPER[usize::from(b >> 4)],
        HEX_UPPER[usize::from(b & 0x0F)],
    ]
}

/// Percent-encoding settings.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), urlsplit::Error> {
/// use urlsplit::quote::Quoter;
///
/// const FORM: Quoter = Quoter::new(b"").space_as_plus(true);
/// assert_eq!(FORM.quote(b"q=a b&c")?, "q%3Da+b%26c");
/// assert_eq!(FORM.encoded_len(b"q=a b&c"), 11);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quoter {
    /// Bytes copied as is.
    safe: SafeSet,
    /// Whether a space is written as `+`.
    space_as_plus: bool,
}

impl Quoter {
    /// Creates settings which keep the always-safe bytes and `safe` as is.
    #[inline]
    #[must_use]
    pub const fn new(safe: &[u8]) -> Self {
        Self::with_safe_set(SafeSet::new(safe))
    }

    /// Creates settings which keep the bytes in `safe` as is.
    #[inline]
    #[must_use]
    pub const fn with_safe_set(safe: SafeSet) -> Self {
        Self {
            safe,
            space_as_plus: false,
        }
    }

    /// Sets whether a space is written as `+`.
    ///
    /// When enabled, `+` itself is encoded unless it is in the safe set, and a
    /// space is written as `+` even if it is in the safe set.
    #[inline]
    #[must_use]
    pub const fn space_as_plus(self, enable: bool) -> Self {
        Self {
            space_as_plus: enable,
            ..self
        }
    }

    /// Returns the length of the encoded byte.
    #[inline]
    #[must_use]
    fn encoded_byte_len(&self, b: u8) -> usize {
        if self.safe.contains(b) || (self.space_as_plus && b == b' ') {
            1
        } else {
            3
        }
    }

    /// Returns the exact length of the encoded output in bytes.
    ///
    /// This is at most three times the input length.
    #[must_use]
    pub fn encoded_len(&self, input: &[u8]) -> usize {
        input.iter().map(|&b| self.encoded_byte_len(b)).sum()
    }

    /// Encodes the input and passes the output in chunks.
    fn write_chunks<E, F>(&self, input: &[u8], mut push: F) -> Result<(), E>
    where
        F: FnMut(&[u8]) -> Result<(), E>,
    {
        let mut rest = input;
        loop {
            let run = rest
                .iter()
                .position(|&b| !self.safe.contains(b) || (self.space_as_plus && b == b' '))
                .unwrap_or(rest.len());
            if run != 0 {
                push(&rest[..run])?;
            }
            let (&b, after) = match rest[run..].split_first() {
                Some(v) => v,
                None => return Ok(()),
            };
            if self.space_as_plus && b == b' ' {
                push(b"+")?;
            } else {
                push(&escape(b))?;
            }
            rest = after;
        }
    }

    /// Encodes the input into the buffer.
    ///
    /// `encoded_len` should be the value returned by [`Self::encoded_len`].
    fn write_to<'b, B: Buffer<'b>>(
        &self,
        input: &[u8],
        encoded_len: usize,
        buf: &mut B,
    ) -> Result<(), B::ExtendError> {
        buf.ensure_capacity(encoded_len)?;
        self.write_chunks(input, |s| buf.push_bytes(s))
    }

    /// Rewrites `buf[..len]` into its encoded form, from the tail to the head.
    ///
    /// The buffer length should be the exact encoded length.
    fn rewrite_backward(&self, buf: &mut [u8], len: usize) {
        let mut read = len;
        let mut write = buf.len();
        // `write - read` is the growth of the not-yet-read head, so writes
        // never overwrite unread bytes.
        while read > 0 {
            read -= 1;
            let b = buf[read];
            if self.space_as_plus && b == b' ' {
                write -= 1;
                buf[write] = b'+';
            } else if self.safe.contains(b) {
                write -= 1;
                buf[write] = b;
            } else {
                write -= 3;
                buf[write..(write + 3)].copy_from_slice(&escape(b));
            }
        }
        debug_assert_eq!(write, 0, "[consistency] encoded length should be exact");
    }

    /// Returns a lazily encoding proxy for the input.
    #[inline]
    #[must_use]
    pub fn encode<'a, T>(&self, input: &'a T) -> PercentEncoded<'a>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        PercentEncoded {
            raw: input.as_ref(),
            quoter: *self,
        }
    }

    /// Encodes the input into a newly allocated string.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::OutOfMemory`][`crate::ErrorKind::OutOfMemory`]
    /// if the allocation failed.
    #[inline]
    pub fn quote<T>(&self, input: &T) -> Result<String, Error>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.encode(input).allocate_and_write()
    }

    /// Encodes the input into the given buffer.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::OutOfSpace`][`crate::ErrorKind::OutOfSpace`]
    /// if the buffer is shorter than the encoded output. The buffer is not
    /// modified in that case.
    #[inline]
    pub fn quote_to_slice<'b, T>(&self, input: &T, buf: &'b mut [u8]) -> Result<&'b str, Error>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.encode(input).write_to_byte_slice(buf)
    }

    /// Encodes `buf[..len]` in place, and returns the encoded length.
    ///
    /// The bytes are rewritten from the tail to the head, so the rest of the
    /// buffer (`buf[len..]`) is used as the room for growth.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::OutOfSpace`][`crate::ErrorKind::OutOfSpace`]
    /// if the encoded output does not fit in `buf`. The buffer is not
    /// modified in that case.
    ///
    /// # Panics
    ///
    /// Panics if `len` is larger than `buf.len()`.
    pub fn quote_in_place(&self, buf: &mut [u8], len: usize) -> Result<usize, Error> {
        assert!(
            len <= buf.len(),
            "[precondition] content length should not exceed the buffer size"
        );
        let encoded_len = self.encoded_len(&buf[..len]);
        if encoded_len > buf.len() {
            debug!(
                "in-place encoding needs {} bytes, but the buffer has {}",
                encoded_len,
                buf.len()
            );
            return Err(BufferTooSmallError::new().into());
        }
        self.rewrite_backward(&mut buf[..encoded_len], len);
        Ok(encoded_len)
    }

    /// Encodes the content of the vector in place, growing it as needed.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::OutOfMemory`][`crate::ErrorKind::OutOfMemory`]
    /// if the allocation failed. The vector is not modified in that case.
    pub fn quote_in_place_vec(&self, buf: &mut Vec<u8>) -> Result<(), Error> {
        let len = buf.len();
        let encoded_len = self.encoded_len(buf);
        buf.try_reserve(encoded_len - len)?;
        buf.resize(encoded_len, 0);
        self.rewrite_backward(buf, len);
        Ok(())
    }
}

impl Default for Quoter {
    #[inline]
    fn default() -> Self {
        Self::with_safe_set(SafeSet::ALWAYS_SAFE)
    }
}

/// A proxy to percent-encode bytes.
///
/// The encoding is done when the proxy is written, through [`fmt::Display`]
/// or [`ProcessAndWrite`].
///
/// # Examples
///
/// ```
/// use urlsplit::quote::{PercentEncoded, Quoter};
///
/// let encoded: PercentEncoded<'_> = Quoter::new(b"/").encode("/caf\u{E9}");
/// assert_eq!(encoded.to_string(), "/caf%C3%A9");
/// assert_eq!(encoded.len(), 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<'a> {
    /// Raw bytes before being encoded.
    raw: &'a [u8],
    /// Encoding settings.
    quoter: Quoter,
}

impl PercentEncoded<'_> {
    /// Returns the length of the encoded output in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.quoter.encoded_len(self.raw)
    }

    /// Returns `true` if the encoded output is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl fmt::Display for PercentEncoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.quoter.write_chunks(self.raw, |s| {
            s.iter().try_for_each(|&b| f.write_char(char::from(b)))
        })
    }
}

impl ProcessAndWrite for &'_ PercentEncoded<'_> {
    type OutputBorrowed = str;
    type OutputOwned = String;

    fn allocate_and_write(self) -> Result<Self::OutputOwned, Error> {
        let mut s = String::new();
        self.try_append_to_owned(&mut s)?;
        Ok(s)
    }

    fn write_to_byte_slice(self, buf: &mut [u8]) -> Result<&Self::OutputBorrowed, Error> {
        let encoded_len = self.len();
        if encoded_len > buf.len() {
            debug!(
                "percent-encoding needs {} bytes, but the buffer has {}",
                encoded_len,
                buf.len()
            );
            return Err(BufferTooSmallError::new().into());
        }
        let mut buf = ByteSliceBuf::new(buf);
        self.quoter.write_to(self.raw, encoded_len, &mut buf)?;
        let s = core::str::from_utf8(buf.into_bytes())
            .expect("[validity] percent-encoded output must always be ASCII");
        Ok(s)
    }

    fn try_append_to_owned(self, buf: &mut String) -> Result<&Self::OutputBorrowed, Error> {
        buf.try_reserve(self.len())?;
        // No reallocation happens after the reservation.
        let result: Result<(), core::convert::Infallible> = self.quoter.write_chunks(self.raw, |s| {
            buf.extend(s.iter().map(|&b| char::from(b)));
            Ok(())
        });
        match result {
            Ok(()) => Ok(buf.as_str()),
            Err(never) => match never {},
        }
    }
}

impl ProcessAndWrite for PercentEncoded<'_> {
    type OutputBorrowed = str;
    type OutputOwned = String;

    #[inline]
    fn allocate_and_write(self) -> Result<Self::OutputOwned, Error> {
        (&self).allocate_and_write()
    }

    #[inline]
    fn write_to_byte_slice(self, buf: &mut [u8]) -> Result<&Self::OutputBorrowed, Error> {
        (&self).write_to_byte_slice(buf)
    }

    #[inline]
    fn try_append_to_owned(self, buf: &mut String) -> Result<&Self::OutputBorrowed, Error> {
        (&self).try_append_to_owned(buf)
    }
}

/// Percent-encodes the input into a newly allocated string.
///
/// Bytes in `safe` (ASCII only) and the always-safe bytes are copied as is.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), urlsplit::Error> {
/// use urlsplit::quote::quote;
///
/// assert_eq!(quote(b"abc def/!", b"/")?, "abc%20def/%21");
/// assert_eq!(quote("/\u{E9}", b"")?, "%2F%C3%A9");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn quote<T>(input: &T, safe: &[u8]) -> Result<String, Error>
where
    T: AsRef<[u8]> + ?Sized,
{
    Quoter::new(safe).quote(input)
}

/// Percent-encodes the input into a newly allocated string, writing a space
/// as `+`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), urlsplit::Error> {
/// use urlsplit::quote::quote_plus;
///
/// assert_eq!(quote_plus(b"a b+c/d", b"")?, "a+b%2Bc%2Fd");
/// assert_eq!(quote_plus(b"a b+c/d", b"+")?, "a+b+c%2Fd");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn quote_plus<T>(input: &T, safe: &[u8]) -> Result<String, Error>
where
    T: AsRef<[u8]> + ?Sized,
{
    Quoter::new(safe).space_as_plus(true).quote(input)
}

/// Percent-encodes the input into the given buffer.
///
/// See [`Quoter::quote_to_slice`].
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), urlsplit::Error> {
/// use urlsplit::quote::quote_to_slice;
///
/// let mut buf = [0_u8; 16];
/// assert_eq!(quote_to_slice(b"a?b", b"", &mut buf)?, "a%3Fb");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn quote_to_slice<'b, T>(input: &T, safe: &[u8], buf: &'b mut [u8]) -> Result<&'b str, Error>
where
    T: AsRef<[u8]> + ?Sized,
{
    Quoter::new(safe).quote_to_slice(input, buf)
}

/// Percent-encodes `buf[..len]` in place, and returns the encoded length.
///
/// See [`Quoter::quote_in_place`].
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), urlsplit::Error> {
/// use urlsplit::quote::quote_in_place;
///
/// let mut buf = [0_u8; 16];
/// buf[..7].copy_from_slice(b"a b/c d");
/// let len = quote_in_place(&mut buf, 7, b"/")?;
/// assert_eq!(&buf[..len], b"a%20b/c%20d");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn quote_in_place(buf: &mut [u8], len: usize, safe: &[u8]) -> Result<usize, Error> {
    Quoter::new(safe).quote_in_place(buf, len)
}

/// Percent-encodes the content of the vector in place, growing it as needed.
///
/// See [`Quoter::quote_in_place_vec`].
#[inline]
pub fn quote_in_place_vec(buf: &mut Vec<u8>, safe: &[u8]) -> Result<(), Error> {
    Quoter::new(safe).quote_in_place_vec(buf)
}

/// Returns the exact length of the percent-encoded input in bytes.
#[inline]
#[must_use]
pub fn encoded_len<T>(input: &T, safe: &[u8]) -> usize
where
    T: AsRef<[u8]> + ?Sized,
{
    Quoter::new(safe).encoded_len(input.as_ref())
}
