//! Utilities.
#![allow(dead_code)]

use core::fmt::{self, Write as _};

/// A fixed-size buffer to write `Display` output without allocation.
pub struct ByteBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> ByteBuf<N> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).expect("only `str`s are written")
    }
}

impl<const N: usize> fmt::Write for ByteBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        let dest = self.buf.get_mut(self.len..end).ok_or(fmt::Error)?;
        dest.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Writes the value into a fixed-size buffer.
pub fn display_to_buf<T: fmt::Display>(v: T) -> ByteBuf<1024> {
    let mut buf = ByteBuf::new();
    write!(buf, "{}", v).expect("test output should fit in the buffer");
    buf
}

/// Asserts that the `Display` output of the value is the expected string.
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        let buf = utils::display_to_buf(&$left);
        assert_eq!(buf.as_str(), $right);
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        let buf = utils::display_to_buf(&$left);
        assert_eq!(buf.as_str(), $right, $($args)*);
    }};
}
