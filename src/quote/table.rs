//! Safe byte tables.

/// Bytes which are never percent-encoded.
const ALWAYS_SAFE_BYTES: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// A set of bytes which are copied without percent-encoding.
///
/// The set always contains the unreserved characters `A-Z`, `a-z`, `0-9`,
/// `-`, `.`, `_`, and `~`. Non-ASCII bytes are never in the set, so that the
/// encoded output is always ASCII.
///
/// # Examples
///
/// ```
/// use urlsplit::quote::SafeSet;
///
/// const PATH: SafeSet = SafeSet::new(b"/");
/// assert!(PATH.contains(b'/'));
/// assert!(PATH.contains(b'~'));
/// assert!(!PATH.contains(b'?'));
/// assert!(!SafeSet::new(b"\xff").contains(0xff));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SafeSet(u128);

impl SafeSet {
    /// The set with only the always-safe bytes.
    pub const ALWAYS_SAFE: Self = Self::from_ascii(ALWAYS_SAFE_BYTES);

    /// Creates a set of the always-safe bytes and the given bytes.
    ///
    /// Non-ASCII bytes in `safe` are ignored.
    #[inline]
    #[must_use]
    pub const fn new(safe: &[u8]) -> Self {
        Self::ALWAYS_SAFE.or(Self::from_ascii(safe))
    }

    /// Creates a table of the given ASCII bytes.
    #[must_use]
    const fn from_ascii(mut bytes: &[u8]) -> Self {
        let mut table = 0_u128;
        while let [cur, rem @ ..] = bytes {
            if *cur < 0x80 {
                table |= 1_u128 << *cur;
            }
            bytes = rem;
        }
        Self(table)
    }

    /// Combines two sets into one.
    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Checks whether the byte is copied as is.
    #[inline]
    #[must_use]
    pub const fn contains(self, b: u8) -> bool {
        b < 0x80 && self.0 & (1_u128 << b) != 0
    }
}

impl Default for SafeSet {
    #[inline]
    fn default() -> Self {
        Self::ALWAYS_SAFE
    }
}
