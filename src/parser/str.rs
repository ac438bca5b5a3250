//! Byte string search helpers.
//!
//! With the `memchr` feature enabled, searches are delegated to the `memchr`
//! crate.

/// Returns the position of the first `needle` in the given bytes.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    memchr::memchr(needle, haystack)
}

/// Returns the position of the first `needle` in the given bytes.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

/// Returns the position of the last `needle` in the given bytes.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    memchr::memrchr(needle, haystack)
}

/// Returns the position of the last `needle` in the given bytes.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().rposition(|&b| b == needle)
}

/// Returns the position of the first byte which is any of the three needles.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
pub(crate) fn find3(haystack: &[u8], n1: u8, n2: u8, n3: u8) -> Option<usize> {
    memchr::memchr3(n1, n2, n3, haystack)
}

/// Returns the position of the first byte which is any of the three needles.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
pub(crate) fn find3(haystack: &[u8], n1: u8, n2: u8, n3: u8) -> Option<usize> {
    haystack
        .iter()
        .position(|&b| b == n1 || b == n2 || b == n3)
}

/// Splits the bytes at the first `needle`, and returns the bytes before and
/// after it (the needle itself is excluded).
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &[u8], needle: u8) -> Option<(&[u8], &[u8])> {
    find(s, needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the bytes at the last `needle`, and returns the bytes before and
/// after it (the needle itself is excluded).
#[inline]
#[must_use]
pub(crate) fn rfind_split_hole(s: &[u8], needle: u8) -> Option<(&[u8], &[u8])> {
    rfind(s, needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}
