//! Helpers for bytes.

/// Checks if the given byte is a C0 control or a space.
///
/// These bytes are stripped from the head of a URL, and around a scheme
/// candidate.
#[inline]
#[must_use]
pub(crate) const fn is_c0_control_or_space(b: u8) -> bool {
    b <= 0x20
}

/// Checks if the given byte is removed from anywhere in a URL before splitting.
#[inline]
#[must_use]
pub(crate) const fn is_embedded_control(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r')
}

/// Checks if the given byte can appear in a scheme.
///
/// Note that the first byte of a scheme should be an ASCII letter.
#[inline]
#[must_use]
pub(crate) const fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Checks if the given bytes form a valid scheme.
#[must_use]
pub(crate) fn is_scheme(s: &[u8]) -> bool {
    match s.split_first() {
        Some((first, rest)) => first.is_ascii_alphabetic() && rest.iter().all(|&b| is_scheme_char(b)),
        None => false,
    }
}
