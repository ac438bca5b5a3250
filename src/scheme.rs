//! Scheme classification.
//!
//! These are the fixed lists of schemes traditionally known to have some
//! syntax features. Matching is exact and case-sensitive: fold the scheme
//! before calling these functions if you need case-insensitive matching.
//!
//! The empty scheme (i.e. a relative reference) is a member of every list.

/// Schemes which use path parameters (`;params` in the last path segment).
pub const USES_PARAMS: &[&[u8]] = &[
    b"", b"ftp", b"hdl", b"prospero", b"http", b"imap", b"https", b"shttp", b"rtsp", b"rtsps",
    b"rtspu", b"sip", b"sips", b"mms", b"sftp", b"tel",
];

/// Schemes which use a netloc (`//netloc`).
pub const USES_NETLOC: &[&[u8]] = &[
    b"",
    b"ftp",
    b"http",
    b"gopher",
    b"nntp",
    b"telnet",
    b"imap",
    b"wais",
    b"file",
    b"mms",
    b"https",
    b"shttp",
    b"snews",
    b"prospero",
    b"rtsp",
    b"rtsps",
    b"rtspu",
    b"rsync",
    b"svn",
    b"svn+ssh",
    b"sftp",
    b"nfs",
    b"git",
    b"git+ssh",
    b"ws",
    b"wss",
    b"itms-services",
];

/// Schemes which support relative references.
pub const USES_RELATIVE: &[&[u8]] = &[
    b"", b"ftp", b"http", b"gopher", b"nntp", b"imap", b"wais", b"file", b"https", b"shttp",
    b"mms", b"prospero", b"rtsp", b"rtsps", b"rtspu", b"sftp", b"svn", b"svn+ssh", b"ws", b"wss",
];

/// Checks if the scheme is in the given list.
#[inline]
#[must_use]
fn is_listed(list: &[&[u8]], scheme: &[u8]) -> bool {
    list.iter().any(|&listed| listed == scheme)
}

/// Checks if the scheme uses path parameters.
///
/// # Examples
///
/// ```
/// use urlsplit::scheme::uses_params;
///
/// assert!(uses_params(b"http"));
/// assert!(uses_params(b""));
/// assert!(!uses_params(b"HTTP"));
/// assert!(!uses_params(b"git"));
/// ```
#[inline]
#[must_use]
pub fn uses_params(scheme: &[u8]) -> bool {
    is_listed(USES_PARAMS, scheme)
}

/// Checks if the scheme uses a netloc.
///
/// # Examples
///
/// ```
/// use urlsplit::scheme::uses_netloc;
///
/// assert!(uses_netloc(b"git+ssh"));
/// assert!(!uses_netloc(b"mailto"));
/// ```
#[inline]
#[must_use]
pub fn uses_netloc(scheme: &[u8]) -> bool {
    is_listed(USES_NETLOC, scheme)
}

/// Checks if the scheme supports relative references.
///
/// # Examples
///
/// ```
/// use urlsplit::scheme::uses_relative;
///
/// assert!(uses_relative(b"wss"));
/// assert!(!uses_relative(b"tel"));
/// ```
#[inline]
#[must_use]
pub fn uses_relative(scheme: &[u8]) -> bool {
    is_listed(USES_RELATIVE, scheme)
}
