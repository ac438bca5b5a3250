//! Netloc (authority) decomposition.
//!
//! No validation is done: the host is not checked to be a valid domain or IP
//! address, and the port is kept as raw bytes.

use crate::parser::str::{find, find_split_hole, rfind_split_hole};

/// Components of a netloc.
///
/// # Examples
///
/// ```
/// use urlsplit::netloc::Netloc;
///
/// let netloc = Netloc::new(b"user:pw@[2001:db8::1]:8080");
/// assert_eq!(netloc.userinfo(), Some(&b"user:pw"[..]));
/// assert_eq!(netloc.username(), Some(&b"user"[..]));
/// assert_eq!(netloc.password(), Some(&b"pw"[..]));
/// assert_eq!(netloc.host(), b"2001:db8::1");
/// assert_eq!(netloc.port(), Some(&b"8080"[..]));
/// assert_eq!(netloc.port_number(), Some(8080));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Netloc<'a> {
    /// User information, before the last `@`.
    userinfo: Option<&'a [u8]>,
    /// Host, without brackets.
    host: &'a [u8],
    /// Port, after the colon following the host.
    port: Option<&'a [u8]>,
}

impl<'a> Netloc<'a> {
    /// Decomposes the given netloc.
    #[must_use]
    pub fn new(netloc: &'a [u8]) -> Self {
        let (userinfo, hostinfo) = match rfind_split_hole(netloc, b'@') {
            Some((userinfo, hostinfo)) => (Some(userinfo), hostinfo),
            None => (None, netloc),
        };

        let (host, port) = match find_split_hole(hostinfo, b'[') {
            // Bytes before `[` are ignored.
            Some((_, bracketed)) => match find_split_hole(bracketed, b']') {
                Some((host, after)) => (host, find_split_hole(after, b':').map(|(_, port)| port)),
                None => (bracketed, None),
            },
            None => match find_split_hole(hostinfo, b':') {
                Some((host, port)) => (host, Some(port)),
                None => (hostinfo, None),
            },
        };

        Self {
            userinfo,
            host,
            port,
        }
    }

    /// Returns the user information, i.e. everything before the last `@`.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a [u8]> {
        self.userinfo
    }

    /// Returns the user name, i.e. user information before the first `:`.
    #[inline]
    #[must_use]
    pub fn username(&self) -> Option<&'a [u8]> {
        self.userinfo
            .map(|userinfo| find_split_hole(userinfo, b':').map_or(userinfo, |(user, _)| user))
    }

    /// Returns the password, i.e. user information after the first `:`.
    #[inline]
    #[must_use]
    pub fn password(&self) -> Option<&'a [u8]> {
        self.userinfo
            .and_then(|userinfo| find_split_hole(userinfo, b':').map(|(_, password)| password))
    }

    /// Returns the host.
    ///
    /// Brackets around an IP literal are removed. The case is preserved.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &'a [u8] {
        self.host
    }

    /// Returns the raw port bytes, if a colon follows the host.
    ///
    /// Note that this can be empty, as in `example.com:`.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<&'a [u8]> {
        self.port
    }

    /// Returns the port number.
    ///
    /// Returns `None` if the port is absent, empty, not decimal digits, or
    /// larger than 65535.
    #[must_use]
    pub fn port_number(&self) -> Option<u16> {
        let port = self.port?;
        if port.is_empty() || find(port, b'+').is_some() {
            return None;
        }
        core::str::from_utf8(port).ok()?.parse().ok()
    }
}
