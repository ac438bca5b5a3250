//! Splitting a URL into five components.

use crate::components::{SchemeSpan, Span, SplitSpans};
use crate::log::trace;
use crate::parser::char::{is_c0_control_or_space, is_scheme};
use crate::parser::str::{find, find3};

/// Trims C0 control and space bytes from both ends of `url[start..end]`.
///
/// Returns the trimmed range.
#[must_use]
fn trim_c0_control_or_space(url: &[u8], mut start: usize, mut end: usize) -> (usize, usize) {
    while start < end && is_c0_control_or_space(url[start]) {
        start += 1;
    }
    while start < end && is_c0_control_or_space(url[end - 1]) {
        end -= 1;
    }
    (start, end)
}

/// Eats a scheme and a following colon if available.
///
/// Returns the scheme and the position right after the colon.
#[must_use]
fn scheme_colon_opt(url: &[u8], start: usize, end: usize) -> Option<(Span, usize)> {
    let colon = start + find(&url[start..end], b':')?;
    let (scheme_start, scheme_end) = trim_c0_control_or_space(url, start, colon);
    if !is_scheme(&url[scheme_start..scheme_end]) {
        trace!(
            "not a scheme: {:?}",
            alloc::string::String::from_utf8_lossy(&url[start..colon])
        );
        return None;
    }
    Some((Span::new(scheme_start, scheme_end), colon + 1))
}

/// Eats a double slash and the following netloc if available.
///
/// Returns the netloc and the position right after it.
#[must_use]
fn slash_slash_netloc_opt(url: &[u8], start: usize, end: usize) -> Option<(Span, usize)> {
    if !url[start..end].starts_with(b"//") {
        return None;
    }
    let netloc_start = start + 2;
    // The netloc ends at `#` even if fragments are not allowed.
    let netloc_end = match find3(&url[netloc_start..end], b'/', b'?', b'#') {
        Some(pos) => netloc_start + pos,
        None => end,
    };
    Some((Span::new(netloc_start, netloc_end), netloc_end))
}

/// Eats a delimiter and everything after it if available.
///
/// Returns the component after the delimiter, and the position of the delimiter.
#[must_use]
fn delimited_suffix_opt(url: &[u8], start: usize, end: usize, delim: u8) -> Option<(Span, usize)> {
    let pos = start + find(&url[start..end], delim)?;
    Some((Span::new(pos + 1, end), pos))
}

/// Splits the given URL into components.
///
/// Embedded control bytes should already be removed if necessary.
#[must_use]
pub(crate) fn decompose(url: &[u8], has_default_scheme: bool, allow_fragments: bool) -> SplitSpans {
    let mut start = super::leading_c0_control_or_space(url);
    let mut end = url.len();

    let scheme = match scheme_colon_opt(url, start, end) {
        Some((scheme, rest)) => {
            start = rest;
            Some(SchemeSpan::Explicit(scheme))
        }
        None if has_default_scheme => {
            trace!("no explicit scheme, using the default scheme");
            Some(SchemeSpan::Default)
        }
        None => None,
    };

    let netloc = slash_slash_netloc_opt(url, start, end).map(|(netloc, rest)| {
        start = rest;
        netloc
    });

    let fragment = if allow_fragments {
        delimited_suffix_opt(url, start, end, b'#').map(|(fragment, hash)| {
            end = hash;
            fragment
        })
    } else {
        None
    };

    let query = delimited_suffix_opt(url, start, end, b'?').map(|(query, question)| {
        end = question;
        query
    });

    SplitSpans {
        scheme,
        netloc,
        path: Span::new(start, end),
        query,
        fragment,
    }
}
