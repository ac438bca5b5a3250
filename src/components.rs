//! Component references.
//!
//! These are plain byte ranges, intended for binding layers which convert
//! components into their own string types. [`Split`][`crate::Split`] and
//! [`Parse`][`crate::Parse`] resolve them into byte slices.

use core::ops::Range;

/// A reference to a component, as a byte range into the URL buffer.
///
/// Spans never own memory. The buffer they refer to is the one returned by
/// [`Split::as_bytes`][`crate::Split::as_bytes`], which is the input itself
/// unless embedded control bytes had to be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[inline]
    #[must_use]
    pub(crate) const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "[precondition] span should not be reversed");
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the span as a range.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the bytes referred by the span, if the span lies inside `buf`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlsplit::{split, SplitOptions};
    ///
    /// let url = b"https://example.com/a?b";
    /// let spans = *split(url, &SplitOptions::new()).spans();
    /// let query = spans.query.expect("the URL has a query");
    /// assert_eq!(query.get(url), Some(&b"b"[..]));
    /// assert_eq!((query.start, query.end), (22, 23));
    /// ```
    #[inline]
    #[must_use]
    pub fn get(self, buf: &[u8]) -> Option<&[u8]> {
        buf.get(self.range())
    }
}

impl From<Span> for Range<usize> {
    #[inline]
    fn from(span: Span) -> Self {
        span.range()
    }
}

/// A reference to the scheme component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchemeSpan {
    /// The scheme is explicitly written in the URL.
    Explicit(Span),
    /// No valid scheme was found, and the default scheme is used.
    Default,
}

/// Component references of a split URL.
///
/// `None` means the component (and its delimiter) is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitSpans {
    /// Scheme.
    pub scheme: Option<SchemeSpan>,
    /// Netloc, without the leading `//`.
    ///
    /// Note that this can be `Some` empty span, as in `file:///etc`.
    pub netloc: Option<Span>,
    /// Path.
    pub path: Span,
    /// Query, without the leading `?`.
    pub query: Option<Span>,
    /// Fragment, without the leading `#`.
    pub fragment: Option<Span>,
}

/// Component references of a URL split by the legacy parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseSpans {
    /// Scheme.
    pub scheme: Option<SchemeSpan>,
    /// Netloc, without the leading `//`.
    pub netloc: Option<Span>,
    /// Path, without parameters.
    pub path: Span,
    /// Parameters, without the leading `;`.
    pub params: Option<Span>,
    /// Query, without the leading `?`.
    pub query: Option<Span>,
    /// Fragment, without the leading `#`.
    pub fragment: Option<Span>,
}

impl ParseSpans {
    /// Returns `true` if the path had parameters.
    ///
    /// Note that parameters can be empty even if this returns `true`, as in
    /// `http://example.com/a;`.
    #[inline]
    #[must_use]
    pub const fn has_params(&self) -> bool {
        self.params.is_some()
    }
}
