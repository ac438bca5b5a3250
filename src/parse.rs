//! Legacy parsing with path parameters.

use crate::components::{ParseSpans, SchemeSpan, SplitSpans};
use crate::netloc::Netloc;
use crate::parser;
use crate::recompose::Recomposed;
use crate::scheme;
use crate::split::{split, split_mut, Source, Split, SplitOptions};

/// Splits the given URL into six components, including path parameters.
///
/// This is [`split`] followed by extraction of parameters from the last path
/// segment. Parameters are only extracted for the schemes listed in
/// [`scheme::USES_PARAMS`], and only from the last `/`-delimited segment of
/// the path.
///
/// # Examples
///
/// ```
/// use urlsplit::{parse, SplitOptions};
///
/// let p = parse(b"http://h/a;x/b", &SplitOptions::new());
/// assert_eq!(p.path(), b"/a;x/b");
/// assert!(!p.has_params());
///
/// let p = parse(b"http://h/a/b;y", &SplitOptions::new());
/// assert_eq!(p.path(), b"/a/b");
/// assert_eq!(p.params(), b"y");
/// assert!(p.has_params());
///
/// let p = parse(b"git://h/a/b;y", &SplitOptions::new());
/// assert_eq!(p.path(), b"/a/b;y");
/// assert!(!p.has_params());
/// ```
#[inline]
#[must_use]
pub fn parse<'a, T>(url: &'a T, options: &SplitOptions<'a>) -> Parse<'a>
where
    T: AsRef<[u8]> + ?Sized,
{
    Parse::from(split(url, options))
}

/// Splits the given mutable URL buffer into six components, including path
/// parameters.
///
/// See [`split_mut`] for how the buffer is modified.
#[inline]
#[must_use]
pub fn parse_mut<'a>(url: &'a mut [u8], options: &SplitOptions<'a>) -> Parse<'a> {
    Parse::from(split_mut(url, options))
}

/// A URL split into scheme, netloc, path, params, query, and fragment.
///
/// Two `Parse`s compare equal if their six components and
/// [`has_params`][`Self::has_params`] are equal.
#[derive(Debug, Clone)]
pub struct Parse<'a> {
    /// URL buffer and default scheme.
    source: Source<'a>,
    /// Component references.
    spans: ParseSpans,
}

impl<'a> From<Split<'a>> for Parse<'a> {
    fn from(split: Split<'a>) -> Self {
        let (source, spans) = split.into_parts();
        let SplitSpans {
            scheme,
            netloc,
            path,
            query,
            fragment,
        } = spans;

        let (path, params) = if scheme::uses_params(source.scheme(scheme)) {
            match parser::split_params(source.url(), path) {
                Some((path, params)) => (path, Some(params)),
                None => (path, None),
            }
        } else {
            (path, None)
        };

        Self {
            source,
            spans: ParseSpans {
                scheme,
                netloc,
                path,
                params,
                query,
                fragment,
            },
        }
    }
}

impl<'a> Parse<'a> {
    /// Returns the scheme.
    ///
    /// This is the default scheme if no valid explicit scheme was found.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &[u8] {
        self.source.scheme(self.spans.scheme)
    }

    /// Returns the netloc, without the leading `//`.
    #[inline]
    #[must_use]
    pub fn netloc(&self) -> &[u8] {
        self.source.get_or_empty(self.spans.netloc)
    }

    /// Returns the path without parameters.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[u8] {
        self.source.get(self.spans.path)
    }

    /// Returns the parameters, without the leading `;`.
    #[inline]
    #[must_use]
    pub fn params(&self) -> &[u8] {
        self.source.get_or_empty(self.spans.params)
    }

    /// Returns the query, without the leading `?`.
    #[inline]
    #[must_use]
    pub fn query(&self) -> &[u8] {
        self.source.get_or_empty(self.spans.query)
    }

    /// Returns the fragment, without the leading `#`.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> &[u8] {
        self.source.get_or_empty(self.spans.fragment)
    }

    /// Returns `true` if the last path segment had a `;`.
    ///
    /// Note that [`params`][`Self::params`] can be empty even if this returns
    /// `true`, as in `http://example.com/a;`.
    #[inline]
    #[must_use]
    pub fn has_params(&self) -> bool {
        self.spans.has_params()
    }

    /// Returns `true` if the scheme is the default scheme.
    #[inline]
    #[must_use]
    pub fn is_default_scheme(&self) -> bool {
        self.spans.scheme == Some(SchemeSpan::Default)
    }

    /// Returns the component references.
    ///
    /// The spans refer to [`as_bytes`][`Self::as_bytes`].
    #[inline]
    #[must_use]
    pub fn spans(&self) -> &ParseSpans {
        &self.spans
    }

    /// Returns the URL buffer the spans refer to.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.source.url()
    }

    /// Returns `true` if the URL buffer is borrowed from the caller, i.e. no
    /// copy was made.
    #[inline]
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        self.source.is_borrowed()
    }

    /// Decomposes the netloc into user information, host, and port.
    ///
    /// Returns `None` if the URL has no netloc.
    #[inline]
    #[must_use]
    pub fn netloc_components(&self) -> Option<Netloc<'_>> {
        self.spans
            .netloc
            .map(|span| Netloc::new(self.source.get(span)))
    }

    /// Returns a proxy to write the components back into a URL.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), urlsplit::Error> {
    /// use urlsplit::task::ProcessAndWrite;
    /// use urlsplit::{parse, SplitOptions};
    ///
    /// let p = parse(b"http://h/a;", &SplitOptions::new());
    /// assert_eq!(p.params(), b"");
    /// assert_eq!(p.recompose().allocate_and_write()?, b"http://h/a;");
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    #[must_use]
    pub fn recompose(&self) -> Recomposed<'_> {
        Recomposed {
            scheme: self.scheme(),
            netloc: self.spans.netloc.map(|span| self.source.get(span)),
            path: self.path(),
            params: self.spans.params.map(|span| self.source.get(span)),
            query: self.spans.query.map(|span| self.source.get(span)),
            fragment: self.spans.fragment.map(|span| self.source.get(span)),
        }
    }
}

impl PartialEq for Parse<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.scheme() == other.scheme()
            && self.netloc() == other.netloc()
            && self.path() == other.path()
            && self.params() == other.params()
            && self.has_params() == other.has_params()
            && self.query() == other.query()
            && self.fragment() == other.fragment()
    }
}

impl Eq for Parse<'_> {}
