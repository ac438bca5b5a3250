//! Components.
#![allow(dead_code)]

/// Test case.
#[derive(Debug, Clone, Copy)]
pub struct TestCase<'a> {
    /// Test case name.
    pub name: &'a str,
    /// Input URL.
    pub url: &'a [u8],
    /// Components.
    pub components: Components<'a>,
}

impl TestCase<'_> {
    /// Returns `true` if recomposing the components gives back the input.
    #[must_use]
    pub fn is_round_trippable(&self) -> bool {
        // Leading C0 control and space bytes and embedded controls are lost.
        let leading = self.url.first().map_or(false, |&b| b <= b' ');
        let embedded = self.url.iter().any(|b| matches!(b, b'\t' | b'\n' | b'\r'));
        !leading && !embedded
    }
}

/// Components. `None` means the component is absent.
#[derive(Default, Debug, Clone, Copy)]
pub struct Components<'a> {
    /// `scheme`, empty if absent.
    pub scheme: &'a [u8],
    /// `netloc`, without the leading `//`.
    pub netloc: Option<&'a [u8]>,
    /// `path`, including parameters.
    pub path: &'a [u8],
    /// `query`.
    pub query: Option<&'a [u8]>,
    /// `fragment`.
    pub fragment: Option<&'a [u8]>,
}

/// Returns a present component.
const fn some<const N: usize>(s: &'static [u8; N]) -> Option<&'static [u8]> {
    Some(s)
}

pub static TEST_CASES: &[TestCase<'static>] = &[
    TestCase {
        name: "typical http",
        url: b"http://www.example.com/a/b?k=v#top",
        components: Components {
            scheme: b"http",
            netloc: some(b"www.example.com"),
            path: b"/a/b",
            query: some(b"k=v"),
            fragment: some(b"top"),
        },
    },
    TestCase {
        name: "userinfo and port",
        url: b"https://user:pw@example.com:8443/",
        components: Components {
            scheme: b"https",
            netloc: some(b"user:pw@example.com:8443"),
            path: b"/",
            query: None,
            fragment: None,
        },
    },
    TestCase {
        name: "ipv6 literal",
        url: b"http://[2001:db8::1]:80/p",
        components: Components {
            scheme: b"http",
            netloc: some(b"[2001:db8::1]:80"),
            path: b"/p",
            query: None,
            fragment: None,
        },
    },
    TestCase {
        name: "opaque",
        url: b"urn:isbn:0451450523",
        components: Components {
            scheme: b"urn",
            netloc: None,
            path: b"isbn:0451450523",
            query: None,
            fragment: None,
        },
    },
    TestCase {
        name: "network-path reference",
        url: b"//example.com?q",
        components: Components {
            scheme: b"",
            netloc: some(b"example.com"),
            path: b"",
            query: some(b"q"),
            fragment: None,
        },
    },
    TestCase {
        name: "relative path",
        url: b"../a;b/c",
        components: Components {
            scheme: b"",
            netloc: None,
            path: b"../a;b/c",
            query: None,
            fragment: None,
        },
    },
    TestCase {
        name: "fragment only",
        url: b"#",
        components: Components {
            scheme: b"",
            netloc: None,
            path: b"",
            query: None,
            fragment: some(b""),
        },
    },
    TestCase {
        name: "triple slash",
        url: b"///p",
        components: Components {
            scheme: b"",
            netloc: some(b""),
            path: b"/p",
            query: None,
            fragment: None,
        },
    },
    TestCase {
        name: "invalid scheme",
        url: b"-x://h",
        components: Components {
            scheme: b"",
            netloc: None,
            path: b"-x://h",
            query: None,
            fragment: None,
        },
    },
    TestCase {
        name: "colon after path",
        url: b"/a:b",
        components: Components {
            scheme: b"",
            netloc: None,
            path: b"/a:b",
            query: None,
            fragment: None,
        },
    },
    TestCase {
        name: "non-utf8 bytes",
        url: b"s://\xff\xfe/\x80?\x81#\x82",
        components: Components {
            scheme: b"s",
            netloc: some(b"\xff\xfe"),
            path: b"/\x80",
            query: some(b"\x81"),
            fragment: some(b"\x82"),
        },
    },
    TestCase {
        name: "leading controls",
        url: b"\x00 \x1fhttp://h",
        components: Components {
            scheme: b"http",
            netloc: some(b"h"),
            path: b"",
            query: None,
            fragment: None,
        },
    },
    TestCase {
        name: "embedded controls",
        url: b"h\tttp://h\n/p\r?q",
        components: Components {
            scheme: b"http",
            netloc: some(b"h"),
            path: b"/p",
            query: some(b"q"),
            fragment: None,
        },
    },
];
