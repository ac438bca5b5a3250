//! Tests using the split cases in `assets/urlsplit-cases.json`.

use std::fs::File;
use std::path::Path;

use urlsplit::{parse, parse_mut, split, split_mut, SplitOptions};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct TestCase {
    name: String,
    url: String,
    #[serde(default)]
    options: Options,
    expected: Expected,
    /// Path after parameters are removed, if different from the split path.
    #[serde(default)]
    parsed_path: Option<String>,
    #[serde(default)]
    params: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct Options {
    default_scheme: Option<String>,
    allow_fragments: bool,
    strip_embedded_control_bytes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_scheme: None,
            allow_fragments: true,
            strip_embedded_control_bytes: true,
        }
    }
}

impl Options {
    fn to_split_options(&self) -> SplitOptions<'_> {
        let options = SplitOptions::new()
            .allow_fragments(self.allow_fragments)
            .strip_embedded_control_bytes(self.strip_embedded_control_bytes);
        match &self.default_scheme {
            Some(scheme) => options.default_scheme(scheme.as_bytes()),
            None => options,
        }
    }
}

/// Expected components. `None` means the component is absent.
#[derive(Debug, Clone, Deserialize)]
struct Expected {
    #[serde(default)]
    scheme: String,
    #[serde(default)]
    netloc: Option<String>,
    path: String,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    fragment: Option<String>,
}

fn load_cases() -> Vec<TestCase> {
    let path = Path::new("assets/urlsplit-cases.json");
    let mut file = File::open(path).expect("test file not found");
    serde_json::from_reader(&mut file).expect("failed to load test asset")
}

fn opt_bytes(s: &Option<String>) -> &[u8] {
    s.as_deref().unwrap_or("").as_bytes()
}

fn check_split(case: &TestCase, s: &urlsplit::Split<'_>) {
    let expected = &case.expected;
    let name = &case.name;
    assert_eq!(s.scheme(), expected.scheme.as_bytes(), "scheme: {name}");
    assert_eq!(s.has_netloc(), expected.netloc.is_some(), "netloc presence: {name}");
    assert_eq!(s.netloc(), opt_bytes(&expected.netloc), "netloc: {name}");
    assert_eq!(s.path(), expected.path.as_bytes(), "path: {name}");
    assert_eq!(s.has_query(), expected.query.is_some(), "query presence: {name}");
    assert_eq!(s.query(), opt_bytes(&expected.query), "query: {name}");
    assert_eq!(
        s.has_fragment(),
        expected.fragment.is_some(),
        "fragment presence: {name}"
    );
    assert_eq!(s.fragment(), opt_bytes(&expected.fragment), "fragment: {name}");
}

fn check_parse(case: &TestCase, p: &urlsplit::Parse<'_>) {
    let expected = &case.expected;
    let name = &case.name;
    let path = case.parsed_path.as_ref().unwrap_or(&expected.path);
    assert_eq!(p.scheme(), expected.scheme.as_bytes(), "scheme: {name}");
    assert_eq!(p.netloc(), opt_bytes(&expected.netloc), "netloc: {name}");
    assert_eq!(p.path(), path.as_bytes(), "path: {name}");
    assert_eq!(p.has_params(), case.params.is_some(), "params presence: {name}");
    assert_eq!(p.params(), opt_bytes(&case.params), "params: {name}");
    assert_eq!(p.query(), opt_bytes(&expected.query), "query: {name}");
    assert_eq!(p.fragment(), opt_bytes(&expected.fragment), "fragment: {name}");
}

#[test]
fn split_cases() {
    for case in load_cases() {
        let options = case.options.to_split_options();
        check_split(&case, &split(&case.url, &options));
    }
}

#[test]
fn split_mut_cases() {
    for case in load_cases() {
        let options = case.options.to_split_options();
        let mut buf = case.url.clone().into_bytes();
        let s = split_mut(&mut buf, &options);
        assert!(s.is_borrowed(), "{}", case.name);
        check_split(&case, &s);
    }
}

#[test]
fn parse_cases() {
    for case in load_cases() {
        let options = case.options.to_split_options();
        check_parse(&case, &parse(&case.url, &options));

        let mut buf = case.url.clone().into_bytes();
        check_parse(&case, &parse_mut(&mut buf, &options));
    }
}

#[test]
fn immutable_and_mutable_agree() {
    for case in load_cases() {
        let options = case.options.to_split_options();
        let mut buf = case.url.clone().into_bytes();
        assert_eq!(
            split(&case.url, &options),
            split_mut(&mut buf, &options),
            "{}",
            case.name
        );
    }
}
