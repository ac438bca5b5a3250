//! Splitting into five components.

mod components;

use urlsplit::{split, split_mut, task::ProcessAndWrite, SplitOptions};

use self::components::TEST_CASES;

#[test]
fn components() {
    for case in TEST_CASES {
        let s = split(case.url, &SplitOptions::new());
        let expected = &case.components;
        assert_eq!(s.scheme(), expected.scheme, "{}", case.name);
        assert_eq!(s.has_netloc(), expected.netloc.is_some(), "{}", case.name);
        assert_eq!(s.netloc(), expected.netloc.unwrap_or_default(), "{}", case.name);
        assert_eq!(s.path(), expected.path, "{}", case.name);
        assert_eq!(s.has_query(), expected.query.is_some(), "{}", case.name);
        assert_eq!(s.query(), expected.query.unwrap_or_default(), "{}", case.name);
        assert_eq!(s.has_fragment(), expected.fragment.is_some(), "{}", case.name);
        assert_eq!(
            s.fragment(),
            expected.fragment.unwrap_or_default(),
            "{}",
            case.name
        );
    }
}

#[test]
fn in_place_matches_copy() {
    for case in TEST_CASES {
        let options = SplitOptions::new();
        let mut buf = case.url.to_vec();
        assert_eq!(
            split(case.url, &options),
            split_mut(&mut buf, &options),
            "{}",
            case.name
        );
    }
}

#[test]
fn borrowed_unless_sanitized() {
    for case in TEST_CASES {
        let s = split(case.url, &SplitOptions::new());
        let has_embedded = case
            .url
            .iter()
            .any(|b| matches!(b, b'\t' | b'\n' | b'\r'));
        assert_eq!(s.is_borrowed(), !has_embedded, "{}", case.name);
    }
}

#[test]
fn recompose() {
    for case in TEST_CASES.iter().filter(|case| case.is_round_trippable()) {
        let s = split(case.url, &SplitOptions::new());
        let recomposed = s.recompose().allocate_and_write().expect("allocation");
        assert_eq!(recomposed, case.url, "{}", case.name);
    }
}

#[test]
fn fragments_disabled() {
    let options = SplitOptions::new().allow_fragments(false);
    for case in TEST_CASES {
        let s = split(case.url, &options);
        assert!(!s.has_fragment(), "{}", case.name);
        assert_eq!(s.fragment(), b"", "{}", case.name);
    }
}

#[test]
fn default_scheme_only_without_explicit_scheme() {
    let options = SplitOptions::new().default_scheme(b"dflt");
    for case in TEST_CASES {
        let s = split(case.url, &options);
        if case.components.scheme.is_empty() {
            assert_eq!(s.scheme(), b"dflt", "{}", case.name);
            assert!(s.is_default_scheme(), "{}", case.name);
        } else {
            assert_eq!(s.scheme(), case.components.scheme, "{}", case.name);
            assert!(!s.is_default_scheme(), "{}", case.name);
        }
    }
}

#[test]
fn keep_embedded_controls() {
    let options = SplitOptions::new().strip_embedded_control_bytes(false);
    let s = split(b"http://h\t/p", &options);
    assert!(s.is_borrowed());
    assert_eq!(s.netloc(), b"h\t");
    assert_eq!(s.path(), b"/p");

    // Leading bytes are stripped anyway.
    let s = split(b"\t\thttp://h", &options);
    assert_eq!(s.scheme(), b"http");
}

#[test]
fn absent_and_empty_are_equal() {
    let options = SplitOptions::new();
    assert_eq!(split(b"p?#", &options), split(b"p", &options));
    assert_eq!(split(b"//", &options), split(b"", &options));
    assert_ne!(split(b"p?x", &options), split(b"p", &options));
}

#[test]
fn netloc_components() {
    let s = split(b"ftp://anon:secret@[::1]:2121/pub", &SplitOptions::new());
    let netloc = s.netloc_components().expect("netloc is present");
    assert_eq!(netloc.username(), Some(&b"anon"[..]));
    assert_eq!(netloc.password(), Some(&b"secret"[..]));
    assert_eq!(netloc.host(), b"::1");
    assert_eq!(netloc.port_number(), Some(2121));

    let s = split(b"mailto:a@b", &SplitOptions::new());
    assert!(s.netloc_components().is_none());
}
