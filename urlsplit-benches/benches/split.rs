use criterion::{black_box, criterion_group, criterion_main, Criterion};

use urlsplit::{parse, split, split_mut, SplitOptions};

pub fn criterion_benchmark(c: &mut Criterion) {
    let options = SplitOptions::new();
    let full = "http://user:pw@sub.sub.example.com:8080/a/b/c;type=d?k1=v1&k2=v2#fragment";
    let relative = "../a/b/c?k=v";
    let opaque = "mailto:user@example.com";
    let ipv6 = "https://[2001:db8::1]:8443/path";

    c.bench_function("split various urls", |b| {
        b.iter(|| {
            (
                split(black_box(full), &options),
                split(black_box(relative), &options),
                split(black_box(opaque), &options),
                split(black_box(ipv6), &options),
            )
        })
    });

    c.bench_function("parse with params", |b| {
        b.iter(|| parse(black_box(full), &options));
    });

    let dirty = " \thttp://exa\tmple.com/a\r\n/b/c?q#f";
    c.bench_function("split with embedded controls (copy)", |b| {
        b.iter(|| split(black_box(dirty), &options).path().len());
    });

    c.bench_function("split with embedded controls (in place)", |b| {
        b.iter(|| {
            let mut buf = *b" \thttp://exa\tmple.com/a\r\n/b/c?q#f";
            split_mut(black_box(&mut buf), &options).path().len()
        });
    });

    c.bench_function("netloc components", |b| {
        let s = split(full, &options);
        b.iter(|| black_box(&s).netloc_components().and_then(|n| n.port_number()));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
