// Criterion benchmark suite: construction and projection overhead.
//
// Run: cargo bench
// Specific group: cargo bench -- compile
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use regex_named::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_log_line(i: usize) -> String {
    format!(
        "2025-06-{:02} {:02}:{:02}:{:02} INFO server[{}] request path=/api/v1/users/{} status=200 duration={}ms\n",
        (i % 28) + 1,
        i % 24,
        i % 60,
        (i * 7) % 60,
        1000 + (i % 50),
        i * 3,
        (i * 13) % 500,
    )
}

fn make_log_text(num_lines: usize) -> String {
    let mut text = String::new();
    for i in 0..num_lines {
        text.push_str(&make_log_line(i));
    }
    text
}

// ---------------------------------------------------------------------------
// 1. compile -- scanner and table cost on top of engine compilation
// ---------------------------------------------------------------------------

fn bench_compile(c: &mut Criterion) {
    let patterns: &[(&str, &str)] = &[
        ("named_pair", r"(?P<name>\w+) (?P<age>\d+)"),
        ("date", r"(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})"),
        ("nested", r"(?P<a>(?:1(?:2)?)*)(?P<b>3)"),
        ("unnamed", r"(\w+) (\d+)"),
        ("no_groups", r"\w+ \d+"),
    ];

    let mut group = c.benchmark_group("compile");
    for (name, pat) in patterns {
        group.bench_with_input(BenchmarkId::new("named", name), pat, |b, pat| {
            b.iter(|| {
                let re = NamedRegex::new(black_box(pat)).unwrap();
                black_box(&re);
            });
        });
        group.bench_with_input(BenchmarkId::new("engine_only", name), pat, |b, pat| {
            b.iter(|| {
                let re = regex::Regex::new(black_box(pat)).unwrap();
                black_box(&re);
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. first_match -- one projection vs raw positional captures
// ---------------------------------------------------------------------------

fn bench_first_match(c: &mut Criterion) {
    let text = make_log_text(100); // ~10KB
    let re = NamedRegex::must_compile(r"duration=(?P<ms>\d+)ms");

    let mut group = c.benchmark_group("first_match");

    group.bench_function("find_named", |b| {
        b.iter(|| {
            let result = re.find_named(black_box(&text));
            black_box(result);
        });
    });

    group.bench_function("find_named_index", |b| {
        b.iter(|| {
            let result = re.find_named_index(black_box(&text));
            black_box(result);
        });
    });

    group.bench_function("raw_captures", |b| {
        b.iter(|| {
            let caps = re.as_regex().captures(black_box(&text));
            black_box(caps.and_then(|caps| caps.get(1).map(|m| m.as_str())));
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// 3. all_matches -- projection across a whole log
// ---------------------------------------------------------------------------

fn bench_all_matches(c: &mut Criterion) {
    let text = make_log_text(500); // ~50KB
    let re = NamedRegex::must_compile(
        r"(?P<time>\d{2}:\d{2}:\d{2}) (?P<level>[A-Z]+) .* duration=(?P<ms>\d+)ms",
    );

    let mut group = c.benchmark_group("all_matches");

    group.bench_function("find_all_named", |b| {
        b.iter(|| {
            let (wholes, groups) = re.find_all_named(black_box(&text), -1);
            black_box((wholes, groups));
        });
    });

    group.bench_function("find_all_named_index", |b| {
        b.iter(|| {
            let (wholes, groups) = re.find_all_named_index(black_box(&text), -1);
            black_box((wholes, groups));
        });
    });

    group.bench_function("find_all_named_bytes", |b| {
        let bytes = text.as_bytes();
        b.iter(|| {
            let (wholes, groups) = re.find_all_named_bytes(black_box(bytes), -1);
            black_box((wholes, groups));
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_compile, bench_first_match, bench_all_matches);
criterion_main!(benches);
