use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cleanpath::output::OutputFormat;
use cleanpath::path::parse;
use cleanpath::{PathParser, Platform, SystemPlatform};

const SAMPLES: [(&str, &str); 6] = [
    ("bare_file", "test.txt"),
    ("relative", "testing/test.txt"),
    ("url", "https:///test/one\\/two//three.html"),
    ("server", "/////test/one\\/two//three.txt"),
    ("drive", "X:\\test/test.html"),
    ("drive_relative", "D:application_server\\config.txt"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for host in [Platform::Unix, Platform::Windows] {
        for (label, input) in SAMPLES {
            group.bench_with_input(
                BenchmarkId::new(label, host),
                &(input, host),
                |b, &(input, host)| b.iter(|| parse(black_box(input), black_box(host))),
            );
        }
    }

    group.finish();
}

fn bench_long_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_paths");

    for depth in [4usize, 32, 256] {
        let messy = format!("C:{}file.tar.gz", "dir\\//".repeat(depth));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &messy, |b, messy| {
            b.iter(|| parse(black_box(messy), Platform::Windows).format());
        });
    }

    group.finish();
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let fixed = PathParser::new(Platform::Unix);
    group.bench_function("fixed_host", |b| {
        b.iter(|| fixed.clean(black_box("testing//test.txt")));
    });

    let system = PathParser::new(SystemPlatform);
    group.bench_function("system_host", |b| {
        b.iter(|| system.clean(black_box("testing//test.txt")));
    });

    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    let paths: Vec<_> = SAMPLES
        .iter()
        .map(|(_, input)| parse(input, Platform::Unix))
        .collect();

    for format in [
        OutputFormat::Plain,
        OutputFormat::Human,
        OutputFormat::Json,
        OutputFormat::Dump,
    ] {
        let formatter = format.create_formatter();
        group.bench_function(format.to_string(), |b| {
            b.iter(|| formatter.format(black_box(&paths)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_long_paths,
    bench_parser,
    bench_output
);
criterion_main!(benches);
