use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use shorthand_humanize::{format_relative_time, RelativeTimeFormatter};

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative_time");

    for seconds in [30i128, 32_400, 3_888_000, 45_648_023_834_783] {
        group.bench_with_input(BenchmarkId::new("default", seconds), &seconds, |b, &s| {
            b.iter(|| black_box(format_relative_time(black_box(s))));
        });
    }

    let dashed = RelativeTimeFormatter::with_delimiter("-");
    group.bench_function("grouped_years", |b| {
        b.iter(|| black_box(dashed.format_secs(black_box(u128::MAX))));
    });

    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
