use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use decomment::scanner;

fn synthetic_source(lines: usize) -> String {
    let mut src = String::new();
    for i in 0..lines {
        src.push_str(&format!(
            "let v{} = \"http://example.com/{}\"; // trailing note {}\n",
            i, i, i
        ));
    }
    src
}

fn scan_synthetic(c: &mut Criterion) {
    let src = synthetic_source(10_000);

    let mut group = c.benchmark_group("scanner");
    group.throughput(Throughput::Bytes(src.len() as u64));
    group.bench_function("strip_10k_lines", |b| {
        b.iter(|| scanner::strip_line_comments(black_box(&src)))
    });
    group.finish();
}

criterion_group!(benches, scan_synthetic);
criterion_main!(benches);
