//! Tree builder benchmarks.
//!
//! Run with: `cargo bench --package kevs-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kevs_util::Diagnostics;

fn build(src: &[u8]) -> usize {
    let mut diag = Diagnostics::new("bench", true, false);
    let tokens = kevs_lex::scan(src, &mut diag).expect("bench input must scan");
    kevs_par::build(&tokens, &mut diag)
        .expect("bench input must build")
        .len()
}

fn bench_flat_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder_flat_table");

    let src = b"a=1;b=\"two\";c=true;d=`raw`;e=0x10;";
    group.throughput(Throughput::Bytes(src.len() as u64));
    group.bench_function("flat_table", |b| b.iter(|| build(black_box(src))));

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder_nested");

    let mut src = String::from("root=");
    for _ in 0..32 {
        src.push('[');
    }
    src.push_str("1;");
    for _ in 0..32 {
        src.push(']');
        src.push(';');
    }
    let src = src.into_bytes();
    group.throughput(Throughput::Bytes(src.len() as u64));
    group.bench_function("nested_lists_32", |b| b.iter(|| build(black_box(&src))));

    group.finish();
}

criterion_group!(benches, bench_flat_table, bench_nested);
criterion_main!(benches);
