// benches/error_performance.rs
//! Benchmarks for status_errors
//!
//! Covers table construction, default and custom record generation, lookup,
//! and the structured log writer.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use status_errors::{
    ErrorDescriptor, ErrorMethodTable, StatusCode, bad_request, definitions, gateway_timeout_with,
};

// ============================================================================
// CONSTRUCTION BENCHMARKS
// ============================================================================

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("table_build_builtin", |b| {
        b.iter(|| black_box(ErrorMethodTable::build(black_box(&definitions::BUILTIN))));
    });

    let mut group = c.benchmark_group("table_build_sized");
    for count in [3usize, 8, 32] {
        let descriptors: Vec<ErrorDescriptor> = (0..count)
            .map(|i| ErrorDescriptor::new(format!("kind{}", i), StatusCode::NotFound, "Not Found"))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &descriptors, |b, ds| {
            b.iter(|| black_box(ErrorMethodTable::build(ds)));
        });
    }
    group.finish();
}

// ============================================================================
// GENERATION BENCHMARKS
// ============================================================================

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate_default", |b| {
        b.iter(|| black_box(bad_request()));
    });

    c.bench_function("generate_custom_static", |b| {
        b.iter(|| black_box(gateway_timeout_with(black_box("Timed out"))));
    });

    c.bench_function("generate_custom_owned", |b| {
        b.iter(|| black_box(gateway_timeout_with(String::from("upstream timed out"))));
    });

    let table = ErrorMethodTable::build(&definitions::BUILTIN);
    c.bench_function("lookup_and_invoke", |b| {
        b.iter(|| black_box(table.invoke::<&str>(black_box("gatewayTimeout"), None)));
    });
}

// ============================================================================
// LOGGING BENCHMARKS
// ============================================================================

fn bench_log_write(c: &mut Criterion) {
    let err = gateway_timeout_with("billing did not answer");
    c.bench_function("log_write_to", |b| {
        b.iter(|| {
            let mut buffer = String::new();
            err.log_entry().write_to(&mut buffer).unwrap();
            black_box(buffer);
        });
    });

    let long = gateway_timeout_with("X".repeat(10_000));
    c.bench_function("log_write_to_truncated", |b| {
        b.iter(|| {
            let mut buffer = String::new();
            long.log_entry().write_to(&mut buffer).unwrap();
            black_box(buffer);
        });
    });
}

criterion_group!(construction_benches, bench_table_build);
criterion_group!(generation_benches, bench_generation);
criterion_group!(logging_benches, bench_log_write);

criterion_main!(construction_benches, generation_benches, logging_benches);
