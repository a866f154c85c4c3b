//! Criterion benchmarks for rust_logger_registry

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logger_registry::prelude::*;

/// Appender that discards everything, so benchmarks measure the registry path
struct NullAppender;

impl Appender for NullAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        black_box(entry);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn populated_registry(count: usize) -> LoggerRegistry {
    let registry = LoggerRegistry::new();
    registry
        .load_configuration(None, LoggerConfiguration::new(LogLevel::Error))
        .expect("console configuration is valid");
    for i in 0..count {
        registry
            .load_configuration(
                Some(format!("logger-{}", i).as_str()),
                LoggerConfiguration::new(LogLevel::Error),
            )
            .expect("console configuration is valid");
    }
    registry
}

// ============================================================================
// Lookup Benchmarks
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_lookup");
    group.throughput(Throughput::Elements(1));

    let registry = populated_registry(100);

    group.bench_function("named_hit", |b| {
        b.iter(|| black_box(registry.logger(Some(black_box("logger-42")))));
    });

    group.bench_function("fallback_to_main", |b| {
        b.iter(|| black_box(registry.logger(Some(black_box("missing")))));
    });

    group.bench_function("caller_inferred", |b| {
        b.iter(|| black_box(registry.logger(None)));
    });

    group.finish();
}

// ============================================================================
// Emit Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .label("bench")
        .min_level(LogLevel::Info)
        .appender(NullAppender)
        .build();

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_emit);
criterion_main!(benches);
