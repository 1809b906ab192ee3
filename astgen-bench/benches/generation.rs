//! Schema loading and generation benchmarks.

use astgen_bench::{synthetic_schema, synthetic_schema_xml};
use astgen_codegen::{CodeWriter, Generator};
use astgen_schema::{default_schema, parse_schema};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_parse_default_schema(c: &mut Criterion) {
    c.bench_function("parse_default_schema", |b| {
        b.iter(|| default_schema().expect("built-in schema"))
    });
}

fn benchmark_parse_large_schema(c: &mut Criterion) {
    let xml = synthetic_schema_xml(4, 32, 6);

    c.bench_function("parse_large_schema", |b| {
        b.iter(|| parse_schema(black_box(&xml)).expect("synthetic schema"))
    });
}

fn benchmark_render_expr(c: &mut Criterion) {
    let schema = default_schema().expect("built-in schema");
    let generator = Generator::new(&schema);
    let expr = &schema.families()[0];

    c.bench_function("render_expr", |b| {
        b.iter(|| generator.generate_family(black_box(expr)).expect("render"))
    });
}

fn benchmark_render_family_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_family");

    for variants in [4, 32, 256] {
        let schema = synthetic_schema(1, variants, 6).expect("synthetic schema");
        let generator = Generator::new(&schema);
        let family = &schema.families()[0];

        group.bench_with_input(BenchmarkId::from_parameter(variants), &variants, |b, _| {
            b.iter(|| generator.generate_family(black_box(family)).expect("render"))
        });
    }

    group.finish();
}

fn benchmark_writer_blocks(c: &mut Criterion) {
    c.bench_function("writer_nested_blocks", |b| {
        b.iter(|| {
            let mut w = CodeWriter::new();
            for i in 0..64 {
                w.block(&format!("class C{i}"), |w| {
                    w.block("void f()", |w| {
                        w.line("return;");
                        Ok(())
                    })?;
                    Ok(())
                })
                .expect("balanced");
                w.blank_line();
            }
            black_box(w.finish().expect("balanced"))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_default_schema,
    benchmark_parse_large_schema,
    benchmark_render_expr,
    benchmark_render_family_sizes,
    benchmark_writer_blocks,
);
criterion_main!(benches);
