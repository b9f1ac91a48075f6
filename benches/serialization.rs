use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_urlform::{encode, to_bytes, FieldMap, Value};

fn benchmark_encode_scalars(c: &mut Criterion) {
    c.bench_function("encode_bool", |b| b.iter(|| to_bytes(black_box(&true))));

    c.bench_function("encode_f64", |b| {
        b.iter(|| to_bytes(black_box(&(1.0 / 3.0))))
    });

    c.bench_function("encode_string", |b| {
        b.iter(|| to_bytes(black_box("Hello world, this needs escaping & more")))
    });
}

fn benchmark_render_field_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_field_map");

    for size in [10, 50, 100, 500].iter() {
        let mut fields = FieldMap::with_capacity(*size);
        for i in 0..*size {
            fields.append(format!("field{}", i), format!("value {}", i));
        }
        let value = Value::Fields(fields);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| encode(black_box(&value)))
        });
    }
    group.finish();
}

fn benchmark_render_multi_valued_key(c: &mut Criterion) {
    let mut fields = FieldMap::new();
    for i in 0..100 {
        fields.append("tag", format!("tag value {}", i));
    }
    let value = Value::Fields(fields);

    c.bench_function("render_multi_valued_key", |b| {
        b.iter(|| encode(black_box(&value)))
    });
}

criterion_group!(
    benches,
    benchmark_encode_scalars,
    benchmark_render_field_map,
    benchmark_render_multi_valued_key
);
criterion_main!(benches);
