use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

use basic_json::{Object, Value, encode, encode_to_slice};

fn gen_rows(n: usize) -> Value {
    let mut rng = StdRng::seed_from_u64(42);
    let rows: Vec<Value> = (0..n)
        .map(|i| {
            let name = (0..12)
                .map(|_| (b'a' + (rng.random::<u8>() % 26)) as char)
                .collect::<String>();
            Value::object([
                ("id", Value::from(i as u64)),
                ("name", Value::from(name)),
                ("score", Value::from(rng.random::<f64>())),
                ("active", Value::bool(rng.random_bool(0.5))),
            ])
        })
        .collect();
    Value::object(Object::from_iter([("rows", Value::from(rows))]))
}

fn gen_escape_heavy(len: usize) -> Value {
    let mut rng = StdRng::seed_from_u64(7);
    let s: String = (0..len)
        .map(|_| match rng.random::<u8>() % 8 {
            0 => '\n',
            1 => '"',
            2 => '\u{1}',
            3 => '\u{e9}',
            _ => 'x',
        })
        .collect();
    Value::string(s)
}

fn gen_nested(depth: usize, breadth: usize) -> Value {
    if depth == 0 {
        return Value::from(1);
    }
    let entries: Vec<(String, Value)> = (0..breadth)
        .map(|i| (format!("k{}", i), gen_nested(depth - 1, breadth)))
        .collect();
    Value::object(entries)
}

pub fn encode_benchmarks(c: &mut Criterion) {
    let cases = [
        ("rows_1k", gen_rows(1000)),
        ("escape_heavy_64k", gen_escape_heavy(64 * 1024)),
        ("nested_5x5", gen_nested(5, 5)),
    ];
    let mut group = c.benchmark_group("encode");
    for (name, v) in &cases {
        let size = encode(v).len();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("vec::{name}"), |b| b.iter(|| black_box(encode(black_box(v)))));
        group.bench_function(format!("slice::{name}"), |b| {
            b.iter_batched(
                || vec![0u8; size],
                |mut buf| black_box(encode_to_slice(v, &mut buf).unwrap()),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, encode_benchmarks);
criterion_main!(benches);
