use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Map, Value, json};

/// An object with `width` properties per level, nested `depth` levels deep.
fn described_tree(width: usize, depth: usize) -> Value {
    let mut keys = Map::new();
    for i in 0..width {
        let child = match i % 4 {
            0 => json!({
                "type": "string",
                "flags": { "presence": "required" },
                "rules": [
                    { "name": "min", "args": { "limit": 1 } },
                    { "name": "pattern", "args": { "regex": "/^\\d+-[a-z]+$/" } }
                ]
            }),
            1 => json!({
                "type": "number",
                "rules": [{ "name": "integer" }, { "name": "sign", "args": { "sign": "positive" } }]
            }),
            2 if depth > 0 => json!({
                "type": "array",
                "items": [described_tree(width, depth - 1)]
            }),
            3 if depth > 0 => described_tree(width, depth - 1),
            _ => json!({ "type": "boolean" }),
        };
        keys.insert(format!("field{i}"), child);
    }
    json!({ "type": "object", "keys": keys })
}

fn convert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for depth in [1, 3, 5] {
        let described = described_tree(8, depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &described, |b, described| {
            b.iter(|| black_box(joi_jsonschema::convert_value(described).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, convert_benchmark);
criterion_main!(benches);
