use criterion::{Criterion, black_box, criterion_group, criterion_main};
use formcore_registry::testers::{all_of, format_is, rank_with, schema_type_is};
use formcore_registry::{CandidateRegistry, UiSchemaRegistry};
use formcore_types::Path;
use serde_json::json;

fn widget_dispatch(c: &mut Criterion) {
    let mut registry = CandidateRegistry::new();
    for i in 0..50 {
        let ty = if i % 2 == 0 { "number" } else { "boolean" };
        registry.register(i, rank_with(1, schema_type_is(ty)));
    }
    registry.register(
        999,
        rank_with(4, all_of(vec![schema_type_is("string"), format_is("date")])),
    );

    let schema = json!({"type": "string", "format": "date"});
    c.bench_function("candidate_find_best_50_entries", |b| {
        b.iter(|| {
            let resolved = registry.resolve(None, black_box(&schema), None);
            black_box(resolved).unwrap();
        });
    });
}

fn synthesis_fallback(c: &mut Criterion) {
    let registry = UiSchemaRegistry::new();
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "address": {
                "type": "object",
                "properties": {
                    "street": {"type": "string"},
                    "city": {"type": "string"},
                    "zip": {"type": "string"}
                }
            },
            "tags": {"type": "array", "items": {"type": "string"}}
        }
    });
    let root = Path::root();
    c.bench_function("uischema_resolve_with_synthesis", |b| {
        b.iter(|| black_box(registry.resolve(black_box(&schema), &root, None)));
    });
}

fn sentinel_scan(c: &mut Criterion) {
    let registry: CandidateRegistry<u32> = CandidateRegistry::new();
    let schema = json!({"type": "string"});
    c.bench_function("candidate_sentinel_only", |b| {
        b.iter(|| {
            let _ = black_box(registry.resolve(None, black_box(&schema), None));
        });
    });
}

criterion_group!(benches, widget_dispatch, synthesis_fallback, sentinel_scan);
criterion_main!(benches);
