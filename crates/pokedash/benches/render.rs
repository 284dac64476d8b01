//! Scene build + SVG render benchmark.

use criterion::{criterion_group, criterion_main, Criterion};
use pokedash::{Dashboard, Message, Record, Size};
use std::hint::black_box;

fn synthetic_records(count: usize) -> Vec<Record> {
    let types = ["Water", "Fire", "Grass", "Electric", "Rock", "Psychic"];
    (0..count)
        .map(|i| {
            let base = (i % 100) as f64;
            Record {
                name: format!("mon-{i}"),
                primary_type: types[i % types.len()].to_string(),
                secondary_type: None,
                total: 300.0 + base * 3.0,
                hp: 40.0 + base,
                attack: 45.0 + base,
                defense: 50.0 + base,
                sp_atk: 55.0 + base,
                sp_def: 60.0 + base,
                speed: 65.0 + base,
                catch_rate: 3.0 + base * 2.0,
            }
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut dashboard = Dashboard::new(Size::new(1280.0, 800.0));
    dashboard.apply(Message::DataLoaded(synthetic_records(800)));

    c.bench_function("render_svg_800_records", |b| {
        b.iter(|| black_box(dashboard.render_svg()));
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
