use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use confusion_treemap::{ChartOptions, LayoutConfig, Table, Theme, compute_layout, render_svg};

/// Synthetic classification results: `classes` categories with a skewed
/// prevalence and a deterministic error pattern, so runs are reproducible.
fn synthetic_table(rows: usize, classes: usize) -> Table {
    let mut pairs = Vec::with_capacity(rows);
    let mut state = 0x2545F491_u64;
    for _ in 0..rows {
        // xorshift keeps the generator dependency-free.
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let label = (state as usize) % classes;
        let prediction = if state % 10 < 7 {
            label
        } else {
            (label + 1 + (state as usize / 10) % (classes - 1).max(1)) % classes
        };
        pairs.push((format!("class-{label}"), format!("class-{prediction}")));
    }
    Table::from_pairs("Label", "Prediction", pairs)
}

fn bench_layout(c: &mut Criterion) {
    let theme = Theme::classic();
    let config = LayoutConfig::default();
    let options = ChartOptions::new();

    let mut group = c.benchmark_group("compute_layout");
    for (rows, classes) in [(100, 4), (10_000, 10), (100_000, 25)] {
        let table = synthetic_table(rows, classes);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{classes}")),
            &table,
            |b, table| {
                b.iter(|| {
                    let layout = compute_layout(
                        black_box(table),
                        "Label",
                        "Prediction",
                        &options,
                        &theme,
                        &config,
                    )
                    .unwrap();
                    black_box(layout)
                })
            },
        );
    }
    group.finish();

    let table = synthetic_table(10_000, 10);
    let layout = compute_layout(&table, "Label", "Prediction", &options, &theme, &config).unwrap();
    c.bench_function("render_svg_10k", |b| {
        b.iter(|| black_box(render_svg(black_box(&layout), &theme, &config)))
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
