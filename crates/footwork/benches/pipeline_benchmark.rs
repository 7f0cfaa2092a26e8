//! Benchmarks for the step-to-frame pipeline

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use footwork::{DirectionCode, Pipeline, PlaybackConfig, StepRecord};

fn create_steps(count: usize) -> Vec<StepRecord> {
    (0..count)
        .map(|i| {
            let code = DirectionCode::ALL[i % DirectionCode::ALL.len()].clock();
            let facing = (i * 45 % 360) as f64;
            if i % 2 == 0 {
                StepRecord::right(code, facing)
            } else {
                StepRecord::left(code, facing)
            }
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for count in [10, 100, 1000] {
        let steps = create_steps(count);
        let pipeline = Pipeline::new(PlaybackConfig::default()).unwrap();

        group.bench_with_input(BenchmarkId::new("run", count), &steps, |b, steps| {
            b.iter(|| pipeline.run(black_box(steps)));
        });

        group.bench_with_input(BenchmarkId::new("waypoints", count), &steps, |b, steps| {
            b.iter(|| pipeline.waypoints(black_box(steps)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
