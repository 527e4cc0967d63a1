use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meta_sensitivity::meta_confidence::KnappHartung;
use meta_sensitivity::meta_core::StudyRecord;
use meta_sensitivity::meta_trimfill::{
    trim_and_fill, trim_and_fill_batch, Estimator, Side, TrimFillConfig,
};
use rand::prelude::*;
use rand_distr::Normal;

/// Published studies from a literature that suppresses most non-significant results
fn generate_biased_studies(size: usize, true_effect: f64, seed: u64) -> Vec<StudyRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();
    let mut studies = Vec::with_capacity(size);
    while studies.len() < size {
        let se: f64 = rng.gen_range(0.05..0.5);
        let effect = true_effect + se * noise.sample(&mut rng);
        if effect / se > 1.96 || rng.gen::<f64>() < 0.3 {
            studies.push(StudyRecord::new(effect, se * se));
        }
    }
    studies
}

fn bench_trim_and_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("TrimAndFill");
    let sizes = [10, 50, 200, 500];

    for &size in &sizes {
        let studies = generate_biased_studies(size, 0.2, 42);

        for estimator in [Estimator::L0, Estimator::R0] {
            let config = TrimFillConfig::default()
                .with_estimator(estimator)
                .with_side(Side::Right);
            group.bench_with_input(
                BenchmarkId::new(estimator.to_string(), size),
                &studies,
                |b, studies| b.iter(|| trim_and_fill(black_box(studies), config)),
            );
        }
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("TrimAndFillBatch");
    let datasets: Vec<Vec<StudyRecord>> = (0..64)
        .map(|seed| generate_biased_studies(40, 0.3, seed))
        .collect();
    let config = TrimFillConfig::default();

    group.bench_function("64x40", |b| {
        b.iter(|| trim_and_fill_batch(black_box(&datasets), config))
    });

    group.finish();
}

fn bench_knapp_hartung(c: &mut Criterion) {
    let mut group = c.benchmark_group("KnappHartung");
    let estimator = KnappHartung::default();

    for &size in &[10, 100, 1000] {
        let studies = generate_biased_studies(size, 0.2, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &studies, |b, studies| {
            b.iter(|| estimator.analyze(black_box(studies)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trim_and_fill, bench_batch, bench_knapp_hartung);
criterion_main!(benches);
