//! Shared fixtures for meta-trimfill integration tests

#![allow(dead_code)]

use meta_core::StudyRecord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

pub fn studies(pairs: &[(f64, f64)]) -> Vec<StudyRecord> {
    pairs.iter().copied().map(StudyRecord::from).collect()
}

/// Three tightly clustered, equally precise studies
pub fn tight_cluster() -> Vec<StudyRecord> {
    studies(&[(0.1, 0.01), (0.2, 0.01), (0.3, 0.01)])
}

/// `pairs` mirrored pairs `±0.1·i` with equal variance, symmetric about zero
pub fn mirrored_pairs(pairs: usize) -> Vec<StudyRecord> {
    (1..=pairs)
        .flat_map(|i| {
            let effect = 0.1 * i as f64;
            [StudyRecord::new(effect, 0.02), StudyRecord::new(-effect, 0.02)]
        })
        .collect()
}

/// Seven imprecise studies symmetric about zero plus three precise, large
/// positive effects
pub fn precise_large_effects() -> Vec<StudyRecord> {
    let mut set: Vec<StudyRecord> = [-0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3]
        .iter()
        .map(|&y| StudyRecord::new(y, 0.05))
        .collect();
    set.extend([1.5, 1.8, 2.0].iter().map(|&y| StudyRecord::new(y, 0.01)));
    set
}

/// Same effects as [`precise_large_effects`] but the three large effects come
/// from the least precise studies, the classic small-study pattern
pub fn imprecise_large_effects() -> Vec<StudyRecord> {
    let effects = [-0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3, 1.5, 1.8, 2.0];
    let variances = [0.04, 0.02, 0.01, 0.01, 0.01, 0.02, 0.04, 0.09, 0.1, 0.12];
    effects
        .iter()
        .zip(&variances)
        .map(|(&y, &v)| StudyRecord::new(y, v))
        .collect()
}

/// Simulated literature with selective publication
///
/// Effects are drawn around `true_effect`; studies that are not
/// significantly positive are published only with probability
/// `publish_null`. Deterministic for a given seed.
pub fn biased_literature(
    seed: u64,
    n_published: usize,
    true_effect: f64,
    publish_null: f64,
) -> Vec<StudyRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();
    let mut published = Vec::with_capacity(n_published);

    while published.len() < n_published {
        let se: f64 = rng.gen_range(0.05..0.5);
        let effect = true_effect + se * noise.sample(&mut rng);
        let significant = effect / se > 1.96;
        if significant || rng.gen::<f64>() < publish_null {
            published.push(StudyRecord::new(effect, se * se));
        }
    }
    published
}
