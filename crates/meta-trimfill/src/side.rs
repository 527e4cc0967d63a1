//! Resolution of the side on which studies are presumed missing

use crate::config::{ResolvedSide, Side};
use meta_core::{pearson_correlation, StudyRecord};
use serde::{Deserialize, Serialize};

/// How the analysed side was chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideResolution {
    /// Side that was trimmed and filled
    pub side: ResolvedSide,
    /// Whether the side came from automatic detection
    pub auto_detected: bool,
    /// Mean of `y − μ_FE` over all studies
    pub mean_deviation: f64,
    /// Pearson correlation of |effect| against standard error
    ///
    /// Reported for inspection only. Automatic detection uses the sign of
    /// `mean_deviation` and ignores this value.
    pub effect_se_correlation: Option<f64>,
}

/// Resolve `requested` against the full study set centered at `center`
///
/// In automatic mode a positive mean deviation resolves to [`ResolvedSide::Left`]
/// and anything else to [`ResolvedSide::Right`].
pub fn resolve_side(requested: Side, studies: &[StudyRecord], center: f64) -> SideResolution {
    let mean_deviation = studies
        .iter()
        .map(|study| study.effect - center)
        .sum::<f64>()
        / studies.len() as f64;

    let abs_effects: Vec<f64> = studies.iter().map(|s| s.effect.abs()).collect();
    let standard_errors: Vec<f64> = studies.iter().map(StudyRecord::standard_error).collect();
    let effect_se_correlation = pearson_correlation(&abs_effects, &standard_errors);

    let (side, auto_detected) = match requested {
        Side::Left => (ResolvedSide::Left, false),
        Side::Right => (ResolvedSide::Right, false),
        Side::Auto if mean_deviation > 0.0 => (ResolvedSide::Left, true),
        Side::Auto => (ResolvedSide::Right, true),
    };

    SideResolution {
        side,
        auto_detected,
        mean_deviation,
        effect_se_correlation,
    }
}
