//! Knapp-Hartung comparison frame

use crate::Result;
use meta_confidence::{KnappHartungAnalysis, SignificanceMarker};
use polars::prelude::*;

pub(super) fn comparison_frame(analysis: &KnappHartungAnalysis) -> Result<DataFrame> {
    let standard = &analysis.standard_interval;
    let adjusted = &analysis.adjusted.interval;
    let p_values = [analysis.standard_test.p_value, analysis.adjusted.p_value];

    let df = df![
        "method" => ["standard", "knapp_hartung"],
        "estimate" => [standard.estimate, adjusted.estimate],
        "standard_error" => [analysis.pooled.standard_error(), analysis.adjusted.standard_error],
        "ci_lower" => [standard.lower, adjusted.lower],
        "ci_upper" => [standard.upper, adjusted.upper],
        "p_value" => p_values,
        "significance" => p_values.map(|p| SignificanceMarker::from_p_value(p).to_string()),
    ]?;
    Ok(df)
}
