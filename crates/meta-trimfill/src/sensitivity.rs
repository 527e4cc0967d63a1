//! Robustness interpretation of a trim-and-fill result

use crate::result::TrimFillResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percent change below which a result counts as robust
pub const ROBUST_BELOW_PERCENT: f64 = 10.0;
/// Percent change below which sensitivity counts as moderate
pub const MODERATE_BELOW_PERCENT: f64 = 25.0;

/// How strongly the pooled estimate reacts to the imputed studies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Robustness {
    /// Less than 10% change
    Robust,
    /// 10% to 25% change
    ModerateSensitivity,
    /// 25% change or more
    HighSensitivity,
    /// The original estimate is zero, so no relative change exists
    Undetermined,
}

impl Robustness {
    pub fn from_percent_change(percent_change: Option<f64>) -> Self {
        match percent_change {
            None => Robustness::Undetermined,
            Some(p) if p < ROBUST_BELOW_PERCENT => Robustness::Robust,
            Some(p) if p < MODERATE_BELOW_PERCENT => Robustness::ModerateSensitivity,
            Some(_) => Robustness::HighSensitivity,
        }
    }

    /// One-line interpretation
    pub fn description(&self) -> &'static str {
        match self {
            Robustness::Robust => {
                "Result is relatively robust to potential publication bias (< 10% change)"
            }
            Robustness::ModerateSensitivity => {
                "Result shows moderate sensitivity to publication bias (10-25% change)"
            }
            Robustness::HighSensitivity => {
                "Result shows high sensitivity to publication bias (>= 25% change); \
                 interpret the original estimate with considerable caution"
            }
            Robustness::Undetermined => {
                "Relative change is undefined because the original pooled effect is zero"
            }
        }
    }
}

impl fmt::Display for Robustness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Robustness::Robust => write!(f, "Robust"),
            Robustness::ModerateSensitivity => write!(f, "Moderate sensitivity"),
            Robustness::HighSensitivity => write!(f, "High sensitivity"),
            Robustness::Undetermined => write!(f, "Undetermined"),
        }
    }
}

/// Interpretation of how much a result depends on the imputed studies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityAssessment {
    pub k0: usize,
    pub percent_change: Option<f64>,
    pub robustness: Robustness,
    /// The original 95% interval excludes zero
    pub original_significant: bool,
    /// The filled 95% interval excludes zero
    pub filled_significant: bool,
}

impl SensitivityAssessment {
    pub fn from_result(result: &TrimFillResult) -> Self {
        let percent_change = result.percent_change();
        Self {
            k0: result.k0(),
            percent_change,
            robustness: Robustness::from_percent_change(percent_change),
            original_significant: result.ci_original().excludes_zero(),
            filled_significant: result.ci_filled().excludes_zero(),
        }
    }

    /// Whether filling flips the significance of the pooled effect
    pub fn significance_changed(&self) -> bool {
        self.original_significant != self.filled_significant
    }

    /// Interpretation lines for reports
    pub fn interpretation(&self) -> Vec<String> {
        if self.k0 == 0 {
            return vec![
                "No evidence of missing studies detected.".to_string(),
                "This does not prove that publication bias is absent.".to_string(),
            ];
        }

        let mut lines = Vec::new();
        match self.percent_change {
            Some(p) => lines.push(format!(
                "If {} studies were missing, the pooled effect would change by {:.1}%.",
                self.k0, p
            )),
            None => lines.push(format!(
                "If {} studies were missing, the pooled effect would move away from zero.",
                self.k0
            )),
        }
        lines.push(format!("{}.", self.robustness.description()));
        if self.significance_changed() {
            lines.push("Statistical significance changes after filling.".to_string());
        } else {
            lines.push("Statistical significance does not change after filling.".to_string());
        }
        lines
    }
}
