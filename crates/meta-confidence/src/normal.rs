//! Normal-approximation (Wald) intervals and z-tests

use crate::{ConfidenceInterval, ConfidenceLevel};
use meta_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Conventional two-sided 95% multiplier used in reporting
pub const CONVENTIONAL_Z_95: f64 = 1.96;

/// Normal-approximation confidence interval estimator
///
/// Builds `estimate ± z·SE` where `z` is the standard normal quantile for the
/// requested level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalCI {
    level: ConfidenceLevel,
    critical_value: f64,
}

impl NormalCI {
    /// Create an estimator whose critical value is the exact normal quantile
    pub fn new(level: ConfidenceLevel) -> Result<Self> {
        let critical_value = standard_normal()?.inverse_cdf(1.0 - level.tail_probability());
        Ok(Self {
            level,
            critical_value,
        })
    }

    /// 95% interval with the rounded multiplier 1.96
    pub fn conventional() -> Self {
        Self {
            level: ConfidenceLevel::NINETY_FIVE,
            critical_value: CONVENTIONAL_Z_95,
        }
    }

    /// Multiplier applied to the standard error
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// Confidence level
    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    /// Interval around `estimate` with the given standard error
    pub fn interval(&self, estimate: f64, standard_error: f64) -> Result<ConfidenceInterval> {
        check_standard_error(standard_error)?;
        Ok(ConfidenceInterval::symmetric(
            estimate,
            self.critical_value * standard_error,
            self.level.value(),
        ))
    }
}

impl Default for NormalCI {
    fn default() -> Self {
        Self::conventional()
    }
}

/// Two-sided Wald test of `estimate = 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZTest {
    /// Test statistic `estimate / SE`
    pub z: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

/// Two-sided z-test of the null hypothesis that the true effect is zero
pub fn z_test(estimate: f64, standard_error: f64) -> Result<ZTest> {
    check_standard_error(standard_error)?;
    let z = estimate / standard_error;
    let p_value = 2.0 * (1.0 - standard_normal()?.cdf(z.abs()));
    Ok(ZTest { z, p_value })
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })
}

fn check_standard_error(standard_error: f64) -> Result<()> {
    if standard_error > 0.0 && standard_error.is_finite() {
        Ok(())
    } else {
        Err(Error::Computation(format!(
            "Standard error must be finite and positive, got {standard_error}"
        )))
    }
}
