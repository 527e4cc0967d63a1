//! Configuration for trim-and-fill analyses
//!
//! Configuration is a plain value passed to each analysis. Nothing is read
//! from process-wide state.

use meta_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default cap on trim iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Estimator for the number of missing studies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Estimator {
    /// Linear rank estimator
    #[default]
    L0,
    /// Rank-sum estimator
    R0,
    /// Quadratic estimator; not yet implemented distinctly, runs as L0
    Q0,
}

impl Estimator {
    /// Estimator whose formula actually runs for this selection
    pub fn effective(&self) -> Self {
        match self {
            Estimator::Q0 => Estimator::L0,
            other => *other,
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimator::L0 => write!(f, "L0"),
            Estimator::R0 => write!(f, "R0"),
            Estimator::Q0 => write!(f, "Q0"),
        }
    }
}

impl FromStr for Estimator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L0" => Ok(Estimator::L0),
            "R0" => Ok(Estimator::R0),
            "Q0" => Ok(Estimator::Q0),
            other => Err(Error::InvalidParameter(format!(
                "Unknown estimator '{other}', expected one of L0, R0, Q0"
            ))),
        }
    }
}

/// Side of the funnel plot on which studies are presumed missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    /// Decide from the data
    #[default]
    Auto,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
            Side::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            "auto" => Ok(Side::Auto),
            other => Err(Error::InvalidParameter(format!(
                "Unknown side '{other}', expected one of left, right, auto"
            ))),
        }
    }
}

/// A side after automatic detection has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedSide {
    Left,
    Right,
}

impl ResolvedSide {
    /// Sign applied to centered effects: `+1` for right, `-1` for left
    pub fn multiplier(&self) -> f64 {
        match self {
            ResolvedSide::Left => -1.0,
            ResolvedSide::Right => 1.0,
        }
    }
}

impl From<ResolvedSide> for Side {
    fn from(side: ResolvedSide) -> Self {
        match side {
            ResolvedSide::Left => Side::Left,
            ResolvedSide::Right => Side::Right,
        }
    }
}

impl fmt::Display for ResolvedSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Side::from(*self).fmt(f)
    }
}

/// Parameters of one trim-and-fill analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimFillConfig {
    /// Missing-study estimator
    pub estimator: Estimator,
    /// Side to trim and fill
    pub side: Side,
    /// Cap on trim iterations, at least 1
    pub max_iterations: usize,
}

impl TrimFillConfig {
    pub fn new(estimator: Estimator, side: Side, max_iterations: usize) -> Self {
        Self {
            estimator,
            side,
            max_iterations,
        }
    }

    pub fn with_estimator(mut self, estimator: Estimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Check the parameters before any computation
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TrimFillConfig {
    fn default() -> Self {
        Self::new(Estimator::default(), Side::default(), DEFAULT_MAX_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrimFillConfig::default();
        assert_eq!(config.estimator, Estimator::L0);
        assert_eq!(config.side, Side::Auto);
        assert_eq!(config.max_iterations, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TrimFillConfig::default()
            .with_estimator(Estimator::R0)
            .with_side(Side::Left)
            .with_max_iterations(5);
        assert_eq!(config, TrimFillConfig::new(Estimator::R0, Side::Left, 5));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = TrimFillConfig::default().with_max_iterations(0);
        assert!(matches!(config.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_parse() {
        assert_eq!("r0".parse::<Estimator>().unwrap(), Estimator::R0);
        assert_eq!(" Q0 ".parse::<Estimator>().unwrap(), Estimator::Q0);
        assert!("L1".parse::<Estimator>().is_err());
        assert_eq!("RIGHT".parse::<Side>().unwrap(), Side::Right);
        assert!("up".parse::<Side>().is_err());
    }

    #[test]
    fn test_q0_runs_as_l0() {
        assert_eq!(Estimator::Q0.effective(), Estimator::L0);
        assert_eq!(Estimator::R0.effective(), Estimator::R0);
    }

    #[test]
    fn test_side_multiplier() {
        assert_eq!(ResolvedSide::Right.multiplier(), 1.0);
        assert_eq!(ResolvedSide::Left.multiplier(), -1.0);
        assert_eq!(ResolvedSide::Left.to_string(), "left");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TrimFillConfig::default()).unwrap();
        assert!(json.contains("\"L0\""));
        assert!(json.contains("\"auto\""));
        let back: TrimFillConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TrimFillConfig::default());
    }
}
