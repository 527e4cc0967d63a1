//! Trim-and-fill sensitivity analysis for publication bias
//!
//! Trim-and-fill estimates how many studies are missing from one side of a
//! funnel plot, imputes their mirror images about the trimmed center and
//! re-pools. It is a sensitivity analysis: report the original and the filled
//! estimates together and never present the filled estimate as a correction.
//!
//! # Estimators
//!
//! - **L0**: linear rank estimator (default)
//! - **R0**: rank-sum estimator
//! - **Q0**: accepted for configuration but not implemented distinctly; it
//!   runs L0 and records a warning in the result
//!
//! # Example
//!
//! ```rust
//! use meta_core::StudyRecord;
//! use meta_trimfill::{trim_and_fill, Estimator, Side, TrimFillConfig};
//!
//! let studies: Vec<StudyRecord> = [
//!     (-0.3, 0.05), (-0.2, 0.05), (-0.1, 0.05), (0.0, 0.05),
//!     (0.1, 0.05), (0.2, 0.05), (0.3, 0.05),
//!     (1.5, 0.01), (1.8, 0.01), (2.0, 0.01),
//! ]
//! .into_iter()
//! .map(StudyRecord::from)
//! .collect();
//!
//! let config = TrimFillConfig::default()
//!     .with_estimator(Estimator::R0)
//!     .with_side(Side::Auto);
//! let result = trim_and_fill(&studies, config).unwrap();
//!
//! assert_eq!(result.k0(), 3);
//! assert!(result.pooled_filled() < result.pooled_original());
//! println!("{}", result.report());
//! ```

mod batch;
pub mod config;
mod estimators;
mod forest;
mod report;
mod result;
mod sensitivity;
mod side;
mod traits;
mod trim_fill;

// Re-exports
pub use batch::trim_and_fill_batch;
pub use config::{Estimator, ResolvedSide, Side, TrimFillConfig, DEFAULT_MAX_ITERATIONS};
pub use estimators::{LinearEstimator, RankEstimator};
pub use forest::{ForestPlotData, ForestRow, StudyOrigin};
pub use report::TrimFillReport;
pub use result::{TrimFillResult, TrimFillSummary, TrimFillWarning};
pub use sensitivity::{Robustness, SensitivityAssessment};
pub use side::{resolve_side, SideResolution};
pub use traits::MissingStudiesEstimator;
pub use trim_fill::{trim_and_fill, TrimFill, MIN_STUDIES};

// Convenience constructors

/// Trim-and-fill with the L0 estimator and automatic side detection
pub fn l0() -> TrimFill {
    TrimFill::new(TrimFillConfig::default())
}

/// Trim-and-fill with the R0 estimator and automatic side detection
pub fn r0() -> TrimFill {
    TrimFill::new(TrimFillConfig::default().with_estimator(Estimator::R0))
}
