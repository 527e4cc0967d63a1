//! Confidence intervals for pooled meta-analytic estimates
//!
//! This crate provides:
//!
//! - **Normal-approximation intervals**: `estimate ± z·SE`, with either the
//!   exact normal quantile or the conventional 1.96 multiplier
//! - **Knapp-Hartung intervals**: t-based intervals for random-effects
//!   estimates with a variance rescaled by residual heterogeneity
//! - **Significance markers**: star notation for p-values
//!
//! # Example
//!
//! ```rust
//! use meta_confidence::{KnappHartung, ConfidenceLevel};
//! use meta_core::StudyRecord;
//!
//! let studies = vec![
//!     StudyRecord::new(0.10, 0.04),
//!     StudyRecord::new(0.35, 0.02),
//!     StudyRecord::new(0.42, 0.05),
//!     StudyRecord::new(0.05, 0.03),
//! ];
//!
//! let analysis = KnappHartung::new(ConfidenceLevel::NINETY_FIVE)
//!     .analyze(&studies)
//!     .unwrap();
//! println!("standard: {}", analysis.standard_interval);
//! println!("adjusted: {}", analysis.adjusted.interval);
//! ```

mod knapp_hartung;
pub mod normal;
mod significance;
mod types;

// Re-exports
pub use knapp_hartung::{
    KnappHartung, KnappHartungAnalysis, KnappHartungResult, RECOMMENDED_BELOW_STUDIES,
};
pub use normal::{z_test, NormalCI, ZTest, CONVENTIONAL_Z_95};
pub use significance::SignificanceMarker;
pub use types::{ConfidenceInterval, ConfidenceLevel};

// Convenience constructor
pub fn knapp_hartung(confidence_level: f64) -> meta_core::Result<KnappHartung> {
    Ok(KnappHartung::new(ConfidenceLevel::new(confidence_level)?))
}
