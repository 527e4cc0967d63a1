//! Sensitivity analyses for meta-analysis
//!
//! This crate re-exports the workspace members:
//!
//! - [`meta_core`]: study records, validation, inverse-variance pooling and
//!   heterogeneity
//! - [`meta_confidence`]: normal and Knapp-Hartung confidence intervals
//! - [`meta_trimfill`]: Duval-Tweedie trim-and-fill
//! - `meta_polars` (feature `polars`): DataFrame extension trait
//!
//! # Example
//!
//! ```rust
//! use meta_sensitivity::prelude::*;
//!
//! let studies = vec![
//!     StudyRecord::new(0.1, 0.01),
//!     StudyRecord::new(0.2, 0.01),
//!     StudyRecord::new(0.3, 0.01),
//! ];
//! let result = trim_and_fill(&studies, TrimFillConfig::default()).unwrap();
//! assert_eq!(result.k0(), 0);
//! ```

pub use meta_confidence;
pub use meta_core;
pub use meta_trimfill;

#[cfg(feature = "polars")]
pub use meta_polars;

/// Types needed for a typical analysis
pub mod prelude {
    pub use meta_confidence::{
        ConfidenceInterval, ConfidenceLevel, KnappHartung, KnappHartungAnalysis,
        SignificanceMarker,
    };
    pub use meta_core::{Error, Result, StudyRecord};
    pub use meta_trimfill::{
        trim_and_fill, Estimator, ForestPlotData, Robustness, Side, TrimFill, TrimFillConfig,
        TrimFillResult,
    };

    #[cfg(feature = "polars")]
    pub use meta_polars::MetaAnalysisExt;
}
