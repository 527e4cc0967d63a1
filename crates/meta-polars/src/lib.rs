//! Polars integration for meta-analytic sensitivity analyses
//!
//! This crate exposes trim-and-fill and the Knapp-Hartung adjustment on
//! Polars DataFrames through a single extension trait. Each row is one
//! study; the caller names the effect-size and variance columns.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use meta_polars::{MetaAnalysisExt, TrimFillConfig, Estimator};
//!
//! let df = df![
//!     "yi" => [-0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3, 1.5, 1.8, 2.0],
//!     "vi" => [0.05, 0.05, 0.05, 0.05, 0.05, 0.05, 0.05, 0.01, 0.01, 0.01],
//! ]
//! .unwrap();
//!
//! let config = TrimFillConfig::default().with_estimator(Estimator::R0);
//! let summary = df.trim_and_fill_summary("yi", "vi", config).unwrap();
//! assert_eq!(summary.height(), 1);
//! ```

mod error;
mod methods;
mod traits;

pub use error::{Error, Result};
pub use traits::MetaAnalysisExt;

// Re-export configuration types used in the trait signatures
pub use meta_confidence::KnappHartungAnalysis;
pub use meta_trimfill::{Estimator, Side, TrimFillConfig, TrimFillResult};
