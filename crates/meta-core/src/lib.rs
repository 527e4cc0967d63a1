//! Core types for meta-analytic sensitivity analysis
//!
//! This crate holds the pieces every analysis shares:
//!
//! - **Study records**: an effect size and its sampling variance, plus
//!   up-front validation of a study set
//! - **Pooling**: fixed-effect and random-effects inverse-variance estimates
//! - **Heterogeneity**: Cochran's Q, I² and the DerSimonian-Laird τ²
//! - **Ranking**: deterministic ordering, tie-aware ranks and correlation
//! - **Errors**: a single error type used across the workspace
//!
//! # Example
//!
//! ```rust
//! use meta_core::{fixed_effect, validate_studies, StudyRecord};
//!
//! let studies = vec![
//!     StudyRecord::new(0.1, 0.01),
//!     StudyRecord::new(0.2, 0.01),
//!     StudyRecord::new(0.3, 0.01),
//! ];
//! validate_studies(&studies, 3).unwrap();
//!
//! let pooled = fixed_effect(&studies).unwrap();
//! assert!((pooled.estimate - 0.2).abs() < 1e-12);
//! ```

pub mod error;
mod heterogeneity;
mod pooling;
pub mod ranking;
mod study;

pub use error::{Error, Result};
pub use heterogeneity::Heterogeneity;
pub use pooling::{fixed_effect, fixed_effect_center, random_effects, PooledEstimate};
pub use ranking::{average_ranks, pearson_correlation, top_indices};
pub use study::{studies_from_columns, validate_studies, StudyRecord};
