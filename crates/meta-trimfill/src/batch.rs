//! Independent analyses over many study sets
//!
//! Each analysis reads only its own inputs, so with the `parallel` feature the
//! sets are processed on the rayon thread pool. Output order always matches
//! input order.

use crate::config::TrimFillConfig;
use crate::result::TrimFillResult;
use crate::trim_fill::TrimFill;
use meta_core::{Result, StudyRecord};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Analyse every dataset with the same configuration
///
/// Failures are reported per dataset; one invalid set does not stop the rest.
pub fn trim_and_fill_batch<S>(datasets: &[S], config: TrimFillConfig) -> Vec<Result<TrimFillResult>>
where
    S: AsRef<[StudyRecord]> + Sync,
{
    let estimator = TrimFill::new(config);

    #[cfg(feature = "parallel")]
    {
        datasets
            .par_iter()
            .map(|studies| estimator.estimate(studies.as_ref()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        datasets
            .iter()
            .map(|studies| estimator.estimate(studies.as_ref()))
            .collect()
    }
}
