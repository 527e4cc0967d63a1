//! Plain-text comparison report

use crate::result::TrimFillResult;
use std::fmt;

/// Side-by-side comparison of the original and filled analyses
///
/// Rendering happens in `Display`; nothing is printed by the library.
#[derive(Debug, Clone, Copy)]
pub struct TrimFillReport<'a> {
    result: &'a TrimFillResult,
}

impl<'a> TrimFillReport<'a> {
    pub fn new(result: &'a TrimFillResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for TrimFillReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        let rule = "-".repeat(75);

        writeln!(f, "Trim-and-fill sensitivity analysis")?;
        writeln!(
            f,
            "Estimator: {}, side: {}{}, iterations: {}{}",
            r.estimator(),
            r.side(),
            if r.side_resolution().auto_detected { " (auto)" } else { "" },
            r.iterations(),
            if r.converged() { "" } else { " (not converged)" }
        )?;
        writeln!(f, "Studies missing (k0): {}", r.k0())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<30} {:<15} {:<15} {:<15}",
            "Estimate", "Original", "After filling", "Difference"
        )?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<30} {:<15} {:<15} {:<15}",
            "k (# studies)",
            r.k_original(),
            r.k_filled(),
            r.k0()
        )?;
        writeln!(
            f,
            "{:<30} {:<15.4} {:<15.4} {:<15.4}",
            "Pooled effect",
            r.pooled_original(),
            r.pooled_filled(),
            r.pooled_change()
        )?;
        writeln!(
            f,
            "{:<30} {:<15.4} {:<15.4} {:<15.4}",
            "Standard error",
            r.se_original(),
            r.se_filled(),
            r.se_filled() - r.se_original()
        )?;
        writeln!(
            f,
            "{:<30} {:<15.4} {:<15.4} {:<15}",
            "95% CI lower",
            r.ci_original().lower,
            r.ci_filled().lower,
            "-"
        )?;
        writeln!(
            f,
            "{:<30} {:<15.4} {:<15.4} {:<15}",
            "95% CI upper",
            r.ci_original().upper,
            r.ci_filled().upper,
            "-"
        )?;
        writeln!(f)?;

        for line in r.sensitivity().interpretation() {
            writeln!(f, "  {line}")?;
        }
        for warning in r.warnings() {
            writeln!(f, "  Warning: {warning}")?;
        }
        Ok(())
    }
}
