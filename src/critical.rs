//! Critical-value determination.
//!
//! The interval procedures scale a standard error (or standard deviation) by a
//! two-sided critical value. The default provider reproduces a small tabulated
//! lookup with a normal-approximation fallback; an exact Student-t provider is
//! available behind the same trait for callers that want true quantiles.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided critical values at canonical sample sizes, computed for a
/// significance level of 0.05. Keys are sorted for binary search.
const T_TABLE: [(usize, f64); 6] = [
    (5, 2.776),
    (10, 2.262),
    (20, 2.093),
    (30, 2.045),
    (50, 2.009),
    (100, 1.984),
];

/// Normal-approximation fallback used when the sample size has no tabulated
/// entry.
pub const NORMAL_APPROX: f64 = 1.96;

/// Maps a sample size (and nominally a significance level) to a two-sided
/// critical value.
///
/// The trait exists so the approximate tabulated provider can be swapped for
/// an exact one without touching the interval procedures.
pub trait CriticalValueProvider {
    fn critical_value(&self, n: usize, alpha: f64) -> f64;
}

/// Tabulated critical values with a constant fallback.
///
/// This is the default provider. Note the approximation policy: the table was
/// computed at α = 0.05 and the fallback is the fixed normal constant, so the
/// returned value does not depend on the `alpha` argument. Kept for
/// compatibility; use [`ExactStudentT`] where true quantiles are required.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedCritical;

impl CriticalValueProvider for TabulatedCritical {
    fn critical_value(&self, n: usize, _alpha: f64) -> f64 {
        match T_TABLE.binary_search_by_key(&n, |&(size, _)| size) {
            Ok(idx) => T_TABLE[idx].1,
            Err(_) => NORMAL_APPROX,
        }
    }
}

/// Exact two-sided Student-t critical value at n − 1 degrees of freedom.
///
/// Opt-in alternative to [`TabulatedCritical`]; nothing in the engine selects
/// it implicitly. Falls back to [`NORMAL_APPROX`] when the distribution cannot
/// be constructed (n < 2).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactStudentT;

impl CriticalValueProvider for ExactStudentT {
    fn critical_value(&self, n: usize, alpha: f64) -> f64 {
        if n < 2 {
            return NORMAL_APPROX;
        }
        match StudentsT::new(0.0, 1.0, (n - 1) as f64) {
            Ok(dist) => dist.inverse_cdf(1.0 - alpha / 2.0),
            Err(_) => NORMAL_APPROX,
        }
    }
}
