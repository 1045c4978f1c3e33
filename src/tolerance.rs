//! Tolerance-factor (k-factor) calculation.

use crate::critical::CriticalValueProvider;

/// Normal tolerance-interval multiplier: k = t · sqrt((n+1)/n · (1 + 1/(n−1))),
/// with t taken from the critical-value provider.
///
/// This is a large-sample approximation, not the noncentral chi-square based
/// derivation; the `coverage` argument is accepted for interface completeness
/// but does not enter the formula. Requires n ≥ 2 (the n − 1 denominator);
/// callers in this crate check sample size before invoking. k ≥ 0 whenever
/// t ≥ 0.
pub fn k_factor<P>(provider: &P, n: usize, alpha: f64, _coverage: f64) -> f64
where
    P: CriticalValueProvider,
{
    let t = provider.critical_value(n, alpha);
    let n = n as f64;
    t * ((n + 1.0) / n * (1.0 + 1.0 / (n - 1.0))).sqrt()
}
