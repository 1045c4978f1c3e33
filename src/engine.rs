//! The three interval/test procedures and their orchestration.
//!
//! All procedures are pure: they validate configuration, check the sample size
//! explicitly, and either return a complete result record or fail with a single
//! [`StatsError`]. Nothing here retains state between calls.

use crate::critical::{CriticalValueProvider, TabulatedCritical};
use crate::descriptive::{mean, sample_std_dev};
use crate::error::StatsError;
use crate::parse::parse_sample;
use crate::tolerance::k_factor;

/// Fixed two-sided 0.05 multiplier used by the equivalence test.
///
/// The equivalence test applies this constant regardless of the `alpha`
/// argument, so for α ≠ 0.05 the equivalence decision and the configured α are
/// inconsistent. Kept as-is for compatibility; see the tabulated provider
/// notes in [`crate::critical`] for the same policy on the interval side.
pub const TOST_CRITICAL: f64 = 1.96;

/// Two-sided confidence interval for the population mean.
///
/// Invariant: `lower <= upper`, and both bracket the sample mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Normal tolerance interval expected to cover a target proportion of the
/// population.
///
/// Invariant: `lower <= upper`, and both bracket the sample mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Outcome of a TOST equivalence test against a symmetric margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TostOutcome {
    /// Whether both one-sided statistics exceeded [`TOST_CRITICAL`].
    pub equivalent: bool,
    pub lower: f64,
    pub upper: f64,
    /// The sample mean the verdict was computed from.
    pub mean: f64,
}

fn check_unit_interval(parameter: &'static str, value: f64) -> Result<(), StatsError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(StatsError::InvalidConfig { parameter, value })
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<(), StatsError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(StatsError::InvalidConfig { parameter, value })
    }
}

fn check_sample_size(sample: &[f64]) -> Result<usize, StatsError> {
    let n = sample.len();
    if n < 2 {
        return Err(StatsError::InsufficientData { n });
    }
    Ok(n)
}

/// Compute a two-sided confidence interval for the population mean.
///
/// The half-width is t · s / √n, with t taken from the critical-value
/// provider. The interval always brackets the sample mean and collapses to a
/// point exactly when the sample is constant (s = 0).
///
/// # Errors
///
/// [`StatsError::InvalidConfig`] if `alpha` is outside (0, 1);
/// [`StatsError::InsufficientData`] if the sample holds fewer than two values.
pub fn confidence_interval<P>(
    sample: &[f64],
    alpha: f64,
    provider: &P,
) -> Result<ConfidenceInterval, StatsError>
where
    P: CriticalValueProvider,
{
    check_unit_interval("alpha", alpha)?;
    let n = check_sample_size(sample)?;

    let m = mean(sample);
    let s = sample_std_dev(sample);
    let t = provider.critical_value(n, alpha);
    let margin = t * s / (n as f64).sqrt();

    Ok(ConfidenceInterval {
        lower: m - margin,
        upper: m + margin,
    })
}

/// Compute a normal tolerance interval expected to cover a proportion
/// `coverage` of the population.
///
/// The half-width is k · s with k from [`k_factor`]. For a fixed sample and α
/// the tolerance interval is at least as wide as the confidence interval,
/// since k ≥ t/√n for all n ≥ 2 under the k-factor formula.
///
/// # Errors
///
/// [`StatsError::InvalidConfig`] if `alpha` or `coverage` is outside (0, 1);
/// [`StatsError::InsufficientData`] if the sample holds fewer than two values.
pub fn tolerance_interval<P>(
    sample: &[f64],
    alpha: f64,
    coverage: f64,
    provider: &P,
) -> Result<ToleranceInterval, StatsError>
where
    P: CriticalValueProvider,
{
    check_unit_interval("alpha", alpha)?;
    check_unit_interval("coverage", coverage)?;
    let n = check_sample_size(sample)?;

    let m = mean(sample);
    let s = sample_std_dev(sample);
    let k = k_factor(provider, n, alpha, coverage);

    Ok(ToleranceInterval {
        lower: m - k * s,
        upper: m + k * s,
    })
}

/// Run a TOST equivalence test against the symmetric margin ±`margin`.
///
/// Two one-sided statistics are formed from the standard error se = s/√n:
/// tLow = (m + margin)/se against the lower bound and tHigh = (margin − m)/se
/// against the upper bound. The sample is declared equivalent iff both exceed
/// [`TOST_CRITICAL`]. The returned bounds are m ∓ [`TOST_CRITICAL`] · se.
/// `alpha` is validated but does not enter the decision (see
/// [`TOST_CRITICAL`]).
///
/// A constant sample (s = 0) follows IEEE semantics: the statistics become
/// infinite, so the verdict is `true` exactly when the mean lies strictly
/// inside the margin.
///
/// # Errors
///
/// [`StatsError::InvalidConfig`] if `margin` is not strictly positive or
/// `alpha` is outside (0, 1); [`StatsError::InsufficientData`] if the sample
/// holds fewer than two values.
pub fn tost_equivalence(
    sample: &[f64],
    margin: f64,
    alpha: f64,
) -> Result<TostOutcome, StatsError> {
    check_positive("margin", margin)?;
    check_unit_interval("alpha", alpha)?;
    let n = check_sample_size(sample)?;

    let m = mean(sample);
    let s = sample_std_dev(sample);
    let se = s / (n as f64).sqrt();

    let t_low = (m + margin) / se;
    let t_high = (margin - m) / se;

    Ok(TostOutcome {
        equivalent: t_low > TOST_CRITICAL && t_high > TOST_CRITICAL,
        lower: m - TOST_CRITICAL * se,
        upper: m + TOST_CRITICAL * se,
        mean: m,
    })
}

/// Interval and equivalence procedures directly on a slice of observations,
/// using the default [`TabulatedCritical`] provider.
pub trait SampleIntervals {
    fn confidence_interval(&self, alpha: f64) -> Result<ConfidenceInterval, StatsError>;

    fn tolerance_interval(
        &self,
        alpha: f64,
        coverage: f64,
    ) -> Result<ToleranceInterval, StatsError>;

    fn tost_equivalence(&self, margin: f64, alpha: f64) -> Result<TostOutcome, StatsError>;
}

impl SampleIntervals for [f64] {
    fn confidence_interval(&self, alpha: f64) -> Result<ConfidenceInterval, StatsError> {
        confidence_interval(self, alpha, &TabulatedCritical)
    }

    fn tolerance_interval(
        &self,
        alpha: f64,
        coverage: f64,
    ) -> Result<ToleranceInterval, StatsError> {
        tolerance_interval(self, alpha, coverage, &TabulatedCritical)
    }

    fn tost_equivalence(&self, margin: f64, alpha: f64) -> Result<TostOutcome, StatsError> {
        tost_equivalence(self, margin, alpha)
    }
}

/// Which procedures to run and with what configuration.
///
/// The scalars are independent: `coverage` only matters to the tolerance
/// interval and `margin` only to the equivalence test. Each procedure
/// validates the scalars it uses on every invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisRequest {
    /// Nominal two-sided significance level, in (0, 1).
    pub alpha: f64,
    /// Target population coverage for the tolerance interval, in (0, 1).
    pub coverage: f64,
    /// Symmetric equivalence margin for TOST, strictly positive.
    pub margin: f64,
    pub run_ci: bool,
    pub run_ti: bool,
    pub run_tost: bool,
}

impl Default for AnalysisRequest {
    /// α = 0.05, coverage = 0.99, margin = 0.5, all three procedures selected.
    fn default() -> Self {
        AnalysisRequest {
            alpha: 0.05,
            coverage: 0.99,
            margin: 0.5,
            run_ci: true,
            run_ti: true,
            run_tost: true,
        }
    }
}

/// Results of an [`analyze`] call: the parsed sample plus one record per
/// selected procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub sample: Vec<f64>,
    pub confidence: Option<ConfidenceInterval>,
    pub tolerance: Option<ToleranceInterval>,
    pub tost: Option<TostOutcome>,
}

/// Parse free-form text and run the selected procedures over the surviving
/// sample.
///
/// Unparseable tokens are dropped by the parser, so a sample that ends up
/// smaller than two values fails with [`StatsError::InsufficientData`] as soon
/// as any procedure is selected. A request selecting nothing returns the
/// parsed sample alone.
///
/// # Example
/// ```
/// use interval_statistics::{AnalysisRequest, analyze};
///
/// let report = analyze("12.3, 12.5, 12.7", &AnalysisRequest::default()).unwrap();
/// let ci = report.confidence.unwrap();
/// assert!(ci.lower <= 12.5 && 12.5 <= ci.upper);
/// ```
pub fn analyze(text: &str, request: &AnalysisRequest) -> Result<AnalysisReport, StatsError> {
    let sample = parse_sample(text);

    let confidence = if request.run_ci {
        Some(sample.confidence_interval(request.alpha)?)
    } else {
        None
    };

    let tolerance = if request.run_ti {
        Some(sample.tolerance_interval(request.alpha, request.coverage)?)
    } else {
        None
    };

    let tost = if request.run_tost {
        Some(sample.tost_equivalence(request.margin, request.alpha)?)
    } else {
        None
    };

    Ok(AnalysisReport {
        sample,
        confidence,
        tolerance,
        tost,
    })
}
