//! # interval-statistics
//!
//! A small, pure statistics engine for univariate samples: parametric confidence
//! intervals for the mean, normal tolerance intervals, and Two-One-Sided-Tests
//! (TOST) equivalence verdicts against a symmetric margin.
//!
//! The engine is stateless and deterministic: every procedure is a pure function
//! over an immutable sample and a handful of scalar parameters, and either returns
//! a complete result record or fails fast with a typed error. Presentation concerns
//! (rounding, labels, plotting) are left entirely to the caller.
//!
//! ## Core Features
//!
//! - **Sample Parsing**: Tolerant tokenization of free-form numeric text (pasted
//!   data with stray labels or separators is expected, not an error)
//! - **Confidence Intervals**: Two-sided t-based interval for the population mean
//! - **Tolerance Intervals**: Large-sample normal tolerance interval via a
//!   k-factor approximation
//! - **TOST Equivalence**: Two one-sided tests against a symmetric margin
//!
//! ## Quick Start
//!
//! Use the [`SampleIntervals`] trait on a slice of observations, or [`analyze`]
//! to go from raw text plus an [`AnalysisRequest`] straight to an
//! [`AnalysisReport`]. Critical values come from a tabulated provider by default;
//! the [`critical::CriticalValueProvider`] trait lets callers swap in the exact
//! Student-t provider instead.
//!
//! ## Module Organization
//!
//! - **[`parse`]**: Free-text tokenization into a clean sample
//! - **[`descriptive`]**: Mean and Bessel-corrected standard deviation
//! - **[`critical`]**: Critical-value providers (tabulated and exact)
//! - **[`tolerance`]**: Tolerance-factor (k-factor) calculation
//! - **[`engine`]**: The three interval/test procedures and orchestration

pub mod critical;
pub mod descriptive;
pub mod engine;
pub mod error;
pub mod parse;
pub mod tolerance;

pub use critical::{CriticalValueProvider, ExactStudentT, TabulatedCritical};
pub use engine::{
    AnalysisReport, AnalysisRequest, ConfidenceInterval, SampleIntervals, ToleranceInterval,
    TostOutcome, analyze, confidence_interval, tolerance_interval, tost_equivalence,
};
pub use error::StatsError;
pub use parse::parse_sample;
