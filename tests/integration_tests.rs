// End-to-end tests: free-form text in, selected interval/test records out.

use anyhow::Result;
use interval_statistics::{AnalysisRequest, StatsError, analyze};

#[test]
fn default_request_runs_all_three_procedures() -> Result<()> {
    let report = analyze("12.3, 12.5, 12.7", &AnalysisRequest::default())?;

    assert_eq!(report.sample, vec![12.3, 12.5, 12.7]);

    let ci = report.confidence.expect("CI selected by default");
    let ti = report.tolerance.expect("TI selected by default");
    let tost = report.tost.expect("TOST selected by default");

    assert!(ci.lower <= 12.5 && 12.5 <= ci.upper);
    assert!(ti.lower <= 12.5 && 12.5 <= ti.upper);
    assert!(ti.upper - ti.lower >= ci.upper - ci.lower);
    // mean of 12.5 sits far outside the default ±0.5 margin
    assert!(!tost.equivalent);
    Ok(())
}

#[test]
fn selection_flags_are_honored() -> Result<()> {
    let request = AnalysisRequest {
        run_ti: false,
        run_tost: false,
        ..AnalysisRequest::default()
    };
    let report = analyze("1 2 3 4 5", &request)?;

    assert!(report.confidence.is_some());
    assert!(report.tolerance.is_none());
    assert!(report.tost.is_none());
    Ok(())
}

#[test]
fn request_selecting_nothing_returns_the_sample_alone() -> Result<()> {
    let request = AnalysisRequest {
        run_ci: false,
        run_ti: false,
        run_tost: false,
        ..AnalysisRequest::default()
    };
    // a single value would be rejected by every procedure, but none is selected
    let report = analyze("42.0", &request)?;

    assert_eq!(report.sample, vec![42.0]);
    assert!(report.confidence.is_none());
    assert!(report.tolerance.is_none());
    assert!(report.tost.is_none());
    Ok(())
}

#[test]
fn unusable_text_fails_with_insufficient_data() {
    let err = analyze("a b c", &AnalysisRequest::default()).unwrap_err();
    assert_eq!(err, StatsError::InsufficientData { n: 0 });

    let err = analyze("7.5, nope", &AnalysisRequest::default()).unwrap_err();
    assert_eq!(err, StatsError::InsufficientData { n: 1 });
}

#[test]
fn noisy_pasted_input_is_tolerated() -> Result<()> {
    let report = analyze("1, x, 3, 4.5 --", &AnalysisRequest::default())?;
    assert_eq!(report.sample, vec![1.0, 3.0, 4.5]);
    Ok(())
}

#[test]
fn equivalence_verdict_flips_with_the_sample_location() -> Result<()> {
    let request = AnalysisRequest {
        run_ci: false,
        run_ti: false,
        ..AnalysisRequest::default()
    };

    let near_zero = analyze("0.01 -0.02 0.015 -0.005", &request)?;
    assert!(near_zero.tost.expect("TOST selected").equivalent);

    let shifted = analyze("4.9 5.0 5.1", &request)?;
    assert!(!shifted.tost.expect("TOST selected").equivalent);
    Ok(())
}

#[test]
fn invalid_configuration_is_rejected_before_computation() {
    let request = AnalysisRequest {
        alpha: 1.5,
        ..AnalysisRequest::default()
    };
    let err = analyze("1 2 3", &request).unwrap_err();
    assert!(matches!(
        err,
        StatsError::InvalidConfig { parameter: "alpha", .. }
    ));
}
