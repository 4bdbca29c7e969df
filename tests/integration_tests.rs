//! Integration tests for the empirical reliability library.

use empirical_reliability::metrics::{
    cumulative_failure, evaluate, failure_density, mean_time_to_failure, reliability,
};
use empirical_reliability::{
    FailureTimeSet, MetricsError, Report, ReportOptions, ResultSet, Session, SessionError,
    SessionState, ValidationError,
};

#[test]
fn test_end_to_end_workflow() {
    // 1. Record failure times
    let mut session = Session::default();
    for input in ["1", "3", "5", "7"] {
        session.add_time(input).unwrap();
    }
    assert_eq!(session.times().len(), 4);

    // 2. Compute at t = 4
    let result = session.compute("4").unwrap();
    assert_eq!(result.cumulative_failure(), "0.250");
    assert_eq!(result.reliability(), "0.750");
    assert_eq!(result.density(), "0.250");
    assert_eq!(result.hazard_rate(), "0.3333333333");
    assert_eq!(result.mean_time(), "4.00");
    assert_eq!(session.state(), SessionState::ResultsShown);

    // 3. Close the view; the result stays available for export
    session.close_results();
    assert_eq!(session.state(), SessionState::Idle);
    let text = session.report().to_string();
    assert!(text.contains("Results for t = 4:"));
    assert!(text.contains("E*T (mean time to failure): 4.00 hours"));

    // 4. Reset
    session.reset();
    assert!(session.times().is_empty());
    assert!(session.result().is_none());
    assert!(!session.report().to_string().contains("Results for"));
}

#[test]
fn test_worked_examples() {
    let times = [1.0, 3.0, 5.0, 7.0];
    assert!((cumulative_failure(&times, 4.0).unwrap() - 0.25).abs() < 1e-12);
    assert!((reliability(&times, 4.0).unwrap() - 0.75).abs() < 1e-12);
    assert!((failure_density(&times, 3.0).unwrap() - 0.25).abs() < 1e-12);
    assert!((mean_time_to_failure(&[2.0, 4.0, 6.0]) - 4.0).abs() < 1e-12);
}

#[test]
fn test_rejected_inputs_leave_collection_unchanged() {
    let mut session = Session::default();
    session.add_time("10").unwrap();

    assert!(matches!(
        session.add_time("-5"),
        Err(ValidationError::Negative { .. })
    ));
    assert!(matches!(
        session.add_time(""),
        Err(ValidationError::Empty { .. })
    ));
    assert_eq!(session.times().as_slice(), &[10.0]);
}

#[test]
fn test_no_data_is_reported_not_nan() {
    assert_eq!(evaluate(&[], 3.0), Err(MetricsError::InsufficientData));

    let mut session = Session::default();
    assert!(matches!(
        session.compute("3"),
        Err(SessionError::Metrics(MetricsError::InsufficientData))
    ));
    assert!(session.result().is_none());
}

#[test]
fn test_export_without_computation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reliability_report.txt");

    let mut session = Session::default();
    session.add_time("10").unwrap();
    session.add_time("20").unwrap();
    session.export(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "Reliability Report\n\nRecorded failure times:\n1. 10 hours\n2. 20 hours\n"
    );
}

#[test]
fn test_export_with_results_and_custom_unit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.txt");

    let mut session = Session::new(ReportOptions {
        title: "Fleet".to_string(),
        unit: "cycles".to_string(),
    });
    session.add_time("100").unwrap();
    session.add_time("300").unwrap();
    session.compute("200").unwrap();
    session.export(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Fleet\n"));
    assert!(text.contains("2. 300 cycles\n"));
    assert!(text.contains("F*(t): 0.500\n"));
    assert!(text.contains("λ*(t): 1.0000000000\n"));
    assert!(text.ends_with("E*T (mean time to failure): 200.00 cycles\n"));
}

#[test]
fn test_report_from_parts() {
    let times = FailureTimeSet::try_from(vec![4.0, 8.0]).unwrap();
    let result = ResultSet::compute(times.as_slice(), 5.0, "5").unwrap();
    let options = ReportOptions::default();
    let text = Report::new(&times, Some(&result), &options).to_string();
    assert!(text.contains("1. 4 hours\n2. 8 hours\n\nResults for t = 5:\n"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_roundtrip() {
    let times = FailureTimeSet::try_from(vec![1.0, 2.5]).unwrap();
    let json = serde_json::to_string(&times).unwrap();
    assert_eq!(json, "[1.0,2.5]");
    let parsed: FailureTimeSet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, times);

    let result = ResultSet::compute(times.as_slice(), 2.0, "2").unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let parsed: ResultSet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}
