//! Empirical reliability metrics over recorded failure times.
//!
//! Every function is pure and recomputes from the slice it is given. The
//! data sets are small and hand-entered, so nothing is cached.
//!
//! # Definitions
//!
//! For `n` recorded failure times `T_1 .. T_n` and a query point `t >= 0`:
//!
//! ```text
//! F*(t) = #{T_i <  t} / n
//! R*(t) = 1 - F*(t)
//! f*(t) = k / max(n * k, 1)        where k = #{T_i <= t}
//! λ*(t) = f*(t) / R*(t)            0 when R*(t) = 0
//! E*T   = (T_1 + .. + T_n) / n     0 when n = 0
//! ```
//!
//! The density reduces to `1/n` whenever at least one failure happened at
//! or before `t` and to `0` otherwise. It is kept in this form so reports
//! match the figures users already have.
//!
//! # Examples
//!
//! ```
//! use empirical_reliability::metrics::{cumulative_failure, evaluate, reliability};
//!
//! let times = [1.0, 3.0, 5.0, 7.0];
//! assert!((cumulative_failure(&times, 4.0).unwrap() - 0.25).abs() < 1e-12);
//! assert!((reliability(&times, 4.0).unwrap() - 0.75).abs() < 1e-12);
//!
//! let values = evaluate(&times, 4.0).unwrap();
//! assert!((values.mean_time - 4.0).abs() < 1e-12);
//! ```

use crate::error::MetricsError;

#[allow(clippy::cast_precision_loss)]
fn count(value: usize) -> f64 {
    value as f64
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    count(numerator) / count(denominator)
}

fn require_data(times: &[f64]) -> Result<usize, MetricsError> {
    match times.len() {
        0 => Err(MetricsError::InsufficientData),
        n => Ok(n),
    }
}

/// Empirical cumulative failure probability F*(t).
///
/// Fraction of recorded failures strictly before `t`.
///
/// # Errors
///
/// [`MetricsError::InsufficientData`] if `times` is empty.
pub fn cumulative_failure(times: &[f64], t: f64) -> Result<f64, MetricsError> {
    let n = require_data(times)?;
    let before = times.iter().filter(|&&time| time < t).count();
    Ok(ratio(before, n))
}

/// Empirical reliability R*(t) = 1 - F*(t).
///
/// # Errors
///
/// [`MetricsError::InsufficientData`] if `times` is empty.
pub fn reliability(times: &[f64], t: f64) -> Result<f64, MetricsError> {
    cumulative_failure(times, t).map(|f| 1.0 - f)
}

/// Empirical failure density f*(t).
///
/// Counts failures at or before `t` (`k`) and returns `k / (n * k)`, with the
/// denominator replaced by 1 when it is zero. The result is `1/n` if `k > 0`
/// and `0` otherwise.
///
/// # Errors
///
/// [`MetricsError::InsufficientData`] if `times` is empty.
pub fn failure_density(times: &[f64], t: f64) -> Result<f64, MetricsError> {
    let n = require_data(times)?;
    let at_or_before = times.iter().filter(|&&time| time <= t).count();
    let k = count(at_or_before);
    Ok(k / (count(n) * k).max(1.0))
}

/// Empirical hazard rate λ*(t) = f*(t) / R*(t).
///
/// Defined as 0 once every recorded unit has failed (R*(t) = 0).
///
/// # Errors
///
/// [`MetricsError::InsufficientData`] if `times` is empty.
pub fn hazard_rate(times: &[f64], t: f64) -> Result<f64, MetricsError> {
    let r = reliability(times, t)?;
    if r <= 0.0 {
        return Ok(0.0);
    }
    Ok(failure_density(times, t)? / r)
}

/// Mean time to failure E*T: arithmetic mean of the recorded times.
///
/// Returns 0 for an empty slice. Computed as a running mean so large but
/// finite times never overflow to infinity.
///
/// # Examples
///
/// ```
/// use empirical_reliability::metrics::mean_time_to_failure;
///
/// assert!((mean_time_to_failure(&[2.0, 4.0, 6.0]) - 4.0).abs() < 1e-12);
/// assert_eq!(mean_time_to_failure(&[]), 0.0);
/// ```
#[must_use]
pub fn mean_time_to_failure(times: &[f64]) -> f64 {
    times
        .iter()
        .enumerate()
        .fold(0.0, |mean, (i, &time)| mean + (time - mean) / count(i + 1))
}

/// All metrics evaluated at one query point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricValues {
    /// Query point the metrics were evaluated at
    pub t: f64,
    /// F*(t)
    pub cumulative_failure: f64,
    /// R*(t)
    pub reliability: f64,
    /// f*(t)
    pub density: f64,
    /// λ*(t)
    pub hazard_rate: f64,
    /// E*T
    pub mean_time: f64,
}

/// Evaluates F*, R*, f*, λ* at `t` together with the mean time to failure.
///
/// # Errors
///
/// [`MetricsError::InsufficientData`] if `times` is empty.
pub fn evaluate(times: &[f64], t: f64) -> Result<MetricValues, MetricsError> {
    Ok(MetricValues {
        t,
        cumulative_failure: cumulative_failure(times, t)?,
        reliability: reliability(times, t)?,
        density: failure_density(times, t)?,
        hazard_rate: hazard_rate(times, t)?,
        mean_time: mean_time_to_failure(times),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 4] = [1.0, 3.0, 5.0, 7.0];

    #[test]
    fn test_cumulative_failure_counts_strictly_before() {
        let f = cumulative_failure(&SAMPLE, 4.0).expect("data present");
        assert!((f - 0.25).abs() < 1e-12, "F(4) = {f}");

        // 3.0 is not strictly before 3.0
        let f = cumulative_failure(&SAMPLE, 3.0).expect("data present");
        assert!((f - 0.25).abs() < 1e-12, "F(3) = {f}");

        let f = cumulative_failure(&SAMPLE, 100.0).expect("data present");
        assert!((f - 1.0).abs() < 1e-12);
        assert!(cumulative_failure(&SAMPLE, 0.0).expect("data present").abs() < 1e-12);
    }

    #[test]
    fn test_reliability_complements() {
        let r = reliability(&SAMPLE, 4.0).expect("data present");
        assert!((r - 0.75).abs() < 1e-12, "R(4) = {r}");
    }

    #[test]
    fn test_density_counts_at_or_before() {
        let d = failure_density(&SAMPLE, 3.0).expect("data present");
        assert!((d - 0.25).abs() < 1e-12, "f(3) = {d}");
    }

    #[test]
    fn test_density_is_zero_before_first_failure() {
        let d = failure_density(&SAMPLE, 0.5).expect("data present");
        assert!(d.abs() < 1e-15, "f(0.5) = {d}");
    }

    #[test]
    fn test_density_is_one_over_n_after_first_failure() {
        for t in [1.0, 2.0, 6.0, 50.0] {
            let d = failure_density(&SAMPLE, t).expect("data present");
            assert!((d - 0.25).abs() < 1e-12, "f({t}) = {d}");
        }
    }

    #[test]
    fn test_hazard_rate() {
        let h = hazard_rate(&SAMPLE, 4.0).expect("data present");
        assert!((h - 0.25 / 0.75).abs() < 1e-12, "λ(4) = {h}");
    }

    #[test]
    fn test_hazard_rate_zero_when_all_failed() {
        let h = hazard_rate(&SAMPLE, 10.0).expect("data present");
        assert!(h.abs() < 1e-15, "λ(10) = {h}");
    }

    #[test]
    fn test_hazard_rate_zero_before_first_failure() {
        let h = hazard_rate(&SAMPLE, 0.0).expect("data present");
        assert!(h.abs() < 1e-15);
    }

    #[test]
    fn test_mean_time() {
        assert!((mean_time_to_failure(&[2.0, 4.0, 6.0]) - 4.0).abs() < 1e-12);
        assert!((mean_time_to_failure(&[5.0]) - 5.0).abs() < 1e-12);
        assert!(mean_time_to_failure(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_time_of_huge_values_stays_finite() {
        let mean = mean_time_to_failure(&[1e308, 1e308]);
        assert!(mean.is_finite(), "mean = {mean}");
        assert!((mean - 1e308).abs() < 1e292, "mean = {mean}");

        let mean = mean_time_to_failure(&[f64::MAX, f64::MAX, 0.0]);
        assert!(mean.is_finite(), "mean = {mean}");
    }

    #[test]
    fn test_density_on_large_sample() {
        let times: Vec<f64> = (0..10_000).map(f64::from).collect();
        let d = failure_density(&times, 5_000.0).expect("data present");
        assert!((d - 1.0e-4).abs() < 1e-15, "f(5000) = {d}");
    }

    #[test]
    fn test_empty_data_is_insufficient() {
        assert_eq!(cumulative_failure(&[], 1.0), Err(MetricsError::InsufficientData));
        assert_eq!(reliability(&[], 1.0), Err(MetricsError::InsufficientData));
        assert_eq!(failure_density(&[], 1.0), Err(MetricsError::InsufficientData));
        assert_eq!(hazard_rate(&[], 1.0), Err(MetricsError::InsufficientData));
        assert_eq!(evaluate(&[], 1.0), Err(MetricsError::InsufficientData));
    }

    #[test]
    fn test_evaluate_bundles_everything() {
        let values = evaluate(&SAMPLE, 4.0).expect("data present");
        assert!((values.t - 4.0).abs() < f64::EPSILON);
        assert!((values.cumulative_failure - 0.25).abs() < 1e-12);
        assert!((values.reliability - 0.75).abs() < 1e-12);
        assert!((values.density - 0.25).abs() < 1e-12);
        assert!((values.hazard_rate - 1.0 / 3.0).abs() < 1e-12);
        assert!((values.mean_time - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicates_count_individually() {
        let times = [2.0, 2.0, 2.0, 8.0];
        let f = cumulative_failure(&times, 3.0).expect("data present");
        assert!((f - 0.75).abs() < 1e-12);
    }
}
