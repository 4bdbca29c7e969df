//! Immutable snapshot of one metrics computation.

use crate::error::MetricsError;
use crate::metrics::{self, MetricValues};

/// Decimal places for F*(t), R*(t) and f*(t).
pub const PROBABILITY_PRECISION: usize = 3;

/// Decimal places for λ*(t). Wide enough to keep very small hazards visible.
pub const HAZARD_PRECISION: usize = 10;

/// Decimal places for the mean time to failure.
pub const MEAN_TIME_PRECISION: usize = 2;

/// The outcome of evaluating every metric at one query point.
///
/// Holds both the raw values and their fixed-precision renderings. The
/// query point is kept as the user entered it, and the mean time is taken
/// at computation time, so a stored result never drifts when the collection
/// is edited afterwards.
///
/// # Examples
///
/// ```
/// use empirical_reliability::ResultSet;
///
/// let result = ResultSet::compute(&[1.0, 3.0, 5.0, 7.0], 4.0, "4").unwrap();
/// assert_eq!(result.cumulative_failure(), "0.250");
/// assert_eq!(result.reliability(), "0.750");
/// assert_eq!(result.hazard_rate(), "0.3333333333");
/// assert_eq!(result.mean_time(), "4.00");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StoredResult"))]
pub struct ResultSet {
    query: String,
    values: MetricValues,
    cumulative_failure: String,
    reliability: String,
    density: String,
    hazard_rate: String,
    mean_time: String,
}

impl ResultSet {
    /// Evaluates all metrics for `times` at `t`.
    ///
    /// `query` is the query point as it should appear in reports; callers
    /// usually pass the text the user typed.
    ///
    /// # Errors
    ///
    /// [`MetricsError::InsufficientData`] if `times` is empty.
    pub fn compute(times: &[f64], t: f64, query: impl Into<String>) -> Result<Self, MetricsError> {
        let values = metrics::evaluate(times, t)?;
        Ok(Self::from_values(values, query))
    }

    /// Formats already-evaluated metric values.
    #[must_use]
    pub fn from_values(values: MetricValues, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            cumulative_failure: format!("{:.*}", PROBABILITY_PRECISION, values.cumulative_failure),
            reliability: format!("{:.*}", PROBABILITY_PRECISION, values.reliability),
            density: format!("{:.*}", PROBABILITY_PRECISION, values.density),
            hazard_rate: format!("{:.*}", HAZARD_PRECISION, values.hazard_rate),
            mean_time: format!("{:.*}", MEAN_TIME_PRECISION, values.mean_time),
            values,
        }
    }

    /// The query point as entered.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The unformatted metric values.
    #[must_use]
    pub const fn values(&self) -> &MetricValues {
        &self.values
    }

    /// F*(t), three decimals.
    #[must_use]
    pub fn cumulative_failure(&self) -> &str {
        &self.cumulative_failure
    }

    /// R*(t), three decimals.
    #[must_use]
    pub fn reliability(&self) -> &str {
        &self.reliability
    }

    /// f*(t), three decimals.
    #[must_use]
    pub fn density(&self) -> &str {
        &self.density
    }

    /// λ*(t), ten decimals.
    #[must_use]
    pub fn hazard_rate(&self) -> &str {
        &self.hazard_rate
    }

    /// E*T, two decimals.
    #[must_use]
    pub fn mean_time(&self) -> &str {
        &self.mean_time
    }
}

/// Deserialized form of [`ResultSet`]. The formatted strings are always
/// rebuilt from `values`, so they cannot disagree with them.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StoredResult {
    query: String,
    values: MetricValues,
}

#[cfg(feature = "serde")]
impl From<StoredResult> for ResultSet {
    fn from(stored: StoredResult) -> Self {
        Self::from_values(stored.values, stored.query)
    }
}
