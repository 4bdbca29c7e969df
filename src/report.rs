//! Plain-text rendering of recorded failure times and computed results.

use std::fmt::{self, Display};
use std::path::Path;

use crate::failure_times::FailureTimeSet;
use crate::result_set::ResultSet;

/// File name used when exporting without an explicit path.
pub const DEFAULT_REPORT_FILE: &str = "reliability_report.txt";

/// Presentation settings for a report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportOptions {
    /// First line of the report
    pub title: String,
    /// Unit label printed after every time value
    pub unit: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Reliability Report".to_string(),
            unit: "hours".to_string(),
        }
    }
}

/// The results block: query point, F*, R*, f*, λ* and mean time.
#[derive(Debug, Clone, Copy)]
pub struct ResultsBlock<'a> {
    result: &'a ResultSet,
    unit: &'a str,
}

impl<'a> ResultsBlock<'a> {
    /// Wraps `result` for display with `unit` after the mean time.
    #[must_use]
    pub const fn new(result: &'a ResultSet, unit: &'a str) -> Self {
        Self { result, unit }
    }
}

impl Display for ResultsBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "Results for t = {}:", r.query())?;
        writeln!(f, "F*(t): {}", r.cumulative_failure())?;
        writeln!(f, "R*(t): {}", r.reliability())?;
        writeln!(f, "f*(t): {}", r.density())?;
        writeln!(f, "λ*(t): {}", r.hazard_rate())?;
        writeln!(f, "E*T (mean time to failure): {} {}", r.mean_time(), self.unit)
    }
}

/// A complete report, rendered through [`Display`].
///
/// Lists every failure time with its 1-based position and, when a result is
/// present, appends the [`ResultsBlock`].
///
/// # Examples
///
/// ```
/// use empirical_reliability::{FailureTimeSet, Report, ReportOptions};
///
/// let times = FailureTimeSet::try_from(vec![10.0, 20.0]).unwrap();
/// let options = ReportOptions::default();
/// let text = Report::new(&times, None, &options).to_string();
/// assert_eq!(
///     text,
///     "Reliability Report\n\nRecorded failure times:\n1. 10 hours\n2. 20 hours\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    times: &'a FailureTimeSet,
    result: Option<&'a ResultSet>,
    options: &'a ReportOptions,
}

impl<'a> Report<'a> {
    /// Creates a report over the given state.
    #[must_use]
    pub const fn new(
        times: &'a FailureTimeSet,
        result: Option<&'a ResultSet>,
        options: &'a ReportOptions,
    ) -> Self {
        Self {
            times,
            result,
            options,
        }
    }

    /// Writes the rendered report to `path` as UTF-8, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns error if file writing fails.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_string())?;
        tracing::info!(path = %path.display(), entries = self.times.len(), "report exported");
        Ok(())
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.options.title)?;
        writeln!(f)?;
        writeln!(f, "Recorded failure times:")?;
        for (index, time) in self.times.iter().enumerate() {
            writeln!(f, "{}. {} {}", index + 1, time, self.options.unit)?;
        }
        if let Some(result) = self.result {
            writeln!(f)?;
            write!(f, "{}", ResultsBlock::new(result, &self.options.unit))?;
        }
        Ok(())
    }
}
