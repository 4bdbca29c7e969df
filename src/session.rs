//! Session state for the interactive calculator.
//!
//! A [`Session`] owns everything one user works with: the recorded failure
//! times, the pending text of both input fields, the latest [`ResultSet`],
//! the single message slot and whether the results view is open. Every
//! operation runs to completion. A rejected operation only updates the
//! message and the pending text of the field it read.

use std::path::Path;

use crate::error::{Field, SessionError, ValidationError};
use crate::failure_times::{FailureTimeSet, parse_non_negative};
use crate::report::{Report, ReportOptions};
use crate::result_set::ResultSet;

/// Whether the results view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Results view closed. A stored result may still exist.
    #[default]
    Idle,
    /// Results view open over the latest result.
    ResultsShown,
}

/// One interactive calculator session.
///
/// # Examples
///
/// ```
/// use empirical_reliability::{Session, SessionState};
///
/// let mut session = Session::default();
/// session.add_time("2").unwrap();
/// session.add_time("4").unwrap();
/// session.add_time("6").unwrap();
///
/// let result = session.compute("5").unwrap();
/// assert_eq!(result.mean_time(), "4.00");
/// assert_eq!(session.state(), SessionState::ResultsShown);
///
/// session.reset();
/// assert!(session.times().is_empty());
/// assert!(session.result().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    times: FailureTimeSet,
    time_input: String,
    query_input: String,
    result: Option<ResultSet>,
    message: Option<String>,
    state: SessionState,
    options: ReportOptions,
}

impl Session {
    /// Creates an empty session rendering reports with `options`.
    #[must_use]
    pub fn new(options: ReportOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Recorded failure times.
    #[must_use]
    pub const fn times(&self) -> &FailureTimeSet {
        &self.times
    }

    /// The latest successful computation, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&ResultSet> {
        self.result.as_ref()
    }

    /// The current validation or failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Pending text of the failure-time field.
    #[must_use]
    pub fn time_input(&self) -> &str {
        &self.time_input
    }

    /// Pending text of the query-point field.
    #[must_use]
    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    /// Report presentation settings.
    #[must_use]
    pub const fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Replaces the pending text of `field` without validating it.
    pub fn set_input(&mut self, field: Field, text: impl Into<String>) {
        match field {
            Field::FailureTime => self.time_input = text.into(),
            Field::QueryPoint => self.query_input = text.into(),
        }
    }

    /// Validates `input` and appends it to the failure times.
    ///
    /// On success the failure-time field is cleared along with any message.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] and records its message; the collection
    /// is not modified.
    pub fn add_time(&mut self, input: &str) -> Result<f64, ValidationError> {
        self.time_input = input.to_string();
        self.submit_time()
    }

    /// Validates the pending failure-time text and appends it.
    ///
    /// # Errors
    ///
    /// See [`Session::add_time`].
    pub fn submit_time(&mut self) -> Result<f64, ValidationError> {
        match self.times.add(&self.time_input) {
            Ok(value) => {
                self.time_input.clear();
                self.message = None;
                Ok(value)
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Removes the failure time at the 0-based `index`.
    ///
    /// Out-of-range indices are ignored. The view state is not affected.
    pub fn remove_time(&mut self, index: usize) -> Option<f64> {
        self.times.remove_at(index)
    }

    /// Validates `input` as the query point and evaluates every metric.
    ///
    /// On success the result replaces any previous one, the results view is
    /// opened and the message is cleared. The query-point text is kept.
    ///
    /// # Errors
    ///
    /// [`SessionError::Validation`] for bad input or
    /// [`SessionError::Metrics`] when no failure times are recorded. The
    /// stored result and view state are left as they were.
    pub fn compute(&mut self, input: &str) -> Result<&ResultSet, SessionError> {
        self.query_input = input.to_string();
        self.submit_query()
    }

    /// Evaluates every metric at the pending query-point text.
    ///
    /// # Errors
    ///
    /// See [`Session::compute`].
    pub fn submit_query(&mut self) -> Result<&ResultSet, SessionError> {
        let t = parse_non_negative(&self.query_input, Field::QueryPoint)
            .map_err(|err| SessionError::from(self.reject(err)))?;

        let result = match ResultSet::compute(self.times.as_slice(), t, self.query_input.trim()) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(%err, "metrics not computed");
                self.message = Some(err.to_string());
                return Err(err.into());
            }
        };

        tracing::info!(
            t,
            n = self.times.len(),
            cumulative_failure = result.cumulative_failure(),
            reliability = result.reliability(),
            density = result.density(),
            hazard_rate = result.hazard_rate(),
            mean_time = result.mean_time(),
            "metrics computed"
        );
        self.message = None;
        self.state = SessionState::ResultsShown;
        Ok(&*self.result.insert(result))
    }

    /// Hides the results view. The stored result is kept.
    pub fn close_results(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Re-opens the results view if a result is stored.
    ///
    /// Returns whether the view is now showing.
    pub fn show_results(&mut self) -> bool {
        if self.result.is_some() {
            self.state = SessionState::ResultsShown;
        }
        self.state == SessionState::ResultsShown
    }

    /// Clears failure times, both inputs, the stored result and the message,
    /// and closes the results view.
    pub fn reset(&mut self) {
        self.times.clear();
        self.time_input.clear();
        self.query_input.clear();
        self.result = None;
        self.message = None;
        self.state = SessionState::Idle;
        tracing::debug!("session reset");
    }

    /// The report for the current state.
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report::new(&self.times, self.result.as_ref(), &self.options)
    }

    /// Writes the current report to `path`.
    ///
    /// # Errors
    ///
    /// [`SessionError::Export`] if the file cannot be written. The message
    /// slot records the failure.
    pub fn export(&mut self, path: &Path) -> Result<(), SessionError> {
        if let Err(err) = self.report().write_to(path) {
            tracing::warn!(path = %path.display(), %err, "report export failed");
            let err = SessionError::from(err);
            self.message = Some(err.to_string());
            return Err(err);
        }
        Ok(())
    }

    fn reject(&mut self, err: ValidationError) -> ValidationError {
        tracing::warn!(field = %err.field(), %err, "input rejected");
        self.message = Some(err.to_string());
        err
    }
}
