//! # Empirical Reliability - reliability statistics from recorded failure times.
//!
//! ## Overview
//!
//! Given a hand-entered list of times-to-failure and a query point `t`, this
//! library computes the empirical reliability indicators:
//!
//! - **F\*(t)**: probability of failure before `t`
//! - **R\*(t)**: probability of surviving to `t`, `1 - F*(t)`
//! - **f\*(t)**: failure density at `t`
//! - **λ\*(t)**: hazard rate, `f*(t) / R*(t)`
//! - **E\*T**: mean time to failure
//!
//! and renders the data and results as a plain-text report.
//!
//! ## Quick Start
//!
//! ```rust
//! use empirical_reliability::{FailureTimeSet, Report, ReportOptions, ResultSet};
//!
//! let mut times = FailureTimeSet::new();
//! for input in ["1", "3", "5", "7"] {
//!     times.add(input).unwrap();
//! }
//!
//! let result = ResultSet::compute(times.as_slice(), 4.0, "4").unwrap();
//! assert_eq!(result.cumulative_failure(), "0.250");
//! assert_eq!(result.reliability(), "0.750");
//!
//! let options = ReportOptions::default();
//! let text = Report::new(&times, Some(&result), &options).to_string();
//! assert!(text.contains("R*(t): 0.750"));
//! ```
//!
//! With no recorded times every ratio over `n` is undefined, so the metric
//! functions return [`MetricsError::InsufficientData`] instead of NaN.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for the data and result types
//! - `cli`: Build the `reliability` interactive shell (enabled by default)
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod failure_times;
pub mod metrics;
pub mod report;
pub mod result_set;
pub mod session;

pub use error::{Field, MetricsError, SessionError, ValidationError};
pub use failure_times::{FailureTimeSet, parse_non_negative};
pub use metrics::MetricValues;
pub use report::{DEFAULT_REPORT_FILE, Report, ReportOptions, ResultsBlock};
pub use result_set::ResultSet;
pub use session::{Session, SessionState};
