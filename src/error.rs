//! Error types for input validation, metric evaluation and sessions.

use std::fmt::Display;

use thiserror::Error;

/// The free-text numeric field an input came from.
///
/// Used to pick the message shown to the user when validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// The "failure time to add" field
    FailureTime,
    /// The "query point t" field
    QueryPoint,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailureTime => write!(f, "failure time"),
            Self::QueryPoint => write!(f, "query point t"),
        }
    }
}

/// A numeric field was empty, unparsable, non-finite or negative.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Nothing was entered
    #[error("The {field} must not be empty.")]
    Empty {
        /// Field the input came from
        field: Field,
    },

    /// Input is not a number
    #[error("The {field} must be a number, got {input:?}.")]
    NotANumber {
        /// Field the input came from
        field: Field,
        /// The rejected text
        input: String,
    },

    /// Input parsed to NaN or an infinity
    #[error("The {field} must be a finite number, got {input:?}.")]
    NotFinite {
        /// Field the input came from
        field: Field,
        /// The rejected text
        input: String,
    },

    /// Input is below zero
    #[error("The {field} must not be negative, got {value}.")]
    Negative {
        /// Field the input came from
        field: Field,
        /// The rejected value
        value: f64,
    },
}

impl ValidationError {
    /// Returns the field whose input was rejected.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Empty { field }
            | Self::NotANumber { field, .. }
            | Self::NotFinite { field, .. }
            | Self::Negative { field, .. } => *field,
        }
    }
}

/// A metric could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// No failure times were recorded, so every ratio over n is undefined
    #[error("No failure times recorded; add at least one before computing metrics.")]
    InsufficientData,
}

/// Errors surfaced by [`Session`](crate::Session) operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Rejected user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Metrics could not be computed
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Export(#[from] std::io::Error),
}
