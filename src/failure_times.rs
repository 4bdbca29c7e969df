//! The ordered collection of recorded failure times.

use crate::error::{Field, ValidationError};

/// Parses a free-text numeric input into a non-negative, finite value.
///
/// Surrounding whitespace is ignored. `-0` is accepted and normalized to `0`.
///
/// # Errors
///
/// Returns [`ValidationError`] tagged with `field` if the input is empty,
/// not a number, NaN or infinite, or negative.
///
/// # Examples
///
/// ```
/// use empirical_reliability::{parse_non_negative, Field};
///
/// assert_eq!(parse_non_negative(" 12.5 ", Field::FailureTime), Ok(12.5));
/// assert!(parse_non_negative("-5", Field::FailureTime).is_err());
/// assert!(parse_non_negative("", Field::QueryPoint).is_err());
/// ```
pub fn parse_non_negative(input: &str, field: Field) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        input: trimmed.to_string(),
    })?;

    check_non_negative(value, field, trimmed)
}

fn check_non_negative(value: f64, field: Field, input: &str) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field,
            input: input.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    // -0.0 passes the check above
    Ok(value.abs())
}

/// Recorded times-to-failure in insertion order.
///
/// Every element is finite and `>= 0`. Duplicates are allowed. Insertion
/// order is display order, so the 1-based position shown to the user maps
/// directly to `index + 1`.
///
/// # Examples
///
/// ```
/// use empirical_reliability::FailureTimeSet;
///
/// let mut times = FailureTimeSet::new();
/// times.add("10").unwrap();
/// times.add("20").unwrap();
/// assert!(times.add("-1").is_err());
/// assert_eq!(times.as_slice(), &[10.0, 20.0]);
///
/// assert_eq!(times.remove_at(0), Some(10.0));
/// assert_eq!(times.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct FailureTimeSet {
    times: Vec<f64>,
}

impl FailureTimeSet {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { times: Vec::new() }
    }

    /// Parses `input` and appends it.
    ///
    /// Returns the appended value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the input is not a finite,
    /// non-negative number. The collection is left unchanged.
    pub fn add(&mut self, input: &str) -> Result<f64, ValidationError> {
        let value = parse_non_negative(input, Field::FailureTime)?;
        self.times.push(value);
        tracing::debug!(value, count = self.times.len(), "failure time added");
        Ok(value)
    }

    /// Appends an already-numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `value` is negative, NaN or infinite.
    pub fn push(&mut self, value: f64) -> Result<(), ValidationError> {
        let value = check_non_negative(value, Field::FailureTime, &value.to_string())?;
        self.times.push(value);
        tracing::debug!(value, count = self.times.len(), "failure time added");
        Ok(())
    }

    /// Removes the element at `index`, preserving the order of the rest.
    ///
    /// Returns `None` and leaves the collection untouched if `index` is out
    /// of range.
    pub fn remove_at(&mut self, index: usize) -> Option<f64> {
        if index >= self.times.len() {
            tracing::debug!(index, count = self.times.len(), "remove index out of range");
            return None;
        }
        let removed = self.times.remove(index);
        tracing::debug!(index, value = removed, count = self.times.len(), "failure time removed");
        Some(removed)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.times.clear();
    }

    /// Number of recorded failure times.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if nothing has been recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the element at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.times.get(index).copied()
    }

    /// The recorded times in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }

    /// Iterates over the recorded times in insertion order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.times.iter().copied()
    }
}

impl AsRef<[f64]> for FailureTimeSet {
    fn as_ref(&self) -> &[f64] {
        &self.times
    }
}

impl<'a> IntoIterator for &'a FailureTimeSet {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<f64>> for FailureTimeSet {
    type Error = ValidationError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for value in values {
            set.push(value)?;
        }
        Ok(set)
    }
}

impl From<FailureTimeSet> for Vec<f64> {
    fn from(set: FailureTimeSet) -> Self {
        set.times
    }
}
