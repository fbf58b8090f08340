//! Indicator output container.
//!
//! The [`IndicatorSeries`] type holds one computed value per input bar, with
//! a distinguished undefined entry (`None`) for warm-up indices and other
//! positions where insufficient history exists. Undefined is never encoded
//! as zero or NaN.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indicator output series aligned index-for-index with its input bars.
///
/// Every computation produces a fresh series of the same length as the input
/// sequence; entries are `Some(value)` where the indicator is defined and
/// `None` during warm-up or wherever history is missing.
///
/// Serializes as a plain array with `null` for undefined entries.
///
/// # Example
///
/// ```rust
/// use kline_core::IndicatorSeries;
///
/// let series = IndicatorSeries::from_vec(vec![None, None, Some(2.0), Some(3.0)]);
/// assert_eq!(series.len(), 4);
/// assert_eq!(series[0], None);
/// assert_eq!(series[2], Some(2.0));
/// assert_eq!(series.defined_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IndicatorSeries {
    data: Vec<Option<f64>>,
}

impl IndicatorSeries {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a series from an existing vector of entries.
    #[must_use]
    pub fn from_vec(data: Vec<Option<f64>>) -> Self {
        Self { data }
    }

    /// Create a series of `len` undefined entries.
    #[must_use]
    pub fn undefined(len: usize) -> Self {
        Self {
            data: vec![None; len],
        }
    }

    /// Returns the number of entries (defined or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append an entry.
    pub fn push(&mut self, value: Option<f64>) {
        self.data.push(value);
    }

    /// The value at `index`, or `None` if the entry is undefined or the
    /// index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied().flatten()
    }

    /// The last entry's value, `None` if undefined or the series is empty.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.data.last().copied().flatten()
    }

    /// `true` when the entry at `index` exists and is defined.
    #[must_use]
    pub fn is_defined(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Number of defined entries.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }

    /// Number of undefined entries.
    #[must_use]
    pub fn undefined_count(&self) -> usize {
        self.len() - self.defined_count()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &Option<f64>> {
        self.data.iter()
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.data
    }

    /// Consumes the series and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Option<f64>> {
        self.data
    }

    /// Apply a function to every defined entry, keeping undefined ones.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let data = self.data.iter().map(|v| v.map(&f)).collect();
        Self { data }
    }

    /// Materialize the series as plain values with `value` substituted for
    /// every undefined entry.
    #[must_use]
    pub fn fill_undefined(&self, value: f64) -> Vec<f64> {
        self.data.iter().map(|v| v.unwrap_or(value)).collect()
    }
}

impl Index<usize> for IndicatorSeries {
    type Output = Option<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl FromIterator<Option<f64>> for IndicatorSeries {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Option<f64>>> for IndicatorSeries {
    fn from(data: Vec<Option<f64>>) -> Self {
        Self { data }
    }
}

impl IntoIterator for IndicatorSeries {
    type Item = Option<f64>;
    type IntoIter = std::vec::IntoIter<Option<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a IndicatorSeries {
    type Item = &'a Option<f64>;
    type IntoIter = core::slice::Iter<'a, Option<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
