//! Core trait for batch indicator computation.
//!
//! Every indicator is a pure function of its input bars: construct it with a
//! config, call [`Indicator::calculate`], receive a fresh output. There is no
//! retained state between calls, so recomputing on unchanged input always
//! yields the same result.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::bar::Bar;
use crate::error::Result;

/// Bounds for indicator configuration types.
#[cfg(feature = "serde")]
pub trait IndicatorConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

/// Bounds for indicator configuration types.
#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> IndicatorConfig for T where T: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

#[cfg(not(feature = "serde"))]
impl<T> IndicatorConfig for T where T: Clone + Default + Send + Sync {}

/// Core trait for batch technical indicators over daily bars.
///
/// # Associated Types
///
/// - `Output` - the computed result (usually an `IndicatorSeries` or a
///   multi-series struct)
/// - `Config` - the indicator's parameters
pub trait Indicator: Send + Sync {
    /// The output type of calculations.
    type Output;

    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    fn new(config: Self::Config) -> Self;

    /// Returns the configuration.
    fn config(&self) -> &Self::Config;

    /// The smallest input length that produces at least one defined value.
    fn min_periods(&self) -> usize;

    /// Compute the indicator over the full bar sequence.
    ///
    /// An input shorter than [`min_periods`](Indicator::min_periods) is not
    /// an error; it yields an all-undefined output of the same length.
    ///
    /// # Errors
    ///
    /// Returns [`KlineError::InvalidPeriod`](crate::KlineError::InvalidPeriod)
    /// when the configuration carries a zero window.
    fn calculate(&self, bars: &[Bar]) -> Result<Self::Output>;
}
