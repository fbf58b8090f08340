//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the unweighted mean of the previous n data points.

use kline_core::{
    bar::{Bar, Source},
    error::{KlineError, Result},
    series::IndicatorSeries,
    traits::Indicator,
    utils::rolling_mean,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the SMA indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmaConfig {
    /// The window size for the moving average.
    pub window: usize,
    /// Which bar field to average (close by default).
    pub source: Source,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            window: 20,
            source: Source::Close,
        }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            source: Source::Close,
        }
    }

    /// Set the bar field to average.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }
}

/// Simple Moving Average indicator.
///
/// The first `window - 1` outputs are undefined; from there each output is
/// the arithmetic mean of the trailing `window` values of the source field.
///
/// # Formula
///
/// SMA = (P1 + P2 + ... + Pn) / n
///
/// where Pn is the source value at period n.
#[derive(Debug, Clone)]
pub struct Sma {
    config: SmaConfig,
}

impl Indicator for Sma {
    type Output = IndicatorSeries;
    type Config = SmaConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        self.config.window
    }

    fn calculate(&self, bars: &[Bar]) -> Result<Self::Output> {
        if self.config.window == 0 {
            return Err(KlineError::InvalidPeriod(0));
        }

        let values = self.config.source.extract(bars);
        Ok(rolling_mean(&values, self.config.window))
    }
}
