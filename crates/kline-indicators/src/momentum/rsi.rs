//! Wilder Relative Strength Index (RSI) indicator.
//!
//! RSI is a momentum oscillator that measures the speed and magnitude
//! of recent price changes to evaluate overbought or oversold conditions.

use kline_core::{
    bar::{closes, Bar},
    error::{KlineError, Result},
    series::IndicatorSeries,
    traits::Indicator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the RSI indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsiConfig {
    /// The lookback period (default: 14; the chart panel uses 6 and 12).
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Wilder Relative Strength Index indicator.
///
/// Runs entirely per call; no state survives between invocations.
///
/// # Formula
///
/// RS = Average Gain / Average Loss
/// RSI = 100 - (100 / (1 + RS))
///
/// Wilder's smoothing is used: alpha = 1/period (not 2/(period+1)).
///
/// # Warm-up
///
/// Index 0 has no prior close and is undefined, as is every index below
/// `period`. At `i = period` the raw gain/loss sums accumulated over bars
/// `1..period` are divided by `period` and then one smoothing step is
/// applied with bar `period`'s change before the first value is emitted;
/// from `i > period` the standard recurrence runs. The extra smoothing
/// step at the boundary reproduces the behavior charts were rendered
/// with and must not be replaced by the more common `(period-1)`-term
/// seed average.
///
/// # Edge Cases
///
/// - Average loss 0 (all gains, or a flat warm-up) yields RSI = 100.
/// - A period of at least the series length yields an all-undefined series.
#[derive(Debug, Clone)]
pub struct Rsi {
    config: RsiConfig,
}

impl Rsi {
    fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        }
    }
}

impl Indicator for Rsi {
    type Output = IndicatorSeries;
    type Config = RsiConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        // First defined output sits at index `period`
        self.config.period + 1
    }

    fn calculate(&self, bars: &[Bar]) -> Result<Self::Output> {
        let period = self.config.period;
        if period == 0 {
            return Err(KlineError::InvalidPeriod(0));
        }

        let close = closes(bars);
        let len = close.len();
        let alpha = 1.0 / period as f64;

        let mut result = IndicatorSeries::with_capacity(len);
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;

        for i in 0..len {
            if i == 0 {
                result.push(None);
                continue;
            }

            let change = close[i] - close[i - 1];
            let gain = change.max(0.0);
            let loss = (-change).max(0.0);

            if i < period {
                avg_gain += gain;
                avg_loss += loss;
                result.push(None);
            } else if i == period {
                avg_gain /= period as f64;
                avg_loss /= period as f64;
                avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
                avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
                result.push(Some(Self::rsi_value(avg_gain, avg_loss)));
            } else {
                avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
                avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
                result.push(Some(Self::rsi_value(avg_gain, avg_loss)));
            }
        }

        Ok(result)
    }
}
