//! Bollinger Bands indicator.
//!
//! Bollinger Bands are volatility bands placed above and below a moving average.

use kline_core::{
    bar::{closes, Bar},
    error::{KlineError, Result},
    series::IndicatorSeries,
    traits::Indicator,
    utils::rolling_mean,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for Bollinger Bands.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BollingerConfig {
    /// The window size for the moving average (default: 20).
    pub window: usize,
    /// Number of standard deviations for bands (default: 2.0).
    pub num_std: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            window: 20,
            num_std: 2.0,
        }
    }
}

impl BollingerConfig {
    /// Create a new Bollinger Bands configuration.
    pub fn new(window: usize, num_std: f64) -> Self {
        Self { window, num_std }
    }
}

/// Bollinger Bands series output.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BollingerSeries {
    /// Upper band series.
    pub upper: IndicatorSeries,
    /// Lower band series.
    pub lower: IndicatorSeries,
}

/// Bollinger Bands indicator.
///
/// The middle band is the window SMA of close; both bands are undefined
/// exactly where it is. The standard deviation is population (divisor n)
/// and is measured against the same window's mean, so the bands never
/// drift out of step with the SMA.
///
/// # Formula
///
/// Middle = SMA(Close, n)
/// StdDev = sqrt(sum((Close - Middle)^2) / n)
/// Upper = Middle + k * StdDev
/// Lower = Middle - k * StdDev
#[derive(Debug, Clone)]
pub struct Bollinger {
    config: BollingerConfig,
}

impl Indicator for Bollinger {
    type Output = BollingerSeries;
    type Config = BollingerConfig;

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
        let window = self.config.window;
        let k = self.config.num_std;

        if window == 0 {
            return Err(KlineError::InvalidPeriod(0));
        }

        let close = closes(bars);
        let middle = rolling_mean(&close, window);

        let mut upper = IndicatorSeries::with_capacity(close.len());
        let mut lower = IndicatorSeries::with_capacity(close.len());

        for i in 0..close.len() {
            match middle.get(i) {
                None => {
                    upper.push(None);
                    lower.push(None);
                }
                Some(mean) => {
                    let variance = close[i + 1 - window..=i]
                        .iter()
                        .map(|v| (v - mean).powi(2))
                        .sum::<f64>()
                        / window as f64;
                    let std_dev = variance.sqrt();

                    upper.push(Some(mean + k * std_dev));
                    lower.push(Some(mean - k * std_dev));
                }
            }
        }

        Ok(BollingerSeries { upper, lower })
    }
}
