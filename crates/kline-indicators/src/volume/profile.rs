//! Volume-at-price profile.
//!
//! Buckets the traded volume of a bar range into horizontal price bands:
//! the histogram drawn alongside the candles.

use kline_core::{
    bar::Bar,
    error::{KlineError, Result},
    traits::Indicator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the volume profile.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeProfileConfig {
    /// Number of equal price buckets (default: 25).
    pub rows: usize,
}

impl Default for VolumeProfileConfig {
    fn default() -> Self {
        Self { rows: 25 }
    }
}

impl VolumeProfileConfig {
    /// Create a configuration with the given bucket count.
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }
}

/// One price bucket of the profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfileRow {
    /// Lower price bound of the bucket.
    pub low: f64,
    /// Upper price bound of the bucket.
    pub high: f64,
    /// Volume accumulated by bars overlapping the bucket.
    pub volume: f64,
}

/// Output of the volume profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeProfileOutput {
    /// Buckets in ascending price order; empty for degenerate input.
    pub rows: Vec<ProfileRow>,
    /// Largest bucket volume, for scaling; 0 when `rows` is empty.
    pub max_volume: f64,
}

/// Volume-at-price profile over a bar range.
///
/// The price axis from the lowest low to the highest high is cut into
/// `rows` equal buckets. A bar contributes its full volume to every bucket
/// its low..high span overlaps; volume is deliberately not pro-rated, so
/// wide-ranging bars weigh on all the levels they crossed. Empty input or
/// a flat price range produces no rows.
#[derive(Debug, Clone)]
pub struct VolumeProfile {
    config: VolumeProfileConfig,
}

impl Indicator for VolumeProfile {
    type Output = VolumeProfileOutput;
    type Config = VolumeProfileConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, bars: &[Bar]) -> Result<Self::Output> {
        let rows = self.config.rows;
        if rows == 0 {
            return Err(KlineError::InvalidPeriod(0));
        }

        let empty = VolumeProfileOutput {
            rows: Vec::new(),
            max_volume: 0.0,
        };

        if bars.is_empty() {
            return Ok(empty);
        }

        let min_price = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let max_price = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
        if min_price == max_price {
            return Ok(empty);
        }

        let levels: Vec<f64> = (0..=rows)
            .map(|i| min_price + (i as f64 / rows as f64) * (max_price - min_price))
            .collect();

        let mut volumes = vec![0.0f64; rows];
        for bar in bars {
            for (j, volume) in volumes.iter_mut().enumerate() {
                if bar.high > levels[j] && bar.low < levels[j + 1] {
                    *volume += bar.volume;
                }
            }
        }

        let max_volume = volumes.iter().fold(0.0f64, |acc, &v| acc.max(v));
        let rows = volumes
            .iter()
            .enumerate()
            .map(|(j, &volume)| ProfileRow {
                low: levels[j],
                high: levels[j + 1],
                volume,
            })
            .collect();

        Ok(VolumeProfileOutput { rows, max_volume })
    }
}
