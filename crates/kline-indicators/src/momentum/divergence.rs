//! Pivot-based RSI divergence detection.
//!
//! Flags bars where price makes a lower low while RSI makes a higher low
//! (bullish) or price makes a higher high while RSI makes a lower high
//! (bearish), using fractal pivots on the RSI series itself.

use kline_core::{
    error::{KlineError, Result},
    series::IndicatorSeries,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of a detected divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DivergenceKind {
    /// Lower price low with a higher RSI low.
    Bullish,
    /// Higher price high with a lower RSI high.
    Bearish,
}

/// A single detected divergence, anchored at the later pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DivergenceEvent {
    /// Position of the confirming pivot in the bar sequence.
    pub index: usize,
    /// Bullish or bearish.
    pub kind: DivergenceKind,
    /// RSI value at the confirming pivot.
    pub rsi_value: f64,
}

/// Configuration for the divergence detector.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DivergenceConfig {
    /// Bars to the left of a pivot that must be strictly worse (default: 5).
    pub lookback_left: usize,
    /// Bars to the right of a pivot that may tie but not beat it (default: 5).
    pub lookback_right: usize,
    /// Minimum bar distance between paired pivots (default: 5).
    pub min_range: usize,
    /// Maximum bar distance between paired pivots (default: 60).
    pub max_range: usize,
}

impl Default for DivergenceConfig {
    fn default() -> Self {
        Self {
            lookback_left: 5,
            lookback_right: 5,
            min_range: 5,
            max_range: 60,
        }
    }
}

impl DivergenceConfig {
    /// Create a configuration with the given pivot lookbacks.
    pub fn new(lookback_left: usize, lookback_right: usize) -> Self {
        Self {
            lookback_left,
            lookback_right,
            ..Self::default()
        }
    }

    /// Set the pivot pairing distance bounds.
    pub fn with_range(mut self, min_range: usize, max_range: usize) -> Self {
        self.min_range = min_range;
        self.max_range = max_range;
        self
    }
}

/// RSI divergence detector.
///
/// Pivots are found on the RSI series, not on price; price enters only
/// through the lower-low / higher-high comparison. Undefined RSI entries
/// compare as `0` inside pivot windows, which rules out pivot lows whose
/// window touches the warm-up prefix while leaving pivot highs intact.
/// Pivot centers themselves must be defined.
///
/// For each confirming pivot only the nearest earlier pivot of the same
/// kind (at least `min_range`, at most `max_range` bars back) is ever
/// examined; if the divergence condition fails for it, no older pivot is
/// tried.
#[derive(Debug, Clone)]
pub struct DivergenceDetector {
    config: DivergenceConfig,
}

impl DivergenceDetector {
    /// Create a detector from a configuration.
    pub fn new(config: DivergenceConfig) -> Self {
        Self { config }
    }

    /// Borrow the configuration.
    pub fn config(&self) -> &DivergenceConfig {
        &self.config
    }

    /// Scan aligned low/high price extremes and an RSI series for
    /// divergences.
    ///
    /// # Errors
    ///
    /// Returns [`KlineError::LengthMismatch`] when `lows` or `highs` do not
    /// match the RSI series length.
    pub fn detect(
        &self,
        lows: &[f64],
        highs: &[f64],
        rsi: &IndicatorSeries,
    ) -> Result<Vec<DivergenceEvent>> {
        let len = rsi.len();
        if lows.len() != len {
            return Err(KlineError::LengthMismatch {
                expected: len,
                actual: lows.len(),
            });
        }
        if highs.len() != len {
            return Err(KlineError::LengthMismatch {
                expected: len,
                actual: highs.len(),
            });
        }

        let left = self.config.lookback_left;
        let right = self.config.lookback_right;

        // Undefined entries take part in window comparisons as 0.
        let window_values: Vec<f64> = rsi.iter().map(|v| v.unwrap_or(0.0)).collect();

        let mut events = Vec::new();

        for i in left..len.saturating_sub(right) {
            let Some(rsi_i) = rsi.get(i) else { continue };

            if is_pivot_low(&window_values, left, right, i) {
                if let Some((j, rsi_j)) = self.nearest_pivot(rsi, &window_values, i, is_pivot_low)
                {
                    if lows[i] < lows[j] && rsi_i > rsi_j {
                        events.push(DivergenceEvent {
                            index: i,
                            kind: DivergenceKind::Bullish,
                            rsi_value: rsi_i,
                        });
                    }
                }
            }

            if is_pivot_high(&window_values, left, right, i) {
                if let Some((j, rsi_j)) = self.nearest_pivot(rsi, &window_values, i, is_pivot_high)
                {
                    if highs[i] > highs[j] && rsi_i < rsi_j {
                        events.push(DivergenceEvent {
                            index: i,
                            kind: DivergenceKind::Bearish,
                            rsi_value: rsi_i,
                        });
                    }
                }
            }
        }

        Ok(events)
    }

    /// Nearest earlier defined pivot within `[i - max_range, i - min_range]`,
    /// or `None`. The caller compares against this single candidate only.
    fn nearest_pivot(
        &self,
        rsi: &IndicatorSeries,
        window_values: &[f64],
        i: usize,
        is_pivot: fn(&[f64], usize, usize, usize) -> bool,
    ) -> Option<(usize, f64)> {
        if i < self.config.min_range {
            return None;
        }
        let newest = i - self.config.min_range;
        let oldest = i.saturating_sub(self.config.max_range);

        for j in (oldest..=newest).rev() {
            let Some(rsi_j) = rsi.get(j) else { continue };
            if is_pivot(
                window_values,
                self.config.lookback_left,
                self.config.lookback_right,
                j,
            ) {
                return Some((j, rsi_j));
            }
        }
        None
    }
}

/// True when `data[idx]` sits strictly below its left window and at or
/// below its right window.
fn is_pivot_low(data: &[f64], left: usize, right: usize, idx: usize) -> bool {
    if idx < left || idx >= data.len().saturating_sub(right) {
        return false;
    }
    for k in idx - left..idx {
        if data[k] <= data[idx] {
            return false;
        }
    }
    for k in idx + 1..=idx + right {
        if data[k] < data[idx] {
            return false;
        }
    }
    true
}

/// Mirror of [`is_pivot_low`]: strictly above on the left, at or above on
/// the right.
fn is_pivot_high(data: &[f64], left: usize, right: usize, idx: usize) -> bool {
    if idx < left || idx >= data.len().saturating_sub(right) {
        return false;
    }
    for k in idx - left..idx {
        if data[k] >= data[idx] {
            return false;
        }
    }
    for k in idx + 1..=idx + right {
        if data[k] > data[idx] {
            return false;
        }
    }
    true
}
