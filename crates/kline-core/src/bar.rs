//! Daily OHLCV bar type and bar-sequence helpers.
//!
//! A [`Bar`] is one trading day's price action, keyed by calendar date. The
//! engine consumes bars as plain ordered slices; the helpers here extract
//! value columns and check the ordering contract at the data boundary.

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{KlineError, Result};

/// A single daily OHLCV price bar, keyed by calendar date.
///
/// # Invariants
///
/// A well-formed bar sequence is strictly ascending by date with no
/// duplicates, and each bar satisfies `low <= min(open, close)` and
/// `high >= max(open, close)`. The computation engine assumes these hold and
/// does not re-check them; [`validate_bars`] exists for the loading boundary.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use kline_core::Bar;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let bar = Bar::new(date, 100.0, 105.0, 98.0, 103.0, 12_000.0);
/// assert!(bar.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bar {
    /// Calendar date of the trading day, serialized as `YYYY-MM-DD`.
    #[cfg_attr(feature = "serde", serde(rename = "time", alias = "date"))]
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    #[must_use]
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check that the bar's own prices are coherent.
    ///
    /// A valid bar has finite values, `low <= open/close <= high`, and a
    /// non-negative volume.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
            && self.low <= self.open
            && self.open <= self.high
            && self.low <= self.close
            && self.close <= self.high
            && self.volume >= 0.0
    }

    /// The bar's full price range: high minus low.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// True when the bar closed above its open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Which bar field a value-series indicator reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Source {
    /// Opening prices.
    Open,
    /// High prices.
    High,
    /// Low prices.
    Low,
    /// Closing prices (the usual source).
    #[default]
    Close,
    /// Traded volumes.
    Volume,
}

impl Source {
    /// Extract this field from every bar, in order.
    #[must_use]
    pub fn extract(self, bars: &[Bar]) -> Vec<f64> {
        bars.iter()
            .map(|bar| match self {
                Self::Open => bar.open,
                Self::High => bar.high,
                Self::Low => bar.low,
                Self::Close => bar.close,
                Self::Volume => bar.volume,
            })
            .collect()
    }
}

/// Closing prices of a bar sequence, in order.
#[must_use]
pub fn closes(bars: &[Bar]) -> Vec<f64> {
    Source::Close.extract(bars)
}

/// High prices of a bar sequence, in order.
#[must_use]
pub fn highs(bars: &[Bar]) -> Vec<f64> {
    Source::High.extract(bars)
}

/// Low prices of a bar sequence, in order.
#[must_use]
pub fn lows(bars: &[Bar]) -> Vec<f64> {
    Source::Low.extract(bars)
}

/// Traded volumes of a bar sequence, in order.
#[must_use]
pub fn volumes(bars: &[Bar]) -> Vec<f64> {
    Source::Volume.extract(bars)
}

/// Check the ordering contract of a bar sequence.
///
/// Returns an error on the first duplicate or out-of-order date. The
/// indicator functions themselves skip this check and assume it was done at
/// the boundary where the data entered the process.
///
/// # Errors
///
/// [`KlineError::DuplicateDate`] or [`KlineError::UnorderedDates`].
pub fn validate_bars(bars: &[Bar]) -> Result<()> {
    for (index, pair) in bars.windows(2).enumerate() {
        let (prev, next) = (pair[0].date, pair[1].date);
        if next == prev {
            return Err(KlineError::DuplicateDate {
                index: index + 1,
                date: next,
            });
        }
        if next < prev {
            return Err(KlineError::UnorderedDates {
                index: index + 1,
                prev,
                next,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bar_is_valid() {
        let good = Bar::new(date(2024, 1, 15), 100.0, 105.0, 98.0, 103.0, 12_000.0);
        assert!(good.is_valid());

        // high below the open
        let bad = Bar::new(date(2024, 1, 15), 100.0, 95.0, 98.0, 103.0, 12_000.0);
        assert!(!bad.is_valid());

        let bad = Bar::new(date(2024, 1, 15), 100.0, 105.0, 98.0, 103.0, -1.0);
        assert!(!bad.is_valid());

        let bad = Bar::new(date(2024, 1, 15), f64::NAN, 105.0, 98.0, 103.0, 12_000.0);
        assert!(!bad.is_valid());
    }

    #[test]
    fn test_source_extract() {
        let bars = vec![
            Bar::new(date(2024, 1, 15), 100.0, 105.0, 98.0, 103.0, 1_000.0),
            Bar::new(date(2024, 1, 16), 103.0, 108.0, 101.0, 107.0, 1_200.0),
        ];

        assert_eq!(closes(&bars), vec![103.0, 107.0]);
        assert_eq!(highs(&bars), vec![105.0, 108.0]);
        assert_eq!(lows(&bars), vec![98.0, 101.0]);
        assert_eq!(volumes(&bars), vec![1_000.0, 1_200.0]);
        assert_eq!(Source::Open.extract(&bars), vec![100.0, 103.0]);
    }

    #[test]
    fn test_validate_bars_ascending() {
        let bars = vec![
            Bar::new(date(2024, 1, 15), 100.0, 105.0, 98.0, 103.0, 1_000.0),
            Bar::new(date(2024, 1, 16), 103.0, 108.0, 101.0, 107.0, 1_200.0),
            Bar::new(date(2024, 1, 17), 107.0, 109.0, 104.0, 105.0, 900.0),
        ];
        assert!(validate_bars(&bars).is_ok());
        assert!(validate_bars(&[]).is_ok());
        assert!(validate_bars(&bars[..1]).is_ok());
    }

    #[test]
    fn test_validate_bars_duplicate() {
        let bars = vec![
            Bar::new(date(2024, 1, 15), 100.0, 105.0, 98.0, 103.0, 1_000.0),
            Bar::new(date(2024, 1, 15), 103.0, 108.0, 101.0, 107.0, 1_200.0),
        ];
        assert!(matches!(
            validate_bars(&bars),
            Err(KlineError::DuplicateDate { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_bars_unordered() {
        let bars = vec![
            Bar::new(date(2024, 1, 16), 100.0, 105.0, 98.0, 103.0, 1_000.0),
            Bar::new(date(2024, 1, 15), 103.0, 108.0, 101.0, 107.0, 1_200.0),
        ];
        assert!(matches!(
            validate_bars(&bars),
            Err(KlineError::UnorderedDates { index: 1, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_bar_serde_roundtrip() {
        let bar = Bar::new(date(2024, 1, 15), 100.0, 105.0, 98.0, 103.0, 12_000.0);
        let json = serde_json::to_string(&bar).unwrap();
        assert!(json.contains("\"time\":\"2024-01-15\""));

        let back: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bar);
    }
}
