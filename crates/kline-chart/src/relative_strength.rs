//! Mansfield relative-strength engine.
//!
//! Measures a stock's performance against a benchmark index: the close-price
//! ratio is compared with its own trailing baseline, the deviation is
//! normalized by recent volatility into a discrete 1..=5 strength level with
//! an acceleration flag, and each level maps to a fixed chart color. Two
//! short-horizon momentum readings (3 and 10 bars) ride along.
//!
//! The two input series are aligned by date: each stock bar pairs with the
//! benchmark bar of the same date, or the most recent earlier one
//! (forward-fill), or nothing at the very start. A missing or short
//! benchmark never errors; the affected fields degrade to `None`.

use chrono::NaiveDate;

use kline_core::bar::Bar;
use kline_core::utils::{rolling_mean_defined, rolling_std_pop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

/// Configuration for the Mansfield relative-strength engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MansfieldConfig {
    /// Trailing window for the ratio baseline mean.
    pub baseline_window: usize,
    /// Trailing window for the deviation volatility estimate.
    pub sigma_window: usize,
}

impl Default for MansfieldConfig {
    fn default() -> Self {
        Self {
            baseline_window: 50,
            sigma_window: 21,
        }
    }
}

impl MansfieldConfig {
    /// Create a configuration with the standard 50/21 windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline window.
    pub fn with_baseline_window(mut self, window: usize) -> Self {
        self.baseline_window = window;
        self
    }

    /// Set the sigma window.
    pub fn with_sigma_window(mut self, window: usize) -> Self {
        self.sigma_window = window;
        self
    }
}

/// Chart color for a relative-strength record.
///
/// Ten entries cover the five strength levels crossed with the
/// rising/fading acceleration state; `Neutral` is the fallback when the
/// level is undefined, so every record carries a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsColor {
    /// Level 5, accelerating.
    VeryStrongRising,
    /// Level 5, decelerating.
    VeryStrongFading,
    /// Level 4, accelerating.
    StrongRising,
    /// Level 4, decelerating.
    StrongFading,
    /// Level 3, accelerating.
    InLineRising,
    /// Level 3, decelerating.
    InLineFading,
    /// Level 2, accelerating.
    WeakRising,
    /// Level 2, decelerating.
    WeakFading,
    /// Level 1, accelerating.
    VeryWeakRising,
    /// Level 1, decelerating.
    VeryWeakFading,
    /// No strength level available.
    Neutral,
}

impl RsColor {
    /// Map a strength level and acceleration state onto the palette.
    ///
    /// An undefined acceleration counts as not accelerating; an undefined
    /// level maps to [`RsColor::Neutral`].
    pub fn classify(level: Option<u8>, accelerating: Option<bool>) -> Self {
        let rising = accelerating == Some(true);
        match level {
            Some(5) if rising => Self::VeryStrongRising,
            Some(5) => Self::VeryStrongFading,
            Some(4) if rising => Self::StrongRising,
            Some(4) => Self::StrongFading,
            Some(3) if rising => Self::InLineRising,
            Some(3) => Self::InLineFading,
            Some(2) if rising => Self::WeakRising,
            Some(2) => Self::WeakFading,
            Some(1) if rising => Self::VeryWeakRising,
            Some(1) => Self::VeryWeakFading,
            _ => Self::Neutral,
        }
    }

    /// CSS color string used by the chart layer.
    pub const fn css(self) -> &'static str {
        match self {
            Self::VeryStrongRising => "#B71C1C",
            Self::VeryStrongFading => "#f79696ff",
            Self::StrongRising => "#E65100",
            Self::StrongFading => "#f3c786ff",
            Self::InLineRising => "#616161",
            Self::InLineFading => "#d6d6d6ff",
            Self::WeakRising => "#3cff00aa",
            Self::WeakFading => "#b9ffa4aa",
            Self::VeryWeakRising => "#0077ffff",
            Self::VeryWeakFading => "#77d0f9ff",
            Self::Neutral => "#9E9E9E",
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for RsColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.css())
    }
}

/// One relative-strength record per stock bar.
///
/// Every field except `date` and `color` is `None` while the history or
/// benchmark pairing it needs is unavailable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RsRecord {
    /// The stock bar's date.
    #[cfg_attr(feature = "serde", serde(rename = "time"))]
    pub date: NaiveDate,
    /// Mansfield deviation: ratio's percentage distance from its baseline.
    pub mansfield: Option<f64>,
    /// Discrete strength level, 1 (weakest) to 5 (strongest).
    pub strength_level: Option<u8>,
    /// Whether the deviation rose versus the previous bar.
    pub accelerating: Option<bool>,
    /// 3-bar relative momentum versus the benchmark, in percent.
    pub rs3: Option<f64>,
    /// 10-bar relative momentum versus the benchmark, in percent.
    pub rs10: Option<f64>,
    /// Palette color for `(strength_level, accelerating)`.
    pub color: RsColor,
}

/// Mansfield relative-strength engine.
///
/// Stateless: [`MansfieldRs::compute`] is a pure function of its inputs and
/// may be re-invoked whenever either series changes.
#[derive(Debug, Clone, Default)]
pub struct MansfieldRs {
    config: MansfieldConfig,
}

impl MansfieldRs {
    /// Create an engine from a configuration.
    pub fn new(config: MansfieldConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &MansfieldConfig {
        &self.config
    }

    /// Compute one [`RsRecord`] per stock bar against the benchmark.
    ///
    /// Both inputs must be ascending by date. The benchmark may be empty,
    /// shorter than the stock series, or miss individual dates; affected
    /// record fields come back as `None` rather than an error.
    pub fn compute(&self, stock: &[Bar], benchmark: &[Bar]) -> Vec<RsRecord> {
        let n = stock.len();
        let aligned = align_benchmark_closes(stock, benchmark);

        let ratio: Vec<Option<f64>> = (0..n)
            .map(|i| aligned[i].map(|index_close| stock[i].close / index_close * 100.0))
            .collect();

        let baseline = rolling_mean_defined(&ratio, self.config.baseline_window);

        let deviation: Vec<Option<f64>> = (0..n)
            .map(|i| {
                let r = ratio[i]?;
                let b = baseline.get(i)?;
                if b == 0.0 {
                    return None;
                }
                Some((r - b) / b * 100.0)
            })
            .collect();

        // Sigma runs over the deviation with undefined entries substituted
        // by zero, not excluded.
        let substituted: Vec<f64> = deviation.iter().map(|m| m.unwrap_or(0.0)).collect();
        let sigma = rolling_std_pop(&substituted, self.config.sigma_window);

        let level: Vec<Option<u8>> = (0..n)
            .map(|i| Some(strength_level(deviation[i]?, sigma.get(i)?)))
            .collect();

        let accelerating: Vec<Option<bool>> = (0..n)
            .map(|i| {
                if i == 0 {
                    return None;
                }
                match (deviation[i], deviation[i - 1]) {
                    (Some(current), Some(previous)) => Some(current - previous > 0.0),
                    _ => None,
                }
            })
            .collect();

        let rs3 = relative_momentum(stock, &aligned, 3);
        let rs10 = relative_momentum(stock, &aligned, 10);

        (0..n)
            .map(|i| RsRecord {
                date: stock[i].date,
                mansfield: deviation[i],
                strength_level: level[i],
                accelerating: accelerating[i],
                rs3: rs3[i],
                rs10: rs10[i],
                color: RsColor::classify(level[i], accelerating[i]),
            })
            .collect()
    }
}

/// Compute relative-strength records with the standard 50/21 windows.
pub fn compute_relative_strength(stock: &[Bar], benchmark: &[Bar]) -> Vec<RsRecord> {
    MansfieldRs::new(MansfieldConfig::default()).compute(stock, benchmark)
}

/// For each stock bar, the close of the benchmark bar with the same date,
/// else the most recent earlier one, else `None`.
fn align_benchmark_closes(stock: &[Bar], benchmark: &[Bar]) -> Vec<Option<f64>> {
    let mut aligned = Vec::with_capacity(stock.len());
    let mut cursor = 0;
    let mut latest = None;

    for bar in stock {
        while cursor < benchmark.len() && benchmark[cursor].date <= bar.date {
            latest = Some(benchmark[cursor].close);
            cursor += 1;
        }
        aligned.push(latest);
    }

    aligned
}

/// N-bar percentage change of the stock minus that of the aligned benchmark.
fn relative_momentum(stock: &[Bar], aligned: &[Option<f64>], n: usize) -> Vec<Option<f64>> {
    (0..stock.len())
        .map(|i| {
            if i < n {
                return None;
            }
            let index_now = aligned[i]?;
            let index_then = aligned[i - n]?;
            let stock_change = (stock[i].close / stock[i - n].close - 1.0) * 100.0;
            let index_change = (index_now / index_then - 1.0) * 100.0;
            Some(stock_change - index_change)
        })
        .collect()
}

/// Bucket a deviation into levels 1..=5 by `±0.7σ` and `±1.5σ`.
fn strength_level(m: f64, sigma: f64) -> u8 {
    if m > 1.5 * sigma {
        5
    } else if m > 0.7 * sigma {
        4
    } else if m > -0.7 * sigma {
        3
    } else if m > -1.5 * sigma {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bars(closes: &[f64]) -> Vec<Bar> {
        bars_from(closes, 0)
    }

    /// Bars with sequential dates starting `offset` days after 2024-01-01.
    fn bars_from(closes: &[f64], offset: u64) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = start + chrono::Days::new(offset + i as u64);
                Bar::new(date, close, close, close, close, 1000.0)
            })
            .collect()
    }

    #[test]
    fn test_strength_level_thresholds() {
        assert_eq!(strength_level(2.0, 1.0), 5);
        assert_eq!(strength_level(1.5, 1.0), 4); // boundary is strict
        assert_eq!(strength_level(1.0, 1.0), 4);
        assert_eq!(strength_level(0.0, 1.0), 3);
        assert_eq!(strength_level(-1.0, 1.0), 2);
        assert_eq!(strength_level(-1.5, 1.0), 1);
        assert_eq!(strength_level(-3.0, 1.0), 1);
    }

    #[test]
    fn test_classify_palette() {
        assert_eq!(
            RsColor::classify(Some(5), Some(true)),
            RsColor::VeryStrongRising
        );
        assert_eq!(
            RsColor::classify(Some(5), Some(false)),
            RsColor::VeryStrongFading
        );
        // Unknown acceleration counts as not accelerating.
        assert_eq!(RsColor::classify(Some(2), None), RsColor::WeakFading);
        assert_eq!(RsColor::classify(None, Some(true)), RsColor::Neutral);

        assert_eq!(RsColor::VeryStrongRising.css(), "#B71C1C");
        assert_eq!(RsColor::VeryWeakFading.css(), "#77d0f9ff");
        assert_eq!(RsColor::Neutral.css(), "#9E9E9E");
    }

    #[test]
    fn test_identical_benchmark_zero_deviation() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i % 7) as f64).collect();
        let stock = bars(&closes);
        let records = compute_relative_strength(&stock, &stock);

        assert_eq!(records.len(), 60);
        for record in records.iter().take(49) {
            assert_eq!(record.mansfield, None);
            assert_eq!(record.strength_level, None);
            assert_eq!(record.color, RsColor::Neutral);
        }
        // Ratio is a constant 100, so once the baseline window fills the
        // deviation settles at exactly zero.
        for record in records.iter().skip(49) {
            assert_relative_eq!(record.mansfield.unwrap(), 0.0, epsilon = 1e-10);
        }
        // Zero deviation against zero sigma falls through every strict
        // threshold down to level 1.
        assert_eq!(records[55].strength_level, Some(1));
        assert_eq!(records[55].accelerating, Some(false));
        assert_eq!(records[55].color, RsColor::VeryWeakFading);
    }

    #[test]
    fn test_forward_fill_keeps_ratio_defined() {
        let stock = bars(&[100.0; 60]);
        // Benchmark misses the stock's date at index 52; the previous close
        // fills in and the ratio stays defined.
        let mut benchmark = bars(&[50.0; 60]);
        benchmark.remove(52);
        let records = compute_relative_strength(&stock, &benchmark);

        assert!(records[52].mansfield.is_some());
        assert_relative_eq!(records[52].mansfield.unwrap(), 0.0, epsilon = 1e-10);
        assert_relative_eq!(records[53].mansfield.unwrap(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_benchmark_starting_late() {
        let stock = bars(&[100.0; 60]);
        // Benchmark only exists from the stock's 11th bar onward.
        let benchmark = bars_from(&[50.0; 50], 10);
        let records = compute_relative_strength(&stock, &benchmark);

        // No pairing before the benchmark's first date.
        for record in records.iter().take(10) {
            assert_eq!(record.mansfield, None);
            assert_eq!(record.rs3, None);
            assert_eq!(record.color, RsColor::Neutral);
        }
        // rs3 needs an aligned pair at both ends of its 3-bar span.
        assert_eq!(records[12].rs3, None);
        assert_relative_eq!(records[13].rs3.unwrap(), 0.0, epsilon = 1e-10);
        // The baseline ignores the undefined prefix inside its window, so
        // the deviation is defined as soon as the window index allows.
        assert!(records[49].mansfield.is_some());
    }

    #[test]
    fn test_empty_benchmark_degrades() {
        let stock = bars(&[100.0, 101.0, 102.0, 103.0, 104.0]);
        let records = compute_relative_strength(&stock, &[]);

        assert_eq!(records.len(), 5);
        for (record, bar) in records.iter().zip(&stock) {
            assert_eq!(record.date, bar.date);
            assert_eq!(record.mansfield, None);
            assert_eq!(record.strength_level, None);
            assert_eq!(record.accelerating, None);
            assert_eq!(record.rs3, None);
            assert_eq!(record.rs10, None);
            assert_eq!(record.color, RsColor::Neutral);
        }
    }

    #[test]
    fn test_short_horizon_momentum() {
        // Stock gains 2 points a day, benchmark is flat: rs3 is the stock's
        // own 3-bar percentage change.
        let stock = bars(&[100.0, 102.0, 104.0, 106.0, 108.0]);
        let benchmark = bars(&[50.0; 5]);
        let records = compute_relative_strength(&stock, &benchmark);

        assert_eq!(records[2].rs3, None);
        assert_relative_eq!(records[3].rs3.unwrap(), 6.0, epsilon = 1e-10);
        assert_relative_eq!(
            records[4].rs3.unwrap(),
            (108.0 / 102.0 - 1.0) * 100.0,
            epsilon = 1e-10
        );
        assert_eq!(records[4].rs10, None);
    }

    #[test]
    fn test_rising_ratio_accelerates() {
        // Flat ratio for 52 bars, then the benchmark weakens and the
        // deviation starts climbing.
        let stock = bars(&[100.0; 56]);
        let mut index_closes = vec![50.0; 56];
        index_closes[52] = 49.5;
        index_closes[53] = 49.0;
        index_closes[54] = 48.5;
        index_closes[55] = 48.0;
        let benchmark = bars(&index_closes);
        let records = compute_relative_strength(&stock, &benchmark);

        assert_eq!(records[51].accelerating, Some(false));
        assert_eq!(records[52].accelerating, Some(true));
        assert_eq!(records[53].accelerating, Some(true));
        assert!(records[53].mansfield.unwrap() > records[52].mansfield.unwrap());
        assert!(records[53].strength_level.unwrap() >= 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_serialization_shape() {
        let record = RsRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            mansfield: Some(1.25),
            strength_level: Some(5),
            accelerating: Some(true),
            rs3: Some(0.5),
            rs10: None,
            color: RsColor::VeryStrongRising,
        };
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["time"], "2024-03-01");
        assert_eq!(value["mansfield"], 1.25);
        assert_eq!(value["strengthLevel"], 5);
        assert_eq!(value["accelerating"], true);
        assert_eq!(value["rs3"], 0.5);
        assert!(value["rs10"].is_null());
        assert_eq!(value["color"], "#B71C1C");
    }
}
