//! Common test utilities for kline end-to-end tests.
//!
//! Synthetic bar generation and series assertions shared by the
//! cross-crate scenarios.

#![allow(dead_code)]

use chrono::NaiveDate;

use kline_core::prelude::*;

/// Assert an indicator series matches an expected pattern of defined and
/// undefined entries.
pub fn assert_series_eq(
    actual: &IndicatorSeries,
    expected: &[Option<f64>],
    epsilon: f64,
    name: &str,
) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: length mismatch: {} vs {}",
        name,
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        match (a, e) {
            (None, None) => {}
            (Some(a), Some(e)) => {
                let diff = (a - e).abs();
                assert!(
                    diff < epsilon,
                    "{}[{}]: expected {} but got {} (diff {:.2e})",
                    name,
                    i,
                    e,
                    a,
                    diff
                );
            }
            (a, e) => panic!("{}[{}]: expected {:?} but got {:?}", name, i, e, a),
        }
    }
}

/// A bar with an explicit calendar date.
pub fn bar(y: i32, m: u32, d: u32, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
    Bar::new(
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        open,
        high,
        low,
        close,
        volume,
    )
}

/// Bars on consecutive calendar days from 2024-01-01, with flat OHLC at
/// each close and increasing volume.
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let date = start + chrono::Days::new(i as u64);
            Bar::new(date, close, close, close, close, 1_000.0 + i as f64 * 100.0)
        })
        .collect()
}

/// Linear close series.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Deterministic random-walk close series (simple LCG, always positive).
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut prices = Vec::with_capacity(len);
    let mut last = start;
    prices.push(last);

    for _ in 1..len {
        last = (last + next() * volatility).max(0.01);
        prices.push(last);
    }

    prices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_linear() {
        assert_eq!(
            generate_linear(100.0, 1.0, 4),
            vec![100.0, 101.0, 102.0, 103.0]
        );
    }

    #[test]
    fn test_random_walk_deterministic() {
        let a = generate_random_walk(100.0, 1.0, 10, 42);
        let b = generate_random_walk(100.0, 1.0, 10, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
        assert!(a.iter().all(|&p| p > 0.0));
    }

    #[test]
    fn test_bars_from_closes_dates_ascend() {
        let bars = bars_from_closes(&[1.0, 2.0, 3.0]);
        assert!(bars[0].date < bars[1].date && bars[1].date < bars[2].date);
        assert_eq!(bars[2].volume, 1_200.0);
    }
}
