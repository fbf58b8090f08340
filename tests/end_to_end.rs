//! End-to-end scenarios across the kline crates.
//!
//! Each test drives a small, hand-checkable fixture through the same
//! entry points the chart layer uses.

mod common;

use approx::assert_relative_eq;

use kline_core::prelude::*;
use kline_indicators::prelude::*;
use kline_chart::prelude::*;

use common::{bar, bars_from_closes, generate_linear, generate_random_walk};

#[test]
fn test_sma_six_flat_closes_then_uptick() {
    // Closes 10,10,10,10,10,10,11: the 6-bar mean first exists at index 5
    // and absorbs the uptick at index 6.
    let bars = bars_from_closes(&[10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0]);
    let sma = Sma::new(SmaConfig::new(6)).calculate(&bars).unwrap();

    common::assert_series_eq(
        &sma,
        &[
            None,
            None,
            None,
            None,
            None,
            Some(10.0),
            Some(61.0 / 6.0),
        ],
        1e-10,
        "sma6",
    );
}

#[test]
fn test_rsi_six_rising_closes_pin_at_100() {
    let bars = bars_from_closes(&generate_linear(100.0, 1.0, 8));
    let rsi = Rsi::new(RsiConfig::new(6)).calculate(&bars).unwrap();

    for i in 0..6 {
        assert_eq!(rsi.get(i), None);
    }
    assert_relative_eq!(rsi.get(6).unwrap(), 100.0, epsilon = 1e-10);
    assert_relative_eq!(rsi.get(7).unwrap(), 100.0, epsilon = 1e-10);
}

#[test]
fn test_weekly_resample_one_boundary() {
    // Thu/Fri of one ISO week followed by Mon-Wed of the next.
    let daily = vec![
        bar(2024, 2, 1, 20.0, 21.0, 19.5, 20.5, 300.0),
        bar(2024, 2, 2, 20.5, 22.0, 20.2, 21.8, 400.0),
        bar(2024, 2, 5, 21.8, 22.5, 21.0, 21.2, 250.0),
        bar(2024, 2, 6, 21.2, 21.6, 20.8, 21.0, 150.0),
        bar(2024, 2, 7, 21.0, 21.9, 20.9, 21.7, 200.0),
    ];
    let weekly = to_weekly(&daily);

    assert_eq!(weekly.len(), 2);

    // Week one: Thu + Fri.
    assert_eq!(weekly[0].date, daily[0].date);
    assert_relative_eq!(weekly[0].close, 21.8, epsilon = 1e-10);
    assert_relative_eq!(weekly[0].volume, 700.0, epsilon = 1e-10);
    assert_relative_eq!(weekly[0].high, 22.0, epsilon = 1e-10);

    // Week two: Mon through Wed.
    assert_eq!(weekly[1].date, daily[2].date);
    assert_relative_eq!(weekly[1].open, 21.8, epsilon = 1e-10);
    assert_relative_eq!(weekly[1].close, 21.7, epsilon = 1e-10);
    assert_relative_eq!(weekly[1].volume, 600.0, epsilon = 1e-10);

    // Feeding the weekly bars back in changes nothing.
    assert_eq!(to_weekly(&weekly), weekly);
}

#[test]
fn test_mansfield_identical_series_settles_at_zero() {
    let closes = generate_random_walk(100.0, 2.0, 70, 7);
    let stock = bars_from_closes(&closes);
    let records = compute_relative_strength(&stock, &stock);

    for (i, record) in records.iter().enumerate() {
        if i < 49 {
            assert_eq!(record.mansfield, None, "index {i} should be warming up");
        } else {
            assert_relative_eq!(record.mansfield.unwrap(), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_mansfield_forward_fill_mid_series_gap() {
    let stock = bars_from_closes(&[100.0; 60]);
    let mut benchmark = bars_from_closes(&[25.0; 60]);
    // Drop one benchmark session after the baseline is established.
    benchmark.remove(54);
    let records = compute_relative_strength(&stock, &benchmark);

    // The gap date pairs with the previous benchmark close instead of
    // going undefined.
    assert_relative_eq!(records[54].mansfield.unwrap(), 0.0, epsilon = 1e-10);
    assert_eq!(
        records[54].mansfield.is_some(),
        records[53].mansfield.is_some()
    );
}

#[test]
fn test_full_pipeline_from_datasets() {
    let stock_closes = generate_random_walk(250.0, 4.0, 90, 11);
    let index_closes = generate_random_walk(18_000.0, 120.0, 90, 13);

    let stock = bars_from_closes(&stock_closes);
    let benchmark = bars_from_closes(&index_closes);

    let daily = compute_indicators(&stock).unwrap();
    let weekly_bars = to_weekly(&stock);
    let weekly = compute_indicators(&weekly_bars).unwrap();
    let records = compute_relative_strength(&stock, &benchmark);

    assert_eq!(daily.ma50.len(), 90);
    assert!(daily.ma50.get(49).is_some());
    assert_eq!(weekly.ma5.len(), weekly_bars.len());
    assert_eq!(records.len(), 90);

    for value in daily.rsi6.iter().flatten() {
        assert!((0.0..=100.0).contains(value));
    }
    for record in records.iter().skip(49) {
        assert!(record.strength_level.is_some());
        assert!(record.color != RsColor::Neutral);
    }
}
