//! Weekly bar resampling.
//!
//! Collapses ascending daily bars into one bar per ISO-8601 week.

use chrono::Datelike;
use indexmap::IndexMap;

use kline_core::bar::Bar;

/// Resample ascending daily bars into weekly bars.
///
/// Bars are grouped by ISO-8601 week, whose week-year rule is
/// Thursday-anchored (a week belongs to the year containing its Thursday).
/// Each weekly bar keeps the first trading day's date and open, takes the
/// running high/low extrema, the last close, and the summed volume of its
/// group. Weeks appear in first-seen order, so ascending input yields
/// ascending output.
///
/// Resampling is idempotent: each output bar carries a date inside its own
/// week, so feeding the output back in returns it unchanged.
pub fn to_weekly(bars: &[Bar]) -> Vec<Bar> {
    let mut weeks: IndexMap<(i32, u32), Bar> = IndexMap::new();

    for bar in bars {
        let week = bar.date.iso_week();
        let key = (week.year(), week.week());

        if let Some(current) = weeks.get_mut(&key) {
            current.high = current.high.max(bar.high);
            current.low = current.low.min(bar.low);
            current.close = bar.close;
            current.volume += bar.volume;
        } else {
            weeks.insert(key, *bar);
        }
    }

    weeks.into_values().collect()
}
