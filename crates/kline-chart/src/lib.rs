//! # kline-chart
//!
//! Chart-facing composition layer for the kline library.
//!
//! Where `kline-indicators` computes one indicator at a time, this crate
//! assembles what a chart view actually consumes:
//!
//! - [`panel::compute_indicators`]: the full panel (close MAs, Bollinger
//!   bands, volume MAs, dual RSI, divergence markers) in one call
//! - [`resample::to_weekly`]: ISO-week resampling for the weekly view
//! - [`relative_strength`]: the Mansfield relative-strength engine against
//!   a benchmark index, including the level/acceleration color palette
//! - [`loader`]: dataset JSON loading with the ascending-date contract
//!   check (`serde` feature)
//!
//! Everything is pure and stateless: re-invoke on new data, run independent
//! inputs in parallel, nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use kline_core::prelude::*;
//! use kline_chart::prelude::*;
//!
//! let bars: Vec<Bar> = (0..10)
//!     .map(|i| {
//!         let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
//!             + chrono::Days::new(i);
//!         let close = 100.0 + i as f64;
//!         Bar::new(date, close, close + 1.0, close - 1.0, close, 1_000.0)
//!     })
//!     .collect();
//!
//! // Jan 1..=10 of 2024 spans two ISO weeks.
//! let weekly = to_weekly(&bars);
//! assert_eq!(weekly.len(), 2);
//!
//! let panel = compute_indicators(&bars).unwrap();
//! assert_eq!(panel.ma5.len(), bars.len());
//! assert_eq!(panel.rsi6.get(6), Some(100.0));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

#[cfg(feature = "serde")]
pub mod loader;
pub mod panel;
pub mod relative_strength;
pub mod resample;

pub mod prelude;

pub use prelude::*;
