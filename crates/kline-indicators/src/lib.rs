//! # kline-indicators
//!
//! Technical indicators for the kline chart library.
//!
//! This crate provides the indicator computations drawn on the chart panels,
//! organized into four categories:
//!
//! - **Trend**: SMA over close or volume
//! - **Volatility**: Bollinger Bands
//! - **Momentum**: Wilder RSI and pivot-based RSI divergence detection
//! - **Volume**: volume-at-price profile
//!
//! Every indicator is a pure batch computation: a config struct, a
//! `calculate` over a bar slice, and an output whose length matches the
//! input with undefined warm-up entries.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use kline_core::prelude::*;
//! use kline_indicators::prelude::*;
//!
//! let bars: Vec<Bar> = (0..8)
//!     .map(|i| {
//!         let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
//!             + chrono::Days::new(i);
//!         let close = 100.0 + i as f64;
//!         Bar::new(date, close, close, close, close, 1_000.0)
//!     })
//!     .collect();
//!
//! let rsi = Rsi::new(RsiConfig::new(6));
//! let series = rsi.calculate(&bars).unwrap();
//! assert_eq!(series.get(5), None);
//! assert_eq!(series.get(6), Some(100.0)); // every bar gained
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub mod prelude;

pub use prelude::*;
