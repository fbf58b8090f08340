//! # kline-core
//!
//! Core types and traits for the kline chart-indicator library.
//!
//! This crate provides the foundational abstractions used throughout the library:
//!
//! - [`Bar`] - A single daily OHLCV bar with its calendar date
//! - [`IndicatorSeries`] - Indicator output aligned 1:1 with its input bars,
//!   with undefined warm-up values
//! - [`Indicator`] - Batch indicator computation trait
//! - Rolling-window primitives in [`utils`]
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use kline_core::prelude::*;
//!
//! // Rolling mean over close prices, undefined until the window fills
//! let ma = rolling_mean(&[100.0, 101.5, 99.8, 102.3, 101.0], 3);
//! assert_eq!(ma.get(1), None);
//! assert!(ma.get(2).is_some());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod bar;
pub mod error;
pub mod prelude;
pub mod series;
pub mod traits;
pub mod utils;

// Re-export core types at crate root
pub use bar::{Bar, Source};
pub use error::{KlineError, Result};
pub use series::IndicatorSeries;
pub use traits::{Indicator, IndicatorConfig};
