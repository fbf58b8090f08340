//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits from kline-core.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kline_core::prelude::*;
//!
//! let bars = vec![
//!     Bar::new(
//!         NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!         100.0, 105.0, 98.0, 103.0, 1_000_000.0,
//!     ),
//!     Bar::new(
//!         NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
//!         103.0, 104.0, 101.0, 102.0, 800_000.0,
//!     ),
//! ];
//! validate_bars(&bars).unwrap();
//! let ma = rolling_mean(&closes(&bars), 2);
//! assert_eq!(ma.get(1), Some(102.5));
//! ```

// Core types
pub use crate::bar::{closes, highs, lows, validate_bars, volumes, Bar, Source};
pub use crate::series::IndicatorSeries;

// Error types
pub use crate::error::{KlineError, Result};

// Traits
pub use crate::traits::{Indicator, IndicatorConfig};

// Utility functions
pub use crate::utils::{rolling_mean, rolling_mean_defined, rolling_std_pop};
