//! Volatility indicators.
//!
//! This module contains volatility indicators:
//! - Bollinger Bands

mod bollinger;

pub use bollinger::{Bollinger, BollingerConfig, BollingerSeries};
