//! Trend indicators.
//!
//! This module contains trend indicators:
//! - SMA (Simple Moving Average), over close or volume

mod sma;

pub use sma::{Sma, SmaConfig};
