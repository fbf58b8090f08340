//! Momentum indicators.
//!
//! This module contains momentum indicators:
//! - RSI (Wilder Relative Strength Index)
//! - Pivot-based RSI divergence detection

mod divergence;
mod rsi;

pub use divergence::{DivergenceConfig, DivergenceDetector, DivergenceEvent, DivergenceKind};
pub use rsi::{Rsi, RsiConfig};
