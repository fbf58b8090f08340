//! Prelude module for convenient imports.
//!
//! This module re-exports every indicator with its configuration and
//! output types.

pub use crate::momentum::{
    DivergenceConfig, DivergenceDetector, DivergenceEvent, DivergenceKind, Rsi, RsiConfig,
};
pub use crate::trend::{Sma, SmaConfig};
pub use crate::volatility::{Bollinger, BollingerConfig, BollingerSeries};
pub use crate::volume::{ProfileRow, VolumeProfile, VolumeProfileConfig, VolumeProfileOutput};
