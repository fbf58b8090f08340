//! Volume indicators.
//!
//! This module contains volume indicators:
//! - Volume-at-price profile

mod profile;

pub use profile::{ProfileRow, VolumeProfile, VolumeProfileConfig, VolumeProfileOutput};
