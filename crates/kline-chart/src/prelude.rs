//! Commonly used imports for chart composition.
//!
//! ```
//! use kline_chart::prelude::*;
//! ```

pub use crate::panel::{compute_indicators, PanelIndicators};
pub use crate::relative_strength::{
    compute_relative_strength, MansfieldConfig, MansfieldRs, RsColor, RsRecord,
};
pub use crate::resample::to_weekly;

#[cfg(feature = "serde")]
pub use crate::loader::{Dataset, LoadError};
