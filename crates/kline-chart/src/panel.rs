//! The standard indicator panel computed for every chart view.
//!
//! One call produces everything the price, volume, and RSI panes draw:
//! close MAs at 5/10/20/50, Bollinger 20/2 bands, volume MAs at 5/10/20,
//! 6- and 12-period RSI, and divergence markers on the 6-period RSI. The
//! same call serves the daily and weekly views; resample first with
//! [`crate::resample::to_weekly`] for the latter.

use kline_core::bar::{highs, lows, Bar, Source};
use kline_core::error::Result;
use kline_core::series::IndicatorSeries;
use kline_core::traits::Indicator;

use kline_indicators::momentum::{
    DivergenceConfig, DivergenceDetector, DivergenceEvent, Rsi, RsiConfig,
};
use kline_indicators::trend::{Sma, SmaConfig};
use kline_indicators::volatility::{Bollinger, BollingerConfig, BollingerSeries};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full indicator set for one bar sequence.
///
/// Every series has the input's length; series entries are `None` during
/// their indicator's warm-up.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PanelIndicators {
    /// 5-period close MA.
    pub ma5: IndicatorSeries,
    /// 10-period close MA.
    pub ma10: IndicatorSeries,
    /// 20-period close MA. Doubles as the Bollinger middle band.
    pub ma20: IndicatorSeries,
    /// 50-period close MA.
    pub ma50: IndicatorSeries,
    /// Bollinger 20/2 upper and lower bands.
    pub bollinger: BollingerSeries,
    /// 5-period volume MA.
    pub volume_ma5: IndicatorSeries,
    /// 10-period volume MA.
    pub volume_ma10: IndicatorSeries,
    /// 20-period volume MA.
    pub volume_ma20: IndicatorSeries,
    /// 6-period RSI.
    pub rsi6: IndicatorSeries,
    /// 12-period RSI.
    pub rsi12: IndicatorSeries,
    /// Divergences detected on the 6-period RSI.
    pub divergences: Vec<DivergenceEvent>,
}

/// Compute the standard panel for a daily or weekly bar sequence.
pub fn compute_indicators(bars: &[Bar]) -> Result<PanelIndicators> {
    let rsi6 = Rsi::new(RsiConfig::new(6)).calculate(bars)?;
    let divergences = DivergenceDetector::new(DivergenceConfig::default()).detect(
        &lows(bars),
        &highs(bars),
        &rsi6,
    )?;

    Ok(PanelIndicators {
        ma5: close_ma(bars, 5)?,
        ma10: close_ma(bars, 10)?,
        ma20: close_ma(bars, 20)?,
        ma50: close_ma(bars, 50)?,
        bollinger: Bollinger::new(BollingerConfig::new(20, 2.0)).calculate(bars)?,
        volume_ma5: volume_ma(bars, 5)?,
        volume_ma10: volume_ma(bars, 10)?,
        volume_ma20: volume_ma(bars, 20)?,
        rsi6,
        rsi12: Rsi::new(RsiConfig::new(12)).calculate(bars)?,
        divergences,
    })
}

fn close_ma(bars: &[Bar], window: usize) -> Result<IndicatorSeries> {
    Sma::new(SmaConfig::new(window)).calculate(bars)
}

fn volume_ma(bars: &[Bar], window: usize) -> Result<IndicatorSeries> {
    Sma::new(SmaConfig::new(window).with_source(Source::Volume)).calculate(bars)
}
