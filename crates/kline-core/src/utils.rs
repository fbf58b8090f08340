//! Rolling-window primitives shared by the indicators.
//!
//! These operate on plain value slices and return [`IndicatorSeries`] of the
//! same length, with the leading warm-up indices undefined. A window of 0 is
//! outside the contract; the primitives degrade to an all-undefined result
//! rather than guessing.

use crate::series::IndicatorSeries;

/// Rolling arithmetic mean over a trailing window.
///
/// For each index `i < window - 1` the output is undefined; from `window - 1`
/// on it is the mean of `data[i - window + 1 ..= i]`. Uses a sliding sum.
///
/// # Example
///
/// ```rust
/// use kline_core::utils::rolling_mean;
///
/// let result = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
/// assert_eq!(result[0], None);
/// assert_eq!(result[1], None);
/// assert_eq!(result[2], Some(2.0)); // (1+2+3)/3
/// assert_eq!(result[4], Some(4.0)); // (3+4+5)/3
/// ```
#[must_use]
pub fn rolling_mean(data: &[f64], window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(data.len());
    }

    let mut result = IndicatorSeries::with_capacity(data.len());
    let mut sum = 0.0;

    for (i, &value) in data.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= data[i - window];
        }

        if i + 1 >= window {
            result.push(Some(sum / window as f64));
        } else {
            result.push(None);
        }
    }

    result
}

/// Rolling population standard deviation over a trailing window.
///
/// Variance is the mean of squared deviations from the window's own mean
/// with divisor `window` (population, not sample). Two-pass per window.
///
/// # Example
///
/// ```rust
/// use kline_core::utils::rolling_std_pop;
///
/// let result = rolling_std_pop(&[2.0, 4.0, 4.0], 3);
/// // mean 10/3, variance ((2-10/3)^2 + 2*(4-10/3)^2)/3 = 8/9
/// assert_eq!(result[0], None);
/// assert!((result[2].unwrap() - (8.0f64 / 9.0).sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn rolling_std_pop(data: &[f64], window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(data.len());
    }

    let mut result = IndicatorSeries::with_capacity(data.len());

    for i in 0..data.len() {
        if i + 1 < window {
            result.push(None);
            continue;
        }

        let slice = &data[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let variance = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / window as f64;
        result.push(Some(variance.sqrt()));
    }

    result
}

/// Rolling mean over a trailing window of possibly-undefined values,
/// averaging only the defined entries in each window.
///
/// The output is undefined for `i < window - 1` and for windows containing
/// no defined entry at all. A partially-defined window yields the mean of
/// just its defined values.
#[must_use]
pub fn rolling_mean_defined(data: &[Option<f64>], window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(data.len());
    }

    let mut result = IndicatorSeries::with_capacity(data.len());

    for i in 0..data.len() {
        if i + 1 < window {
            result.push(None);
            continue;
        }

        let mut sum = 0.0;
        let mut count = 0usize;
        for value in data[i + 1 - window..=i].iter().flatten() {
            sum += value;
            count += 1;
        }

        result.push(if count > 0 { Some(sum / count as f64) } else { None });
    }

    result
}
