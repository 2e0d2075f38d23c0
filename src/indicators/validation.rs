//! Input validation run before any reversal detection

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::indicators::error::IndicatorError;
use crate::models::{Bar, PivotParams, ZigZagParams};

pub const ZIGZAG_MIN_BARS: usize = 2;

/// Checks a single bar's prices.
pub fn validate_bar(bar: &Bar) -> Result<(), IndicatorError> {
    let prices = [
        ("open", bar.open),
        ("high", bar.high),
        ("low", bar.low),
        ("close", bar.close),
    ];
    for (name, value) in prices {
        if value <= Decimal::ZERO {
            return Err(IndicatorError::InvalidBar {
                timestamp: bar.timestamp,
                reason: format!("{} must be positive, got {}", name, value),
            });
        }
    }

    if bar.high < bar.low {
        return Err(IndicatorError::InvalidBar {
            timestamp: bar.timestamp,
            reason: format!("high {} is below low {}", bar.high, bar.low),
        });
    }

    if bar.volume < Decimal::ZERO {
        return Err(IndicatorError::InvalidBar {
            timestamp: bar.timestamp,
            reason: format!("volume must be non-negative, got {}", bar.volume),
        });
    }

    Ok(())
}

/// Returns a copy of `bars` sorted by timestamp.
///
/// Fails on duplicate timestamps or any malformed bar.
pub fn prepare_bars(bars: &[Bar]) -> Result<Vec<Bar>, IndicatorError> {
    let mut seen = HashSet::with_capacity(bars.len());
    for bar in bars {
        validate_bar(bar)?;
        if !seen.insert(bar.timestamp) {
            return Err(IndicatorError::DuplicateTimestamp(bar.timestamp));
        }
    }

    let mut sorted = bars.to_vec();
    sorted.sort_by_key(|bar| bar.timestamp);
    Ok(sorted)
}

pub fn validate_zigzag_params(params: &ZigZagParams) -> Result<(), IndicatorError> {
    if params.percent_change <= Decimal::ZERO {
        return Err(IndicatorError::invalid_parameter(
            "percent_change",
            format!("must be greater than 0, got {}", params.percent_change),
        ));
    }
    Ok(())
}

pub fn validate_zigzag(bars: &[Bar], params: &ZigZagParams) -> Result<(), IndicatorError> {
    validate_zigzag_params(params)?;
    validate_history("ZIGZAG", bars.len(), ZIGZAG_MIN_BARS)
}

pub fn validate_pivot_params(params: &PivotParams) -> Result<(), IndicatorError> {
    if params.right_span < 2 {
        return Err(IndicatorError::invalid_parameter(
            "right_span",
            format!("must be at least 2, got {}", params.right_span),
        ));
    }

    if params.left_span < 2 {
        return Err(IndicatorError::invalid_parameter(
            "left_span",
            format!("must be at least 2, got {}", params.left_span),
        ));
    }

    if params.max_trend_periods <= params.left_span {
        return Err(IndicatorError::invalid_parameter(
            "max_trend_periods",
            format!(
                "must be greater than left_span ({}), got {}",
                params.left_span, params.max_trend_periods
            ),
        ));
    }

    Ok(())
}

/// Minimum history for a symmetric fractal window.
pub fn pivots_min_bars(params: &PivotParams) -> usize {
    params.left_span + params.right_span + 1
}

pub fn validate_pivots(bars: &[Bar], params: &PivotParams) -> Result<(), IndicatorError> {
    validate_pivot_params(params)?;
    validate_history("PIVOTS", bars.len(), pivots_min_bars(params))
}

fn validate_history(indicator: &'static str, actual: usize, required: usize) -> Result<(), IndicatorError> {
    if actual < required {
        return Err(IndicatorError::InsufficientData {
            indicator,
            required,
            actual,
        });
    }
    Ok(())
}
