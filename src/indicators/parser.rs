use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::*;
use crate::models::{Bar, EvalMode, PivotParams, ZigZagParams};

pub fn parse_decimal(value: &str) -> Result<Decimal, IndicatorError> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

pub fn parse_usize(value: &str) -> Result<usize, IndicatorError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

pub fn parse_eval_mode(value: &str) -> Result<EvalMode, IndicatorError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "close" => Ok(EvalMode::Close),
        "highlow" | "high_low" | "high-low" => Ok(EvalMode::HighLow),
        _ => Err(IndicatorError::UnknownMode(value.to_string())),
    }
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, IndicatorError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| IndicatorError::InvalidTimestamp(value.to_string()))
}

fn required<'a>(data: &'a HashMap<String, String>, field: &str) -> Result<&'a String, IndicatorError> {
    data.get(field)
        .ok_or_else(|| IndicatorError::MissingField(field.to_string()))
}

/// Parse a bar from string fields.
///
/// `open` defaults to `close` and `volume` to zero when absent.
pub fn parse_bar_from_map(data: &HashMap<String, String>) -> Result<Bar, IndicatorError> {
    let timestamp = parse_timestamp(required(data, "timestamp")?)?;
    let high = parse_decimal(required(data, "high")?)?;
    let low = parse_decimal(required(data, "low")?)?;
    let close = parse_decimal(required(data, "close")?)?;

    let open = data
        .get("open")
        .map(|s| parse_decimal(s))
        .transpose()?
        .unwrap_or(close);

    let volume = data
        .get("volume")
        .map(|s| parse_decimal(s))
        .transpose()?
        .unwrap_or(Decimal::ZERO);

    let bar = Bar::new(open, high, low, close, volume, timestamp);
    validate_bar(&bar)?;
    Ok(bar)
}

/// Parse ZigZag parameters; absent fields keep their defaults.
pub fn parse_zigzag_params_from_map(
    data: &HashMap<String, String>,
) -> Result<ZigZagParams, IndicatorError> {
    let mut params = ZigZagParams::default();

    if let Some(mode) = data.get("mode") {
        params.mode = parse_eval_mode(mode)?;
    }

    if let Some(percent_change) = data.get("percent_change") {
        params.percent_change = parse_decimal(percent_change)?;
    }

    validate_zigzag_params(&params)?;
    Ok(params)
}

/// Parse Pivots parameters; absent fields keep their defaults.
pub fn parse_pivot_params_from_map(
    data: &HashMap<String, String>,
) -> Result<PivotParams, IndicatorError> {
    let mut params = PivotParams::default();

    if let Some(left_span) = data.get("left_span") {
        params.left_span = parse_usize(left_span)?;
    }

    if let Some(right_span) = data.get("right_span") {
        params.right_span = parse_usize(right_span)?;
    }

    if let Some(max_trend_periods) = data.get("max_trend_periods") {
        params.max_trend_periods = parse_usize(max_trend_periods)?;
    }

    if let Some(mode) = data.get("mode") {
        params.mode = parse_eval_mode(mode)?;
    }

    validate_pivot_params(&params)?;
    Ok(params)
}
