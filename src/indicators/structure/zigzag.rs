//! ZigZag indicator
//!
//! Connects confirmed price reversals of at least `percent_change` percent
//! with straight lines, plus retrace lines joining successive highs and
//! successive lows.

use rust_decimal::Decimal;
use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::indicators::structure::painter::{paint_segment, RetraceTracks};
use crate::indicators::structure::scanner::{find_initial_point, find_next_point};
use crate::indicators::validation::{prepare_bars, validate_zigzag};
use crate::models::{Bar, ConfirmedPoint, EvalMode, ZigZagParams, ZigZagRow};

/// Rows and the reversal points they were painted from.
#[derive(Debug, Clone)]
pub struct ZigZagSeries {
    pub rows: Vec<ZigZagRow>,
    /// Points in painting order. A confirmed seed comes first; the last entry
    /// may be unclassified.
    pub points: Vec<ConfirmedPoint>,
}

/// Calculate ZigZag rows, one per bar in timestamp order.
pub fn calculate_zigzag(bars: &[Bar], params: &ZigZagParams) -> Result<Vec<ZigZagRow>, IndicatorError> {
    Ok(calculate_zigzag_series(bars, params)?.rows)
}

/// Calculate ZigZag with default parameters (close, 5%)
pub fn calculate_zigzag_default(bars: &[Bar]) -> Result<Vec<ZigZagRow>, IndicatorError> {
    calculate_zigzag(bars, &ZigZagParams::default())
}

/// Reversal points of the ZigZag line without the painted rows.
pub fn zigzag_points(bars: &[Bar], params: &ZigZagParams) -> Result<Vec<ConfirmedPoint>, IndicatorError> {
    Ok(calculate_zigzag_series(bars, params)?.points)
}

pub fn calculate_zigzag_series(bars: &[Bar], params: &ZigZagParams) -> Result<ZigZagSeries, IndicatorError> {
    let bars = prepare_bars(bars)?;
    validate_zigzag(&bars, params)?;

    debug!(
        bars = bars.len(),
        mode = ?params.mode,
        percent_change = %params.percent_change,
        "calculating zigzag"
    );

    Ok(paint_zigzag(&bars, params.mode, params.threshold()))
}

/// Run the scan/paint loop over already sorted and validated bars.
pub fn paint_zigzag(bars: &[Bar], mode: EvalMode, threshold: Decimal) -> ZigZagSeries {
    let mut rows: Vec<ZigZagRow> = bars.iter().map(|bar| ZigZagRow::new(bar.timestamp)).collect();
    let mut points = Vec::new();
    let final_position = bars.len();

    let mut last_point = find_initial_point(bars, mode, threshold);
    if last_point.is_confirmed() {
        if let Some(first) = rows.first_mut() {
            first.zig_zag = Some(last_point.value);
            first.point_type = Some(last_point.polarity);
        }
        points.push(last_point);
    }

    let mut retrace = RetraceTracks::new();

    while last_point.position < final_position {
        let next_point = find_next_point(bars, mode, threshold, &last_point);
        if next_point.position <= last_point.position {
            break;
        }

        paint_segment(&mut rows, &last_point, &next_point);
        retrace.paint(&mut rows, &next_point);
        points.push(next_point);

        if !next_point.is_confirmed() {
            break;
        }
        last_point = next_point;
    }

    debug!(points = points.len(), "zigzag complete");

    ZigZagSeries { rows, points }
}
