//! Indicator trait system

use crate::indicators::error::IndicatorError;
use crate::indicators::structure::{calculate_pivots, calculate_zigzag};
use crate::indicators::validation::{pivots_min_bars, ZIGZAG_MIN_BARS};
use crate::models::{Bar, PivotParams, PivotRow, ZigZagParams, ZigZagRow};

/// Trait for all indicators
///
/// Implemented by the ZigZag and Pivots parameter sets.
pub trait Indicator {
    /// Output row type, one per input bar
    type Row;

    /// Get the name of the indicator
    fn name(&self) -> &'static str;

    /// Shortest history the indicator accepts
    fn min_bars(&self) -> usize;

    /// Validate the input and compute one row per bar
    fn calculate(&self, bars: &[Bar]) -> Result<Vec<Self::Row>, IndicatorError>;
}

impl Indicator for ZigZagParams {
    type Row = ZigZagRow;

    fn name(&self) -> &'static str {
        "ZIGZAG"
    }

    fn min_bars(&self) -> usize {
        ZIGZAG_MIN_BARS
    }

    fn calculate(&self, bars: &[Bar]) -> Result<Vec<ZigZagRow>, IndicatorError> {
        calculate_zigzag(bars, self)
    }
}

impl Indicator for PivotParams {
    type Row = PivotRow;

    fn name(&self) -> &'static str {
        "PIVOTS"
    }

    fn min_bars(&self) -> usize {
        pivots_min_bars(self)
    }

    fn calculate(&self, bars: &[Bar]) -> Result<Vec<PivotRow>, IndicatorError> {
        calculate_pivots(bars, self)
    }
}
