//! Pivots indicator (derived from Williams fractals)
//!
//! Marks local highs and lows and labels the stretch between two extremes of
//! the same polarity as a higher/lower high or low. Labels are repainted
//! whenever a newer extreme supersedes the previous reference.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::indicators::error::IndicatorError;
use crate::indicators::structure::fractal::detect_fractals;
use crate::indicators::validation::{prepare_bars, validate_pivots};
use crate::models::{Bar, PivotParams, PivotRow, PivotTrend};

/// Outcome of offering a new extreme to a [`TrendReference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// No live reference; the extreme becomes the first one.
    Started,
    /// Same value as the reference. Nothing changes.
    Tie,
    /// Rows `from..=index` must be relabelled.
    Repaint { from: usize, rising: bool },
}

/// Most recent extreme of one polarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrendReference {
    last: Option<(usize, Decimal)>,
}

impl TrendReference {
    pub fn last(&self) -> Option<(usize, Decimal)> {
        self.last
    }

    /// Drop the reference once it is more than `max_trend_periods` rows old.
    pub fn expire(&mut self, index: usize, max_trend_periods: usize) {
        if let Some((last_index, _)) = self.last {
            if last_index + max_trend_periods < index {
                self.last = None;
            }
        }
    }

    pub fn observe(&mut self, index: usize, value: Decimal) -> Observation {
        match self.last {
            Some((_, last_value)) if last_value == value => Observation::Tie,
            Some((last_index, last_value)) => {
                self.last = Some((index, value));
                Observation::Repaint {
                    from: last_index + 1,
                    rising: value > last_value,
                }
            }
            None => {
                self.last = Some((index, value));
                Observation::Started
            }
        }
    }
}

/// Calculate pivot rows, one per bar in timestamp order.
pub fn calculate_pivots(bars: &[Bar], params: &PivotParams) -> Result<Vec<PivotRow>, IndicatorError> {
    let bars = prepare_bars(bars)?;
    validate_pivots(&bars, params)?;

    debug!(
        bars = bars.len(),
        left_span = params.left_span,
        right_span = params.right_span,
        max_trend_periods = params.max_trend_periods,
        mode = ?params.mode,
        "calculating pivots"
    );

    let mut rows: Vec<PivotRow> = detect_fractals(&bars, params.left_span, params.right_span, params.mode)
        .into_iter()
        .zip(&bars)
        .map(|(fractal, bar)| PivotRow {
            high_point: fractal.high_point,
            low_point: fractal.low_point,
            ..PivotRow::new(bar.timestamp)
        })
        .collect();

    classify_trends(&mut rows, params.left_span, params.right_span, params.max_trend_periods);
    Ok(rows)
}

/// Calculate pivots with default parameters (2, 2, 20, high/low)
pub fn calculate_pivots_default(bars: &[Bar]) -> Result<Vec<PivotRow>, IndicatorError> {
    calculate_pivots(bars, &PivotParams::default())
}

/// Label trends between successive extremes already marked on `rows`.
pub fn classify_trends(rows: &mut [PivotRow], left_span: usize, right_span: usize, max_trend_periods: usize) {
    let mut high_ref = TrendReference::default();
    let mut low_ref = TrendReference::default();

    for i in left_span..rows.len().saturating_sub(right_span) {
        high_ref.expire(i, max_trend_periods);
        low_ref.expire(i, max_trend_periods);

        if let Some(value) = rows[i].high_point {
            if let Observation::Repaint { from, rising } = high_ref.observe(i, value) {
                let trend = if rising {
                    PivotTrend::HigherHigh
                } else {
                    PivotTrend::LowerHigh
                };
                trace!(from, to = i, ?trend, "repainting high trend");
                for row in &mut rows[from..=i] {
                    row.high_trend = Some(trend);
                }
            }
        }

        if let Some(value) = rows[i].low_point {
            if let Observation::Repaint { from, rising } = low_ref.observe(i, value) {
                let trend = if rising {
                    PivotTrend::HigherLow
                } else {
                    PivotTrend::LowerLow
                };
                trace!(from, to = i, ?trend, "repainting low trend");
                for row in &mut rows[from..=i] {
                    row.low_trend = Some(trend);
                }
            }
        }
    }
}
