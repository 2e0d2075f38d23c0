//! Williams fractal detection over a symmetric window

use rust_decimal::Decimal;

use crate::indicators::structure::evaluator::evaluate;
use crate::models::{Bar, EvalMode};

/// Local extremes found at one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fractal {
    /// Set when the bar is strictly the highest in its window
    pub high_point: Option<Decimal>,
    /// Set when the bar is strictly the lowest in its window
    pub low_point: Option<Decimal>,
}

/// Detect local highs and lows, one entry per bar.
///
/// A bar qualifies when its evaluation value beats every other bar in the
/// `left_span` bars before and `right_span` bars after it. Bars too close to
/// either end of the sequence never qualify.
pub fn detect_fractals(bars: &[Bar], left_span: usize, right_span: usize, mode: EvalMode) -> Vec<Fractal> {
    let mut fractals = vec![Fractal::default(); bars.len()];
    if bars.len() < left_span + right_span + 1 {
        return fractals;
    }

    let evals: Vec<_> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| evaluate(mode, i + 1, bar))
        .collect();

    for i in left_span..bars.len() - right_span {
        let center = evals[i];
        let wings = evals[i - left_span..=i + right_span]
            .iter()
            .enumerate()
            .filter(|(offset, _)| *offset != left_span)
            .map(|(_, eval)| eval);

        let mut is_high = true;
        let mut is_low = true;
        for wing in wings {
            if center.high <= wing.high {
                is_high = false;
            }
            if center.low >= wing.low {
                is_low = false;
            }
        }

        if is_high {
            fractals[i].high_point = Some(center.high);
        }
        if is_low {
            fractals[i].low_point = Some(center.low);
        }
    }

    fractals
}
