//! Bar evaluation for extremum comparison

use crate::models::{Bar, EvalMode, EvalPoint};

/// Map a bar to the pair of values compared when tracking extremes.
pub fn evaluate(mode: EvalMode, position: usize, bar: &Bar) -> EvalPoint {
    match mode {
        EvalMode::Close => EvalPoint {
            position,
            high: bar.close,
            low: bar.close,
        },
        EvalMode::HighLow => EvalPoint {
            position,
            high: bar.high,
            low: bar.low,
        },
    }
}
