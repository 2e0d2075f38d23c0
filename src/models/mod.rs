//! Shared data models for reversal detection.

pub mod bar;
pub mod indicators;

pub use bar::Bar;
pub use indicators::{
    ConfirmedPoint, EvalMode, EvalPoint, PivotParams, PivotRow, PivotTrend, Polarity, ZigZagParams,
    ZigZagRow,
};
