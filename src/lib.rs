//! Reversal and swing-structure indicators over price bars.
//!
//! - [`indicators::structure::calculate_zigzag`] connects confirmed
//!   percentage reversals and draws retrace lines between like extremes.
//! - [`indicators::structure::calculate_pivots`] marks fractal highs/lows and
//!   labels higher/lower highs and lows, repainting as references change.
//!
//! All prices are [`rust_decimal::Decimal`] so threshold comparisons are exact.

pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;

pub use indicators::IndicatorError;
pub use models::{Bar, EvalMode, PivotParams, PivotRow, PivotTrend, Polarity, ZigZagParams, ZigZagRow};
