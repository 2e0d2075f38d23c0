use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Which side of a bar is compared when looking for extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalMode {
    /// Close only: both sides of the evaluation pair are the close.
    #[default]
    Close,
    /// Bar high for upward extremes, bar low for downward extremes.
    HighLow,
}

/// Per-bar pair of values used for extremum comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalPoint {
    /// 1-based position in the bar sequence
    pub position: usize,
    pub high: Decimal,
    pub low: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    High,
    Low,
    /// Provisional trailing extreme that never met the threshold.
    Unclassified,
}

impl Polarity {
    pub fn is_confirmed(self) -> bool {
        !matches!(self, Polarity::Unclassified)
    }
}

/// A reversal point handed from the scanner to the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedPoint {
    /// 1-based position in the bar sequence
    pub position: usize,
    pub value: Decimal,
    pub polarity: Polarity,
}

impl ConfirmedPoint {
    pub fn new(position: usize, value: Decimal, polarity: Polarity) -> Self {
        Self {
            position,
            value,
            polarity,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.polarity.is_confirmed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZigZagRow {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zig_zag: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_type: Option<Polarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrace_high: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrace_low: Option<Decimal>,
}

impl ZigZagRow {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            zig_zag: None,
            point_type: None,
            retrace_high: None,
            retrace_low: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PivotTrend {
    HigherHigh,
    LowerHigh,
    HigherLow,
    LowerLow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotRow {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_point: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_point: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_trend: Option<PivotTrend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_trend: Option<PivotTrend>,
}

impl PivotRow {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            high_point: None,
            low_point: None,
            high_trend: None,
            low_trend: None,
        }
    }
}

/// ZigZag parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZigZagParams {
    #[serde(default)]
    pub mode: EvalMode,
    /// Minimum reversal size in percent (5 means 5%)
    #[serde(default = "default_percent_change")]
    pub percent_change: Decimal,
}

fn default_percent_change() -> Decimal {
    dec!(5)
}

impl ZigZagParams {
    pub fn new(mode: EvalMode, percent_change: Decimal) -> Self {
        Self {
            mode,
            percent_change,
        }
    }

    /// Reversal threshold as a fraction of the running extreme.
    pub fn threshold(&self) -> Decimal {
        self.percent_change / dec!(100)
    }
}

impl Default for ZigZagParams {
    fn default() -> Self {
        Self::new(EvalMode::Close, default_percent_change())
    }
}

/// Pivots (Williams fractal) parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotParams {
    #[serde(default = "default_span")]
    pub left_span: usize,
    #[serde(default = "default_span")]
    pub right_span: usize,
    #[serde(default = "default_max_trend_periods")]
    pub max_trend_periods: usize,
    #[serde(default = "default_pivot_mode")]
    pub mode: EvalMode,
}

fn default_span() -> usize {
    2
}

fn default_max_trend_periods() -> usize {
    20
}

fn default_pivot_mode() -> EvalMode {
    EvalMode::HighLow
}

impl PivotParams {
    pub fn new(left_span: usize, right_span: usize, max_trend_periods: usize, mode: EvalMode) -> Self {
        Self {
            left_span,
            right_span,
            max_trend_periods,
            mode,
        }
    }
}

impl Default for PivotParams {
    fn default() -> Self {
        Self::new(
            default_span(),
            default_span(),
            default_max_trend_periods(),
            default_pivot_mode(),
        )
    }
}
