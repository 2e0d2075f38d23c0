//! Extreme-point scanning for ZigZag reversals
//!
//! Positions are 1-based throughout: the bar at slice index `i` has
//! position `i + 1`.

use rust_decimal::Decimal;
use tracing::trace;

use crate::indicators::structure::evaluator::evaluate;
use crate::models::{Bar, ConfirmedPoint, EvalMode, Polarity};

/// Relative move from `from` to `to`, zero when `from` is zero.
fn ratio(numerator: Decimal, base: Decimal) -> Decimal {
    numerator.checked_div(base).unwrap_or(Decimal::ZERO)
}

/// Find the point the first ZigZag leg starts from.
///
/// Every bar is compared against the first bar's evaluation pair. The first
/// bar that moves `threshold` away from it decides whether the sequence
/// opens with a Low (price went up) or a High (price went down). When no bar
/// moves far enough the seed stays unclassified at the first close.
pub fn find_initial_point(bars: &[Bar], mode: EvalMode, threshold: Decimal) -> ConfirmedPoint {
    let Some(first_bar) = bars.first() else {
        return ConfirmedPoint::new(1, Decimal::ZERO, Polarity::Unclassified);
    };
    let first = evaluate(mode, 1, first_bar);

    for (offset, bar) in bars.iter().enumerate() {
        let eval = evaluate(mode, offset + 1, bar);
        let change_up = ratio(eval.high - first.low, first.low);
        let change_dn = ratio(first.high - eval.low, first.high);

        if change_up >= threshold && change_up > change_dn {
            return ConfirmedPoint::new(1, first.low, Polarity::Low);
        }

        if change_dn >= threshold && change_dn > change_up {
            return ConfirmedPoint::new(1, first.high, Polarity::High);
        }
    }

    ConfirmedPoint::new(1, first_bar.close, Polarity::Unclassified)
}

/// Scan forward from `last_point` for the next reversal of opposite polarity.
///
/// The running extreme follows price while it keeps extending; the first bar
/// that retraces at least `threshold` from it confirms the extreme. If the
/// sequence ends first, the running extreme comes back unclassified.
pub fn find_next_point(
    bars: &[Bar],
    mode: EvalMode,
    threshold: Decimal,
    last_point: &ConfirmedPoint,
) -> ConfirmedPoint {
    let trend_up = last_point.polarity == Polarity::Low;
    let mut extreme = ConfirmedPoint::new(
        last_point.position,
        last_point.value,
        if trend_up { Polarity::High } else { Polarity::Low },
    );

    for (offset, bar) in bars.iter().enumerate().skip(last_point.position) {
        let eval = evaluate(mode, offset + 1, bar);

        let change = if trend_up {
            if eval.high >= extreme.value {
                extreme.position = eval.position;
                extreme.value = eval.high;
                continue;
            }
            ratio(extreme.value - eval.low, extreme.value)
        } else {
            if eval.low <= extreme.value {
                extreme.position = eval.position;
                extreme.value = eval.low;
                continue;
            }
            ratio(eval.high - extreme.value, extreme.value)
        };

        if change >= threshold {
            trace!(
                position = extreme.position,
                value = %extreme.value,
                polarity = ?extreme.polarity,
                confirmed_at = eval.position,
                "reversal confirmed"
            );
            return extreme;
        }
    }

    ConfirmedPoint {
        polarity: Polarity::Unclassified,
        ..extreme
    }
}
