//! Line painting between ZigZag reversal points

use rust_decimal::Decimal;

use crate::models::{ConfirmedPoint, Polarity, ZigZagRow};

/// Value of the straight line from `from` to `to` at `position`.
///
/// Multiplies before dividing so interior values stay exact where they can.
/// Very large legs whose product would overflow divide first instead.
pub fn interpolate(from: &ConfirmedPoint, to: &ConfirmedPoint, position: usize) -> Decimal {
    if position == to.position || to.position == from.position {
        return to.value;
    }
    let span = Decimal::from(to.position as u64 - from.position as u64);
    let offset = Decimal::from(position as u64 - from.position as u64);
    let rise = to.value - from.value;

    let step = match rise.checked_mul(offset) {
        Some(product) => product / span,
        None => rise / span * offset,
    };
    from.value + step
}

/// Paint the main ZigZag line over `[last_point.position, next_point.position]`.
///
/// An unconfirmed seed at position 1 is not a real price anchor, so only the
/// row at `next_point` gets a value in that case. The caller moves its last
/// point to `next_point` afterwards.
pub fn paint_segment(rows: &mut [ZigZagRow], last_point: &ConfirmedPoint, next_point: &ConfirmedPoint) {
    if next_point.position <= last_point.position {
        return;
    }

    let skip_interior = last_point.position == 1 && !last_point.is_confirmed();
    let start = if skip_interior {
        next_point.position
    } else {
        last_point.position
    };

    for position in start..=next_point.position {
        let Some(row) = rows.get_mut(position - 1) else {
            break;
        };
        row.zig_zag = Some(interpolate(last_point, next_point, position));
    }

    if let Some(row) = rows.get_mut(next_point.position - 1) {
        row.point_type = next_point
            .is_confirmed()
            .then_some(next_point.polarity);
    }
}

/// Secondary lines joining successive reversal points of the same polarity.
#[derive(Debug, Clone, Default)]
pub struct RetraceTracks {
    last_high: Option<ConfirmedPoint>,
    last_low: Option<ConfirmedPoint>,
}

impl RetraceTracks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `next_point` and paint its retrace segment.
    ///
    /// The first point of each polarity only becomes the reference for the
    /// next one. Unclassified points are ignored.
    pub fn paint(&mut self, rows: &mut [ZigZagRow], next_point: &ConfirmedPoint) {
        let prior = match next_point.polarity {
            Polarity::High => self.last_high.replace(*next_point),
            Polarity::Low => self.last_low.replace(*next_point),
            Polarity::Unclassified => return,
        };
        let Some(prior) = prior else {
            return;
        };

        for position in prior.position..=next_point.position {
            let Some(row) = rows.get_mut(position - 1) else {
                break;
            };
            let value = interpolate(&prior, next_point, position);
            match next_point.polarity {
                Polarity::High => row.retrace_high = Some(value),
                _ => row.retrace_low = Some(value),
            }
        }
    }

    pub fn last_high(&self) -> Option<&ConfirmedPoint> {
        self.last_high.as_ref()
    }

    pub fn last_low(&self) -> Option<&ConfirmedPoint> {
        self.last_low.as_ref()
    }
}
