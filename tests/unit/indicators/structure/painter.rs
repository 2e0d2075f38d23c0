//! Unit tests for ZigZag line painting

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use swingtrace::indicators::structure::{interpolate, paint_segment, RetraceTracks};
use swingtrace::models::{ConfirmedPoint, Polarity, ZigZagRow};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(i as i64)
}

fn empty_rows(count: usize) -> Vec<ZigZagRow> {
    (0..count).map(|i| ZigZagRow::new(ts(i))).collect()
}

#[test]
fn test_interpolate_lands_exactly_on_endpoints() {
    let from = ConfirmedPoint::new(1, dec!(100), Polarity::Low);
    let to = ConfirmedPoint::new(4, dec!(101), Polarity::High);

    assert_eq!(interpolate(&from, &to, 1), dec!(100));
    assert_eq!(interpolate(&from, &to, 2), dec!(100) + dec!(1) / dec!(3));
    assert_eq!(interpolate(&from, &to, 4), dec!(101));
}

#[test]
fn test_paint_segment_fills_inclusive_range() {
    let mut rows = empty_rows(6);
    let last = ConfirmedPoint::new(2, dec!(110), Polarity::High);
    let next = ConfirmedPoint::new(5, dec!(95), Polarity::Low);

    paint_segment(&mut rows, &last, &next);

    let values: Vec<_> = rows.iter().map(|r| r.zig_zag).collect();
    assert_eq!(
        values,
        vec![None, Some(dec!(110)), Some(dec!(105)), Some(dec!(100)), Some(dec!(95)), None]
    );
    assert_eq!(rows[4].point_type, Some(Polarity::Low));
    assert_eq!(rows[2].point_type, None);
}

#[test]
fn test_paint_segment_from_unconfirmed_seed_only_marks_endpoint() {
    let mut rows = empty_rows(4);
    let seed = ConfirmedPoint::new(1, dec!(100), Polarity::Unclassified);
    let next = ConfirmedPoint::new(3, dec!(96), Polarity::Low);

    paint_segment(&mut rows, &seed, &next);

    assert_eq!(rows[0].zig_zag, None);
    assert_eq!(rows[1].zig_zag, None);
    assert_eq!(rows[2].zig_zag, Some(dec!(96)));
    assert_eq!(rows[2].point_type, Some(Polarity::Low));
    assert_eq!(rows[3].zig_zag, None);
}

#[test]
fn test_paint_segment_from_confirmed_seed_draws_first_leg() {
    let mut rows = empty_rows(3);
    let seed = ConfirmedPoint::new(1, dec!(100), Polarity::Low);
    let next = ConfirmedPoint::new(3, dec!(110), Polarity::High);

    paint_segment(&mut rows, &seed, &next);

    assert_eq!(rows[0].zig_zag, Some(dec!(100)));
    assert_eq!(rows[1].zig_zag, Some(dec!(105)));
    assert_eq!(rows[2].zig_zag, Some(dec!(110)));
}

#[test]
fn test_paint_segment_unclassified_endpoint_has_no_point_type() {
    let mut rows = empty_rows(3);
    let last = ConfirmedPoint::new(1, dec!(100), Polarity::Low);
    let next = ConfirmedPoint::new(3, dec!(104), Polarity::Unclassified);

    paint_segment(&mut rows, &last, &next);

    assert_eq!(rows[2].zig_zag, Some(dec!(104)));
    assert_eq!(rows[2].point_type, None);
}

#[test]
fn test_retrace_first_point_of_each_polarity_paints_nothing() {
    let mut rows = empty_rows(5);
    let mut tracks = RetraceTracks::new();

    tracks.paint(&mut rows, &ConfirmedPoint::new(2, dec!(110), Polarity::High));
    tracks.paint(&mut rows, &ConfirmedPoint::new(3, dec!(100), Polarity::Low));

    assert!(rows.iter().all(|r| r.retrace_high.is_none() && r.retrace_low.is_none()));
    assert_eq!(tracks.last_high().map(|p| p.position), Some(2));
    assert_eq!(tracks.last_low().map(|p| p.position), Some(3));
}

#[test]
fn test_retrace_joins_successive_highs_and_lows() {
    let mut rows = empty_rows(6);
    let mut tracks = RetraceTracks::new();

    for point in [
        ConfirmedPoint::new(2, dec!(110), Polarity::High),
        ConfirmedPoint::new(3, dec!(100), Polarity::Low),
        ConfirmedPoint::new(4, dec!(112), Polarity::High),
        ConfirmedPoint::new(5, dec!(98), Polarity::Low),
    ] {
        tracks.paint(&mut rows, &point);
    }

    let highs: Vec<_> = rows.iter().map(|r| r.retrace_high).collect();
    let lows: Vec<_> = rows.iter().map(|r| r.retrace_low).collect();
    assert_eq!(
        highs,
        vec![None, Some(dec!(110)), Some(dec!(111)), Some(dec!(112)), None, None]
    );
    assert_eq!(
        lows,
        vec![None, None, Some(dec!(100)), Some(dec!(99)), Some(dec!(98)), None]
    );
}

#[test]
fn test_retrace_ignores_unclassified_points() {
    let mut rows = empty_rows(4);
    let mut tracks = RetraceTracks::new();

    tracks.paint(&mut rows, &ConfirmedPoint::new(2, dec!(110), Polarity::High));
    tracks.paint(&mut rows, &ConfirmedPoint::new(4, dec!(120), Polarity::Unclassified));

    assert!(rows.iter().all(|r| r.retrace_high.is_none()));
    assert_eq!(tracks.last_high().map(|p| p.position), Some(2));
}

#[test]
fn test_interpolate_long_leg_with_large_prices() {
    let from = ConfirmedPoint::new(1, dec!(10000000000000000000000000), Polarity::Low);
    let to = ConfirmedPoint::new(2001, dec!(100000000000000000000000000), Polarity::High);

    assert_eq!(interpolate(&from, &to, 1), from.value);
    assert_eq!(interpolate(&from, &to, 1001), dec!(55000000000000000000000000));
    assert_eq!(interpolate(&from, &to, 2001), to.value);
}
