//! Unit tests for the ZigZag driver

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use swingtrace::indicators::structure::{
    calculate_zigzag, calculate_zigzag_default, calculate_zigzag_series, paint_zigzag, zigzag_points,
};
use swingtrace::indicators::IndicatorError;
use swingtrace::models::{Bar, ConfirmedPoint, EvalMode, Polarity, ZigZagParams};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(i as i64)
}

fn bars_from_closes(closes: &[Decimal]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar::flat(close, ts(i)))
        .collect()
}

#[test]
fn test_zigzag_insufficient_data() {
    let bars = bars_from_closes(&[dec!(100)]);
    let result = calculate_zigzag_default(&bars);
    assert_eq!(
        result,
        Err(IndicatorError::InsufficientData {
            indicator: "ZIGZAG",
            required: 2,
            actual: 1,
        })
    );
}

#[test]
fn test_zigzag_rejects_non_positive_percent_change() {
    let bars = bars_from_closes(&[dec!(100), dec!(101)]);
    let params = ZigZagParams::new(EvalMode::Close, dec!(0));
    assert!(matches!(
        calculate_zigzag(&bars, &params),
        Err(IndicatorError::InvalidParameter { param: "percent_change", .. })
    ));
}

#[test]
fn test_zigzag_points_alternate_with_retrace() {
    let bars = bars_from_closes(&[dec!(100), dec!(110), dec!(100), dec!(112), dec!(98), dec!(115)]);
    let points = zigzag_points(&bars, &ZigZagParams::default()).unwrap();
    assert_eq!(
        points,
        vec![
            ConfirmedPoint::new(1, dec!(100), Polarity::Low),
            ConfirmedPoint::new(2, dec!(110), Polarity::High),
            ConfirmedPoint::new(3, dec!(100), Polarity::Low),
            ConfirmedPoint::new(4, dec!(112), Polarity::High),
            ConfirmedPoint::new(5, dec!(98), Polarity::Low),
            ConfirmedPoint::new(6, dec!(115), Polarity::Unclassified),
        ]
    );
}

#[test]
fn test_zigzag_confirmed_seed_marks_first_row() {
    let bars = bars_from_closes(&[dec!(100), dec!(110), dec!(100)]);
    let rows = calculate_zigzag_default(&bars).unwrap();
    assert_eq!(rows[0].zig_zag, Some(dec!(100)));
    assert_eq!(rows[0].point_type, Some(Polarity::Low));
    assert_eq!(rows[1].point_type, Some(Polarity::High));
}

#[test]
fn test_zigzag_flat_series_only_marks_last_bar() {
    let bars = bars_from_closes(&[dec!(100); 5]);
    let series = calculate_zigzag_series(&bars, &ZigZagParams::default()).unwrap();

    assert_eq!(series.rows.len(), 5);
    assert!(series.rows[..4].iter().all(|r| r.zig_zag.is_none()));
    assert_eq!(series.rows[4].zig_zag, Some(dec!(100)));
    assert_eq!(series.rows[4].point_type, None);
    assert_eq!(
        series.points,
        vec![ConfirmedPoint::new(5, dec!(100), Polarity::Unclassified)]
    );
}

#[test]
fn test_paint_zigzag_matches_validated_entry_point() {
    let bars = bars_from_closes(&[dec!(100), dec!(110), dec!(100), dec!(112), dec!(98), dec!(115)]);
    let direct = paint_zigzag(&bars, EvalMode::Close, dec!(0.05));
    let validated = calculate_zigzag(&bars, &ZigZagParams::default()).unwrap();
    assert_eq!(direct.rows, validated);
}

#[test]
fn test_zigzag_sorts_input_by_timestamp() {
    let mut bars = bars_from_closes(&[dec!(100), dec!(110), dec!(100), dec!(112)]);
    bars.reverse();

    let rows = calculate_zigzag_default(&bars).unwrap();
    let timestamps: Vec<_> = rows.iter().map(|r| r.timestamp).collect();
    assert_eq!(timestamps, vec![ts(0), ts(1), ts(2), ts(3)]);
    assert_eq!(rows[1].zig_zag, Some(dec!(110)));
}
