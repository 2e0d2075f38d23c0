//! Unit tests for bar evaluation

use chrono::Utc;
use rust_decimal_macros::dec;
use swingtrace::indicators::structure::evaluate;
use swingtrace::models::{Bar, EvalMode};

fn create_test_bar() -> Bar {
    Bar::new(dec!(100), dec!(105), dec!(98), dec!(102), dec!(1000), Utc::now())
}

#[test]
fn test_close_mode_uses_close_for_both_sides() {
    let eval = evaluate(EvalMode::Close, 7, &create_test_bar());
    assert_eq!(eval.position, 7);
    assert_eq!(eval.high, dec!(102));
    assert_eq!(eval.low, dec!(102));
}

#[test]
fn test_high_low_mode_uses_bar_range() {
    let eval = evaluate(EvalMode::HighLow, 1, &create_test_bar());
    assert_eq!(eval.position, 1);
    assert_eq!(eval.high, dec!(105));
    assert_eq!(eval.low, dec!(98));
}
