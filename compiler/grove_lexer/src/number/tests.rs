use grove_ir::LiteralValue;
use pretty_assertions::assert_eq;

use super::*;

fn check(text: &str, float: bool) -> (NumberCheck, u32) {
    let mut count = 99;
    let check = validate(text, float, &mut count);
    (check, count)
}

fn value(text: &str, float: bool) -> Option<LiteralValue> {
    check(text, float).0.value
}

#[test]
fn grouped_digits_are_valid() {
    let (result, count) = check("1_000", false);
    assert_eq!(result.problem, None);
    assert_eq!(result.value, Some(LiteralValue::Integer(1000)));
    assert_eq!(count, 0);
    assert_eq!(value("1__0", false), Some(LiteralValue::Integer(10)));
}

#[test]
fn trailing_underscore_points_at_last_char() {
    let (result, _) = check("1000_", false);
    assert_eq!(result.problem, Some((NumberProblem::TrailingUnderscore, 4)));
    assert_eq!(result.value, None);
}

#[test]
fn underscore_before_suffix_or_fraction() {
    assert_eq!(
        check("10_L", false).0.problem,
        Some((NumberProblem::TrailingUnderscore, 2))
    );
    assert_eq!(
        check("1_e5", true).0.problem,
        Some((NumberProblem::TrailingUnderscore, 1))
    );
    assert_eq!(
        check("0xFF_", false).0.problem,
        Some((NumberProblem::TrailingUnderscore, 4))
    );
}

#[test]
fn octal_with_invalid_digit() {
    let (result, count) = check("08", false);
    assert_eq!(result.problem, Some((NumberProblem::InvalidOctalDigit, 1)));
    assert_eq!(count, 1);

    let (result, count) = check("01829", false);
    assert_eq!(result.problem, Some((NumberProblem::InvalidOctalDigit, 2)));
    assert_eq!(count, 3);
}

#[test]
fn octal_values() {
    assert_eq!(value("017", false), Some(LiteralValue::Integer(15)));
    assert_eq!(value("0_7", false), Some(LiteralValue::Integer(7)));
    assert_eq!(value("0", false), Some(LiteralValue::Integer(0)));
    assert_eq!(value("0L", false), Some(LiteralValue::Integer(0)));
}

#[test]
fn radix_prefixes() {
    assert_eq!(value("0xFF", false), Some(LiteralValue::Integer(255)));
    assert_eq!(value("0xdead_beefL", false), Some(LiteralValue::Integer(0xdead_beef)));
    assert_eq!(value("0xFd", false), Some(LiteralValue::Integer(0xfd)));
    assert_eq!(value("0b1010", false), Some(LiteralValue::Integer(10)));
    assert_eq!(value("0B1_0G", false), Some(LiteralValue::Integer(2)));
}

#[test]
fn floats() {
    assert_eq!(value("1.5", true), Some(LiteralValue::float(1.5)));
    assert_eq!(value("1_000.25d", true), Some(LiteralValue::float(1000.25)));
    assert_eq!(value("2e3", true), Some(LiteralValue::float(2000.0)));
    assert_eq!(value("1.5E-1f", true), Some(LiteralValue::float(0.15)));
    assert_eq!(value("3f", true), Some(LiteralValue::float(3.0)));
}

#[test]
fn hex_floats() {
    assert_eq!(value("0x1p3", true), Some(LiteralValue::float(8.0)));
    assert_eq!(value("0x1.8p1", true), Some(LiteralValue::float(3.0)));
    assert_eq!(value("0xAp-1d", true), Some(LiteralValue::float(5.0)));
}

#[test]
fn overflow_has_no_value() {
    let (result, _) = check("99999999999999999999999", false);
    assert_eq!(result.problem, None);
    assert_eq!(result.value, None);
}

#[test]
fn test_parse_int_skip_underscores() {
    assert_eq!(parse_int_skip_underscores("1_000_000", 10), Some(1_000_000));
    assert_eq!(parse_int_skip_underscores("F_F", 16), Some(255));
    assert_eq!(parse_int_skip_underscores("1_0_1_0", 2), Some(10));
    assert_eq!(parse_int_skip_underscores("9", 8), None);
}

#[test]
fn test_parse_float_skip_underscores() {
    assert_eq!(parse_float_skip_underscores("1_000.5"), Some(1000.5));
    assert_eq!(parse_float_skip_underscores("1.5e10"), Some(1.5e10));
}
