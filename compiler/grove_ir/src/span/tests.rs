use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn test_span_point_is_empty() {
    let point = Span::point(42);
    assert!(point.is_empty());
    assert_eq!(point.to_range(), 42..42);
}

#[test]
fn test_span_try_from_range_overflow() {
    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Span::try_from_range(large..large + 1),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_range(0..large),
        Err(SpanError::EndTooLarge(_))
    ));
    assert_eq!(Span::try_from_range(3..7), Ok(Span::new(3, 7)));
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::StartTooLarge(0x1_0000_0000).to_string();
    assert!(msg.contains("start"));
    assert!(msg.contains("0x100000000"));
}

#[test]
fn test_line_col_back_clamps() {
    let pos = LineCol::new(3, 5);
    assert_eq!(pos.back(2), LineCol::new(3, 3));
    assert_eq!(pos.back(9), LineCol::new(3, 1));
}

#[test]
fn test_line_col_ordering() {
    assert!(LineCol::new(1, 9) < LineCol::new(2, 1));
    assert_eq!(format!("{:?}", LineCol::START), "1:1");
    assert_eq!(LineCol::default(), LineCol::START);
}
