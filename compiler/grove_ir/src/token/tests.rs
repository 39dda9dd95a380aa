use super::*;

#[test]
fn kinds_are_ordered_by_declaration() {
    assert!(TokenKind::StringLiteral < TokenKind::Identifier);
    assert!(TokenKind::Dec < TokenKind::Identifier);
    assert!(TokenKind::Eof > TokenKind::UnexpectedChar);
}

#[test]
fn fixed_text_for_operators_and_keywords() {
    assert_eq!(TokenKind::RangeExclusiveFull.fixed_text(), Some("<..<"));
    assert_eq!(TokenKind::NonSealed.fixed_text(), Some("non-sealed"));
    assert_eq!(TokenKind::UrshiftAssign.fixed_text(), Some(">>>="));
    assert_eq!(TokenKind::Identifier.fixed_text(), None);
    assert_eq!(TokenKind::Identifier.display_name(), "identifier");
    assert_eq!(TokenKind::Arrow.to_string(), "->");
}

#[test]
fn keyword_and_trivia_classification() {
    assert!(TokenKind::As.is_keyword());
    assert!(TokenKind::While.is_keyword());
    assert!(TokenKind::NullLiteral.is_keyword());
    assert!(!TokenKind::IntegerLiteral.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());

    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::BlockComment.is_trivia());
    assert!(!TokenKind::Newline.is_trivia());
}

#[test]
fn token_text_and_value() {
    let source = "x = 42";
    let token = Token::new(
        TokenKind::IntegerLiteral,
        Span::new(4, 6),
        LineCol::new(1, 5),
        LineCol::new(1, 7),
    )
    .with_value(LiteralValue::Integer(42));

    assert_eq!(token.text(source), "42");
    assert_eq!(token.value.as_ref().and_then(LiteralValue::as_integer), Some(42));
    assert!(!token.is_hidden());
    assert!(token.with_channel(Channel::Hidden).is_hidden());
}

#[test]
fn float_value_round_trips_bits() {
    let value = LiteralValue::float(2.5);
    assert_eq!(value.as_float(), Some(2.5));
    assert_eq!(value, LiteralValue::float(2.5));
    assert_eq!(format!("{value:?}"), "Float(2.5)");
}
