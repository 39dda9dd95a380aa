use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::E0003)
        .with_message("Invalid octal number")
        .at(Span::new(1, 2), LineCol::new(1, 2))
        .with_note("octal literals only use digits 0-7");

    assert!(!diag.recovered);
    assert_eq!(diag.span, Span::new(1, 2));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_display_format() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("Unexpected character: '#'")
        .at(Span::new(4, 5), LineCol::new(2, 1))
        .with_note("only `#!` is allowed");

    assert_eq!(
        diag.to_string(),
        "error [E0002]: Unexpected character: '#'\n  --> 2:1 (4..5)\n  = note: only `#!` is allowed"
    );
}

#[test]
fn test_recovered_flag() {
    let diag = Diagnostic::error(ErrorCode::E0006).recovered();
    assert!(diag.recovered);
    assert_eq!(diag.code, ErrorCode::E0006);
}
