use grove_diagnostic::ErrorCode;
use grove_ir::{LineCol, Span};
use pretty_assertions::assert_eq;

use super::*;

fn at() -> (Span, LineCol) {
    (Span::new(4, 5), LineCol::new(1, 5))
}

#[test]
fn messages_match_groovy_wording() {
    let (span, pos) = at();
    assert_eq!(
        LexError::malformed_number(span, pos, NumberProblem::TrailingUnderscore).to_string(),
        "Number ending with underscores is invalid"
    );
    assert_eq!(
        LexError::malformed_number(span, pos, NumberProblem::InvalidOctalDigit).to_string(),
        "Invalid octal number"
    );
    assert_eq!(
        LexError::misplaced_shebang(span, pos).to_string(),
        "Shebang comment should appear at the first line"
    );
    assert_eq!(
        LexError::unexpected_character(span, pos, '§').to_string(),
        "Unexpected character: '§'"
    );
}

#[test]
fn unexpected_quote_is_escaped() {
    let (span, pos) = at();
    assert_eq!(
        LexError::unexpected_character(span, pos, '\'').to_string(),
        "Unexpected character: '\\''"
    );
}

#[test]
fn unterminated_names_the_construct() {
    let (span, pos) = at();
    assert_eq!(
        LexError::unterminated(span, pos, Unterminated::BlockComment).to_string(),
        "Unterminated block comment"
    );
    assert_eq!(
        LexError::unterminated(span, pos, Unterminated::InterpolatedString).to_string(),
        "Unterminated interpolated string"
    );
}

#[test]
fn codes_are_distinct_per_kind() {
    let (span, pos) = at();
    let errors = [
        LexError::unterminated(span, pos, Unterminated::String),
        LexError::unexpected_character(span, pos, '#'),
        LexError::malformed_number(span, pos, NumberProblem::InvalidOctalDigit),
        LexError::misplaced_shebang(span, pos),
        LexError::invalid_escape(span, pos, 'q'),
        LexError::unbalanced_delimiter(span, pos, ')'),
    ];
    let codes: Vec<ErrorCode> = errors.iter().map(LexError::code).collect();
    assert_eq!(codes, ErrorCode::ALL.to_vec());
}

#[test]
fn only_unbalanced_delimiters_are_non_fatal() {
    let (span, pos) = at();
    assert!(!LexError::unbalanced_delimiter(span, pos, '}').is_fatal());
    assert!(LexError::misplaced_shebang(span, pos).is_fatal());
    assert!(LexError::invalid_escape(span, pos, 'q').is_fatal());
}

#[test]
fn diagnostic_carries_location_and_hint() {
    let (span, pos) = at();
    let diagnostic = LexError::misplaced_shebang(span, pos).to_diagnostic(true);
    assert_eq!(diagnostic.code, ErrorCode::E0004);
    assert_eq!(diagnostic.span, span);
    assert_eq!(diagnostic.position, pos);
    assert!(diagnostic.recovered);
    assert_eq!(diagnostic.notes.len(), 1);
    assert_eq!(diagnostic.message, "Shebang comment should appear at the first line");
}

#[test]
fn strict_diagnostic_is_not_recovered() {
    let (span, pos) = at();
    let diagnostic = LexError::unexpected_character(span, pos, '#').to_diagnostic(false);
    assert!(!diagnostic.recovered);
    assert!(diagnostic.notes.is_empty());
}

#[test]
fn invalid_escape_hint_lists_quote_escapes() {
    let (span, pos) = at();
    let diagnostic = LexError::invalid_escape(span, pos, 'q').to_diagnostic(true);
    assert_eq!(diagnostic.code, ErrorCode::E0005);
    assert_eq!(
        diagnostic.notes,
        [r#"valid escapes are: \b, \t, \n, \f, \r, \s, \", \', \\, \$, octal and \uXXXX"#]
    );
}
