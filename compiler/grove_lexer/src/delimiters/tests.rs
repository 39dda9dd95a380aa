use grove_ir::{LineCol, TokenKind};
use pretty_assertions::assert_eq;

use super::*;

fn frame(delimiter: Delimiter, preceding: Option<TokenKind>) -> DelimiterFrame {
    DelimiterFrame {
        delimiter,
        preceding,
        position: LineCol::START,
        offset: 0,
        splice: false,
    }
}

#[test]
fn openers_map_to_delimiters() {
    assert_eq!(Delimiter::opened_by(TokenKind::LParen), Some(Delimiter::Paren));
    assert_eq!(Delimiter::opened_by(TokenKind::LBrack), Some(Delimiter::Bracket));
    assert_eq!(Delimiter::opened_by(TokenKind::SafeIndex), Some(Delimiter::SafeIndex));
    assert_eq!(Delimiter::opened_by(TokenKind::LBrace), Some(Delimiter::Brace));
    assert_eq!(Delimiter::opened_by(TokenKind::RParen), None);
    assert_eq!(Delimiter::SafeIndex.text(), "?[");
}

#[test]
fn empty_stack_suppresses_nothing() {
    let mut stack = DelimiterStack::new();
    assert!(!stack.is_inside_suppressing_delimiter());
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn parens_and_brackets_suppress() {
    for delimiter in [Delimiter::Paren, Delimiter::Bracket, Delimiter::SafeIndex] {
        let mut stack = DelimiterStack::new();
        stack.push(frame(delimiter, Some(TokenKind::Identifier)));
        assert!(stack.is_inside_suppressing_delimiter(), "{delimiter:?}");
    }
}

#[test]
fn try_resources_keep_newlines() {
    let mut stack = DelimiterStack::new();
    stack.push(frame(Delimiter::Paren, Some(TokenKind::Try)));
    assert!(!stack.is_inside_suppressing_delimiter());
}

#[test]
fn brace_inside_paren_restores_newlines() {
    let mut stack = DelimiterStack::new();
    stack.push(frame(Delimiter::Paren, None));
    stack.push(frame(Delimiter::Brace, Some(TokenKind::Arrow)));
    assert!(!stack.is_inside_suppressing_delimiter());
    assert_eq!(stack.depth(), 2);
    stack.pop();
    assert!(stack.is_inside_suppressing_delimiter());
}
