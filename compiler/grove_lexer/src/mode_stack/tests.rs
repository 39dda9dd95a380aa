use grove_lexer_core::ScanMode;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn starts_in_default_mode() {
    let modes = ModeStack::new();
    assert_eq!(modes.top(), ScanMode::Default);
    assert_eq!(modes.depth(), 1);
    assert!(modes.is_at_base());
    assert_eq!(modes.below_top(), None);
}

#[test]
fn pop_at_base_is_a_no_op() {
    let mut modes = ModeStack::new();
    assert_eq!(modes.pop(), None);
    assert_eq!(modes.pop(), None);
    assert_eq!(modes.top(), ScanMode::Default);
    assert_eq!(modes.depth(), 1);
}

#[test]
fn push_and_pop_nest() {
    let mut modes = ModeStack::new();
    modes.push(ScanMode::DoubleQuoteString);
    modes.push(ScanMode::TypeSelector);
    assert_eq!(modes.top(), ScanMode::TypeSelector);
    assert_eq!(modes.below_top(), Some(ScanMode::DoubleQuoteString));
    assert_eq!(modes.pop(), Some(ScanMode::TypeSelector));
    assert_eq!(modes.pop(), Some(ScanMode::DoubleQuoteString));
    assert!(modes.is_at_base());
}

#[test]
fn replace_top_keeps_depth() {
    let mut modes = ModeStack::new();
    modes.push(ScanMode::SlashyString);
    modes.push(ScanMode::TypeSelector);
    modes.replace_top(ScanMode::PathContinuation);
    assert_eq!(modes.depth(), 3);
    assert_eq!(modes.top(), ScanMode::PathContinuation);
}

#[test]
fn replace_top_never_removes_base() {
    let mut modes = ModeStack::new();
    modes.replace_top(ScanMode::TypeSelector);
    assert_eq!(modes.depth(), 2);
    assert_eq!(
        modes.iter().collect::<Vec<_>>(),
        vec![ScanMode::Default, ScanMode::TypeSelector]
    );
}

#[test]
fn unwind_returns_to_base() {
    let mut modes = ModeStack::new();
    for _ in 0..20 {
        modes.push(ScanMode::DoubleQuoteString);
        modes.push(ScanMode::Default);
    }
    modes.unwind();
    assert!(modes.is_at_base());
    assert_eq!(modes.top(), ScanMode::Default);
}
