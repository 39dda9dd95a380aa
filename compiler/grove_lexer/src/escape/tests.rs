use pretty_assertions::assert_eq;

use super::*;

fn cook(content: &str, family: EscapeFamily) -> (Option<String>, Vec<BadEscape>) {
    let mut bad = Vec::new();
    let cooked = unescape(content, family, &mut bad);
    (cooked, bad)
}

fn quoted(content: &str) -> String {
    let (cooked, bad) = cook(content, EscapeFamily::Quoted);
    assert_eq!(bad, vec![], "{content:?}");
    cooked.unwrap_or_else(|| content.to_owned())
}

#[test]
fn fast_path_without_backslash() {
    assert_eq!(cook("plain text", EscapeFamily::Quoted), (None, vec![]));
    assert_eq!(cook("a/b", EscapeFamily::Slashy), (None, vec![]));
    assert_eq!(cook("no dollars", EscapeFamily::DollarSlashy), (None, vec![]));
}

#[test]
fn simple_escapes() {
    assert_eq!(quoted(r"a\tb\nc"), "a\tb\nc");
    assert_eq!(quoted(r#"\"\'\\\$"#), "\"'\\$");
    assert_eq!(quoted(r"\b\f\r\s"), "\u{8}\u{c}\r ");
}

#[test]
fn octal_escapes() {
    assert_eq!(quoted(r"\0"), "\0");
    assert_eq!(quoted(r"\101"), "A");
    assert_eq!(quoted(r"\377"), "\u{ff}");
    assert_eq!(quoted(r"\477"), "'7");
    assert_eq!(quoted(r"\18"), "\u{1}8");
}

#[test]
fn unicode_escapes() {
    assert_eq!(quoted(r"\u0041"), "A");
    assert_eq!(quoted(r"\uuu00e9"), "é");
    assert_eq!(quoted(r"\uD83D\uDE00"), "😀");
    assert_eq!(quoted(r"\uD83D!"), "\u{FFFD}!");
}

#[test]
fn line_continuation_is_removed() {
    assert_eq!(quoted("a\\\nb"), "ab");
    assert_eq!(quoted("a\\\r\nb"), "ab");
}

#[test]
fn invalid_escape_is_kept_and_reported() {
    let (cooked, bad) = cook(r"ab\qc", EscapeFamily::Quoted);
    assert_eq!(cooked.as_deref(), Some(r"ab\qc"));
    assert_eq!(
        bad,
        vec![BadEscape {
            offset: 2,
            len: 2,
            escaped: 'q'
        }]
    );
}

#[test]
fn short_unicode_escape_is_invalid() {
    let (_, bad) = cook(r"\u12", EscapeFamily::Quoted);
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].escaped, 'u');
}

#[test]
fn slashy_keeps_regex_backslashes() {
    let (cooked, bad) = cook(r"\d+\/\w", EscapeFamily::Slashy);
    assert_eq!(cooked.as_deref(), Some(r"\d+/\w"));
    assert!(bad.is_empty());
}

#[test]
fn dollar_slashy_escapes() {
    let (cooked, bad) = cook("a$$b$/c$/$d$", EscapeFamily::DollarSlashy);
    assert_eq!(cooked.as_deref(), Some("a$b/c/$d$"));
    assert!(bad.is_empty());
}

#[test]
fn dollar_slashy_keeps_backslashes() {
    let (cooked, _) = cook(r"C:\dir\u0041", EscapeFamily::DollarSlashy);
    assert_eq!(cooked.as_deref(), Some(r"C:\dirA"));
}
