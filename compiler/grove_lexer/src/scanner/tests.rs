#![allow(clippy::unwrap_used, reason = "tests unwrap scan results")]

use grove_diagnostic::{DiagnosticSink, ErrorCode};
use grove_ir::{Channel, TokenKind};
use grove_lexer_core::ScanMode;
use pretty_assertions::assert_eq;

use super::*;

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl ScanHooks for Recorder {
    fn enter_delimiter(&mut self, text: &str) {
        self.events.push(format!("enter {text}"));
    }

    fn exit_delimiter(&mut self, text: &str) {
        self.events.push(format!("exit {text}"));
    }

    fn rollback_one_char(&mut self) {
        self.events.push("rollback".to_owned());
    }
}

fn drain<H: ScanHooks>(scanner: &mut CoreScanner<'_, H>) -> Vec<Token> {
    scanner.by_ref().map(Result::unwrap).collect()
}

#[test]
fn hooks_observe_delimiters_and_rollback() {
    let mut scanner = CoreScanner::with_hooks(
        r#""$a " + f(x)?[0]"#,
        LexOptions::strict(),
        Recorder::default(),
    );
    drain(&mut scanner);
    assert_eq!(
        scanner.hooks().events,
        vec!["rollback", "enter (", "exit )", "enter ?[", "exit ]"]
    );
}

#[test]
fn splice_brace_is_reported_to_hooks() {
    let mut scanner =
        CoreScanner::with_hooks(r#""${x}""#, LexOptions::strict(), Recorder::default());
    drain(&mut scanner);
    assert_eq!(scanner.hooks().events, vec!["enter {", "exit }"]);
}

#[test]
fn resumed_state_changes_slash_meaning() {
    fn kinds(scanner: CoreScanner<'_>) -> Vec<TokenKind> {
        scanner.map(|t| t.unwrap().kind).collect()
    }
    assert_eq!(
        kinds(CoreScanner::new("/a/", LexOptions::strict())),
        vec![TokenKind::StringLiteral, TokenKind::Eof]
    );
    let resumed = CoreScanner::new("/a/", LexOptions::strict())
        .with_state(ScanState::new().after(TokenKind::Identifier));
    assert_eq!(
        kinds(resumed),
        vec![TokenKind::Div, TokenKind::Identifier, TokenKind::Div, TokenKind::Eof]
    );
}

#[test]
fn state_tracks_index_and_last_significant() {
    let mut scanner = CoreScanner::new("#!x\nfoo  // c", LexOptions::strict());
    drain(&mut scanner);
    let state = scanner.state();
    // newline, foo, comment, eof; the shebang and blanks are not counted
    assert_eq!(state.token_index(), 4);
    assert_eq!(state.last_significant(), Some(TokenKind::Eof));
    assert!(state.modes().is_at_base());
    assert!(state.delimiters().is_empty());
}

#[test]
fn modes_during_interpolation() {
    let mut scanner = CoreScanner::new(r#""a${b}c""#, LexOptions::strict());
    let begin = scanner.next_token().unwrap().unwrap();
    assert_eq!(begin.kind, TokenKind::GStringBegin);
    assert_eq!(
        scanner.state().modes().iter().collect::<Vec<_>>(),
        vec![ScanMode::Default, ScanMode::DoubleQuoteString, ScanMode::TypeSelector]
    );
    scanner.next_token();
    assert_eq!(scanner.state().modes().top(), ScanMode::Default);
    assert_eq!(scanner.state().delimiters().top().map(|f| f.splice), Some(true));
    scanner.next_token();
    scanner.next_token();
    assert_eq!(scanner.state().modes().top(), ScanMode::DoubleQuoteString);
    assert!(scanner.state().delimiters().is_empty());
}

#[test]
fn invalid_digit_count_is_kept() {
    let mut scanner = CoreScanner::new("0_789", LexOptions::lenient());
    drain(&mut scanner);
    assert_eq!(scanner.state().invalid_digit_count(), 2);
    assert_eq!(scanner.diagnostics().len(), 1);
}

#[test]
fn fatal_error_fuses_the_iterator() {
    let mut scanner = CoreScanner::new("a \"b\nc", LexOptions::strict());
    let results: Vec<_> = scanner.by_ref().collect();
    assert_eq!(results.len(), 3);
    assert!(results[2].is_err());
    assert!(scanner.next().is_none());
    assert!(scanner.next_token().is_none());
}

#[test]
fn eof_is_yielded_once() {
    let mut scanner = CoreScanner::new("", LexOptions::strict());
    let eof = scanner.next_token().unwrap().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.channel, Channel::Default);
    assert!(scanner.next_token().is_none());
}

#[test]
fn sink_is_shared_across_scans() {
    let mut first = CoreScanner::new("a)", LexOptions::strict());
    drain(&mut first);
    let (_, sink) = first.into_parts();
    assert_eq!(sink.len(), 1);

    let mut second = CoreScanner::new("]", LexOptions::strict()).with_sink(sink);
    drain(&mut second);
    let (_, sink): (_, DiagnosticSink) = second.into_parts();
    assert_eq!(sink.len(), 2);
    let codes: Vec<ErrorCode> = sink.iter().map(|d| d.code).collect();
    assert_eq!(codes, [ErrorCode::E0006, ErrorCode::E0006]);
}

#[test]
fn comments_collected_while_streaming() {
    let mut scanner = CoreScanner::new("a /* x */ b // y", LexOptions::strict());
    drain(&mut scanner);
    let texts: Vec<_> = scanner.comments().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["/* x */", "// y"]);
}

#[test]
fn caret_position_across_lines() {
    assert_eq!(position_after(LineCol::new(3, 5), "ab"), LineCol::new(3, 7));
    assert_eq!(position_after(LineCol::new(3, 5), "a\nbc"), LineCol::new(4, 3));
    assert_eq!(position_after(LineCol::new(3, 5), "a\r\nb"), LineCol::new(4, 2));
    assert_eq!(position_after(LineCol::new(3, 5), "a\rb"), LineCol::new(4, 2));
}
