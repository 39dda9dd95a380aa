//! The context-sensitive scanner.
//!
//! Each step asks the raw matcher for the longest lexeme under the active
//! mode, runs the actions [`plan`](crate::action::plan) lists for it, and
//! hands the token to the emission pipeline. Everything the raw layer
//! cannot know lives here:
//!
//! - mode transitions in and out of interpolated strings
//! - delimiter frames and the newline/comment channel rules they drive
//! - keyword lookup and literal values
//! - diagnostics, with strict mode stopping at the first fatal one

use std::iter::FusedIterator;

use grove_diagnostic::DiagnosticSink;
use grove_ir::{Channel, CommentList, LineCol, LiteralValue, Span, Token, TokenKind};
use grove_lexer_core::{ident, next_lexeme, CharacterSource, Cursor, MatchContext, RawTag, ScanMode};
use tracing::{debug, trace};

use crate::action::{self, LexicalAction};
use crate::comments::CommentCollector;
use crate::escape::{self, EscapeFamily};
use crate::{
    keywords, number, Delimiter, DelimiterFrame, LexError, LexOptions, NoHooks, ScanHooks,
    ScanState, Unterminated,
};

/// Streaming Groovy scanner.
///
/// Yields every token, hidden ones included, ending with
/// [`TokenKind::Eof`]. In strict mode the first fatal error is yielded as
/// `Err` and the iterator ends there.
pub struct CoreScanner<'src, H = NoHooks> {
    cursor: Cursor<'src>,
    state: ScanState,
    options: LexOptions,
    hooks: H,
    comments: CommentCollector,
    diagnostics: DiagnosticSink,
    done: bool,
}

/// A token being assembled from one lexeme.
struct Pending {
    token: Token,
    /// Counts toward the token index.
    counted: bool,
    /// Cleared for zero-width recovery tokens that carry nothing.
    emit: bool,
}

impl<'src> CoreScanner<'src> {
    pub fn new(source: &'src str, options: LexOptions) -> Self {
        Self::with_hooks(source, options, NoHooks)
    }
}

impl<'src, H: ScanHooks> CoreScanner<'src, H> {
    pub fn with_hooks(source: &'src str, options: LexOptions, hooks: H) -> Self {
        CoreScanner {
            cursor: Cursor::new(source),
            state: ScanState::new(),
            options,
            hooks,
            comments: CommentCollector::new(),
            diagnostics: DiagnosticSink::new(),
            done: false,
        }
    }

    /// Start from `state` instead of the beginning-of-file state.
    #[must_use]
    pub fn with_state(mut self, state: ScanState) -> Self {
        self.state = state;
        self
    }

    /// Append diagnostics to `sink` rather than a fresh one. Take it back
    /// with [`into_parts`](Self::into_parts).
    #[must_use]
    pub fn with_sink(mut self, sink: DiagnosticSink) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Comments seen so far, on either channel.
    pub fn comments(&self) -> &CommentList {
        self.comments.list()
    }

    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (CommentList, DiagnosticSink) {
        (self.comments.finish(), self.diagnostics)
    }

    /// Produce the next token.
    ///
    /// Returns `None` after `Eof` has been yielded, or after a fatal error.
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        while !self.done {
            match self.step() {
                Ok(Some(token)) => {
                    self.done = token.kind == TokenKind::Eof;
                    return Some(Ok(token));
                }
                Ok(None) => {}
                Err(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            }
        }
        None
    }

    fn step(&mut self) -> Result<Option<Token>, LexError> {
        let mode = self.state.modes.top();
        let ctx = MatchContext {
            regex_allowed: self.state.regex_allowed(),
        };
        let start = self.cursor.pos();
        let start_pos = self.cursor.line_col();

        let Some(raw) = next_lexeme(&mut self.cursor, mode, ctx) else {
            return self.no_match(mode);
        };
        if raw.tag == RawTag::Eof {
            return self.end_of_input().map(Some);
        }

        let (kind, actions) = action::plan(raw.tag, mode);
        let span = Span::new(start, start + raw.len);
        trace!(?mode, tag = ?raw.tag, %span, "matched");

        let mut pending = Pending {
            token: Token::new(kind, span, start_pos, self.cursor.line_col()),
            counted: true,
            emit: true,
        };
        for &action in actions {
            self.apply(action, &mut pending)?;
        }
        if !pending.emit {
            return Ok(None);
        }
        Ok(Some(self.emit(pending.token, pending.counted)))
    }

    fn apply(&mut self, action: LexicalAction, pending: &mut Pending) -> Result<(), LexError> {
        let token = &mut pending.token;
        let text = self.cursor.slice(token.span.start, token.span.end);
        match action {
            LexicalAction::EnterDelimiter => {
                if let Some(delimiter) = Delimiter::opened_by(token.kind) {
                    self.open_frame(delimiter, token, false);
                }
            }
            LexicalAction::ExitDelimiter => return self.close_frame(token, text),
            LexicalAction::EnterSplice => {
                self.state.modes.replace_top(ScanMode::Default);
                self.open_frame(Delimiter::Brace, token, true);
            }
            LexicalAction::EnterPath => self.state.modes.replace_top(ScanMode::PathContinuation),
            LexicalAction::BeginString(mode) => {
                self.state.modes.push(mode);
                self.state.modes.push(ScanMode::TypeSelector);
            }
            LexicalAction::PushTypeSelector => self.state.modes.push(ScanMode::TypeSelector),
            LexicalAction::PopMode => {
                self.state.modes.pop();
            }
            LexicalAction::Trivia => {
                token.channel = Channel::Hidden;
                pending.counted = false;
            }
            LexicalAction::HideInsideDelimiters => {
                if self.state.delimiters.is_inside_suppressing_delimiter() {
                    token.channel = Channel::Hidden;
                }
            }
            LexicalAction::HideBlockComment => {
                if self.state.delimiters.is_inside_suppressing_delimiter()
                    || !self.cursor.only_whitespace_until_line_end()
                {
                    token.channel = Channel::Hidden;
                }
            }
            LexicalAction::CollectComment(kind) => {
                self.comments
                    .collect(kind, token.span, token.start, token.end, text);
            }
            LexicalAction::ClassifyName => classify_name(token, text),
            LexicalAction::ValidateNumber => {
                let float = token.kind == TokenKind::FloatingPointLiteral;
                let check =
                    number::validate(text, float, &mut self.state.invalid_digit_count);
                token.value = check.value;
                if let Some((reason, at)) = check.problem {
                    let (span, position) = caret(token, text, at);
                    return self.raise(LexError::malformed_number(span, position, reason));
                }
            }
            LexicalAction::CheckShebang => {
                if self.state.token_index != 0 {
                    let span = Span::new(token.span.start, token.span.start + 2);
                    return self.raise(LexError::misplaced_shebang(span, token.start));
                }
            }
            LexicalAction::CookString {
                family,
                open,
                close,
            } => return self.cook_string(token, text, family, open, close),
            LexicalAction::RollBackOne => self.end_path(token),
            LexicalAction::ReportUnterminated(what) => {
                self.raise(LexError::unterminated(token.span, token.start, what))?;
                if self.state.modes.top().is_string() {
                    self.state.modes.pop();
                }
                pending.emit = !token.span.is_empty();
            }
        }
        Ok(())
    }

    fn open_frame(&mut self, delimiter: Delimiter, token: &Token, splice: bool) {
        self.state.delimiters.push(DelimiterFrame {
            delimiter,
            preceding: self.state.last_significant,
            position: token.start,
            offset: token.span.start,
            splice,
        });
        self.hooks.enter_delimiter(delimiter.text());
        trace!(
            delimiter = delimiter.text(),
            depth = self.state.delimiters.depth(),
            splice,
            "enter delimiter"
        );
    }

    /// Pop the innermost frame for a closer. A `)` or `]` never closes a
    /// braced splice; that frame stays for its `}`.
    fn close_frame(&mut self, token: &Token, text: &str) -> Result<(), LexError> {
        self.hooks.exit_delimiter(text);
        let closer = match token.kind {
            TokenKind::RParen => ')',
            TokenKind::RBrack => ']',
            _ => '}',
        };
        match self.state.delimiters.top().map(|frame| frame.splice) {
            None => self.raise(LexError::unbalanced_delimiter(
                token.span,
                token.start,
                closer,
            )),
            Some(true) if closer != '}' => self.raise(LexError::unbalanced_delimiter(
                token.span,
                token.start,
                closer,
            )),
            Some(splice) => {
                self.state.delimiters.pop();
                if splice {
                    self.state.modes.pop();
                    trace!(mode = ?self.state.modes.top(), "splice closed");
                }
                Ok(())
            }
        }
    }

    fn cook_string(
        &mut self,
        token: &mut Token,
        text: &str,
        family: EscapeFamily,
        open: u8,
        close: u8,
    ) -> Result<(), LexError> {
        let open = usize::from(open);
        let end = text.len().saturating_sub(usize::from(close));
        let content = text.get(open..end).unwrap_or_default();

        let mut bad = Vec::new();
        let value = escape::unescape(content, family, &mut bad).unwrap_or_else(|| content.to_owned());
        token.value = Some(LiteralValue::Str(value));

        for escape in bad {
            let at = open + escape.offset;
            let (span, position) = caret(token, text, at);
            let span = Span::new(span.start, span.start + to_u32(escape.len));
            self.raise(LexError::invalid_escape(span, position, escape.escaped))?;
        }
        Ok(())
    }

    /// The character that ended a bare splice path.
    ///
    /// If it is the enclosing string's own terminator and nothing follows,
    /// the string is closed here. Otherwise the token stays a hidden
    /// rollback and [`emit`](Self::emit) puts the character back.
    fn end_path(&mut self, token: &mut Token) {
        let terminates = matches!(
            (self.state.modes.below_top(), self.cursor.prev()),
            (Some(ScanMode::DoubleQuoteString), Some('"')) | (Some(ScanMode::SlashyString), Some('/'))
        );
        if terminates && self.cursor.is_eof() {
            token.kind = TokenKind::GStringEnd;
            token.value = Some(LiteralValue::Str(String::new()));
            self.state.modes.pop();
            self.state.modes.pop();
        } else {
            token.channel = Channel::Hidden;
            self.state.modes.pop();
        }
    }

    /// Nothing matched at the cursor.
    fn no_match(&mut self, mode: ScanMode) -> Result<Option<Token>, LexError> {
        let start = self.cursor.pos();
        let position = self.cursor.line_col();
        let found = self.cursor.current().unwrap_or(char::REPLACEMENT_CHARACTER);
        let span = Span::new(start, start + to_u32(found.len_utf8()));
        self.raise(LexError::unexpected_character(span, position, found))?;

        if mode == ScanMode::TypeSelector {
            // A `$` with no splice after it: drop the selector and let the
            // string body take this character.
            self.state.modes.pop();
            return Ok(None);
        }
        self.cursor.advance();
        let token = Token::new(TokenKind::UnexpectedChar, span, position, self.cursor.line_col());
        Ok(Some(self.emit(token, true)))
    }

    fn end_of_input(&mut self) -> Result<Token, LexError> {
        let here = Span::point(self.cursor.pos());
        let position = self.cursor.line_col();
        if self.state.modes.iter().any(ScanMode::is_string) {
            self.raise(LexError::unterminated(
                here,
                position,
                Unterminated::InterpolatedString,
            ))?;
            self.state.modes.unwind();
        }
        debug!(
            tokens = self.state.token_index,
            open_delimiters = self.state.delimiters.depth(),
            "end of input"
        );
        Ok(self.emit(Token::new(TokenKind::Eof, here, position, position), true))
    }

    /// Emission pipeline: rollback, token index, last significant kind.
    fn emit(&mut self, mut token: Token, counted: bool) -> Token {
        if token.kind == TokenKind::RollBackOne && self.cursor.rollback_one() {
            self.hooks.rollback_one_char();
            token.span = Span::point(token.span.start);
            token.end = token.start;
        }
        if counted {
            self.state.token_index += 1;
            if !token.is_hidden() {
                self.state.last_significant = Some(token.kind);
            }
        }
        trace!(
            kind = ?token.kind,
            span = %token.span,
            hidden = token.is_hidden(),
            index = self.state.token_index,
            "emit"
        );
        token
    }

    /// Record `error`. Returns it when it has to stop the scan.
    fn raise(&mut self, error: LexError) -> Result<(), LexError> {
        let fatal = !self.options.lenient && error.is_fatal();
        debug!(code = %error.code(), position = %error.position, fatal, "{error}");
        self.diagnostics.push(error.to_diagnostic(!fatal));
        if fatal {
            Err(error)
        } else {
            Ok(())
        }
    }
}

impl<H: ScanHooks> Iterator for CoreScanner<'_, H> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<H: ScanHooks> FusedIterator for CoreScanner<'_, H> {}

fn classify_name(token: &mut Token, text: &str) {
    if let Some(kind) = keywords::lookup(text) {
        token.kind = kind;
        token.value = match kind {
            TokenKind::BooleanLiteral => Some(LiteralValue::Bool(text == "true")),
            TokenKind::NullLiteral => Some(LiteralValue::Null),
            _ => None,
        };
    } else if ident::is_capitalized(text) {
        token.kind = TokenKind::CapitalizedIdentifier;
    }
}

/// Span and position of the character at byte `at` of `text`, the source
/// of `token`.
fn caret(token: &Token, text: &str, at: usize) -> (Span, LineCol) {
    let offset = token.span.start + to_u32(at);
    let width = text[at..].chars().next().map_or(0, char::len_utf8);
    let span = Span::new(offset, offset + to_u32(width));
    (span, position_after(token.start, &text[..at]))
}

/// Position reached by walking `text` from `start`.
///
/// `\n`, `\r\n` and a lone `\r` each end a line, as in the cursor.
fn position_after(start: LineCol, text: &str) -> LineCol {
    let mut position = start;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' || (c == '\r' && chars.peek() != Some(&'\n')) {
            position = LineCol::new(position.line + 1, 1);
        } else {
            position.column += 1;
        }
    }
    position
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets within one source file, whose length fits u32"
)]
#[inline]
fn to_u32(n: usize) -> u32 {
    n as u32
}

#[cfg(test)]
mod tests;
