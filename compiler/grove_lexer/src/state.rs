//! Mutable scanner state.

use grove_ir::TokenKind;

use crate::{regex_ambiguity, DelimiterStack, ModeStack};

/// Everything the scanner remembers between tokens.
///
/// Owned by exactly one scanner. A caller can build one up front (see
/// [`CoreScanner::with_state`](crate::CoreScanner::with_state)) to resume
/// scanning in the middle of a construct.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScanState {
    pub(crate) modes: ModeStack,
    pub(crate) delimiters: DelimiterStack,
    /// Kind of the most recent default-channel token.
    pub(crate) last_significant: Option<TokenKind>,
    /// Tokens emitted so far, trivia excluded.
    pub(crate) token_index: u32,
    /// Digits counted by the last octal check.
    pub(crate) invalid_digit_count: u32,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start as if a default-channel `kind` token had just been emitted.
    #[must_use]
    pub fn after(mut self, kind: TokenKind) -> Self {
        self.last_significant = Some(kind);
        self.token_index = self.token_index.max(1);
        self
    }

    pub fn modes(&self) -> &ModeStack {
        &self.modes
    }

    pub fn delimiters(&self) -> &DelimiterStack {
        &self.delimiters
    }

    pub fn last_significant(&self) -> Option<TokenKind> {
        self.last_significant
    }

    pub fn token_index(&self) -> u32 {
        self.token_index
    }

    pub fn invalid_digit_count(&self) -> u32 {
        self.invalid_digit_count
    }

    /// May a `/` at the current position open a slash literal?
    #[inline]
    pub fn regex_allowed(&self) -> bool {
        regex_ambiguity::regex_allowed(self.last_significant)
    }
}
