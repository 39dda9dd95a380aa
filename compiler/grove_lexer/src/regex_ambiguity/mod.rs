//! Deciding whether `/` opens a slash literal or divides.
//!
//! After a token that ends a value (a name, a literal, a closing bracket,
//! `++`/`--`) a `/` is division. Anywhere else, including the start of
//! input, it may open a slashy string.

use grove_ir::TokenKind;

/// Kinds after which `/` is division.
///
/// Sorted by `TokenKind`'s declaration order so membership is a binary
/// search.
const VALUE_ENDING: [TokenKind; 14] = [
    TokenKind::StringLiteral,
    TokenKind::GStringEnd,
    TokenKind::This,
    TokenKind::IntegerLiteral,
    TokenKind::FloatingPointLiteral,
    TokenKind::BooleanLiteral,
    TokenKind::NullLiteral,
    TokenKind::RParen,
    TokenKind::RBrace,
    TokenKind::RBrack,
    TokenKind::Inc,
    TokenKind::Dec,
    TokenKind::CapitalizedIdentifier,
    TokenKind::Identifier,
];

/// May a `/` following `last_significant` open a slash literal?
///
/// `last_significant` is the kind of the most recent default-channel token,
/// or `None` before the first one.
#[inline]
pub fn regex_allowed(last_significant: Option<TokenKind>) -> bool {
    last_significant.map_or(true, |kind| VALUE_ENDING.binary_search(&kind).is_err())
}
