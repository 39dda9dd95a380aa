//! Low-level building blocks of the Grove lexer.
//!
//! This crate answers one question: "given the current position and the
//! active scanning mode, what is the longest lexeme that matches here?"
//! It holds no scan state beyond the cursor itself. Mode and delimiter
//! stacks, channel decisions, diagnostics and literal values all live in
//! `grove_lexer`.
//!
//! # Architecture
//!
//! - [`Cursor`]: position, line/column tracking and one-character rollback
//!   over a `&str`, exposed through the [`CharacterSource`] trait
//! - [`ident`]: Java-compatible identifier start/continuation predicates
//! - [`next_lexeme`]: per-mode longest-match dispatch returning a [`RawToken`]

mod cursor;
pub mod ident;
mod mode;
mod raw_scanner;
mod tag;

pub use cursor::{CharacterSource, Cursor, Mark};
pub use mode::ScanMode;
pub use raw_scanner::{next_lexeme, MatchContext};
pub use tag::{RawTag, RawToken};
