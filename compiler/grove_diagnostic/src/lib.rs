//! Diagnostic reporting for the Grove lexer.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Span and line/column (where it went wrong)
//! - Notes (extra context)
//!
//! Diagnostics are collected in a [`DiagnosticSink`], which is append-only
//! for the duration of a scan.

mod diagnostic;
mod error_code;
mod sink;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use sink::DiagnosticSink;
