//! The diagnostic value type.

use std::fmt;

use grove_ir::{LineCol, Span};

use crate::ErrorCode;

/// A diagnostic with its code, location and message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub position: LineCol,
    /// Whether the scan went on after this diagnostic.
    pub recovered: bool,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span: Span::default(),
            position: LineCol::START,
            recovered: false,
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the byte span and the line/column the caret points at.
    pub fn at(mut self, span: Span, position: LineCol) -> Self {
        self.span = span;
        self.position = position;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Mark the diagnostic as one the scan continued past.
    pub fn recovered(mut self) -> Self {
        self.recovered = true;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error [{}]: {}\n  --> {} ({})",
            self.code, self.message, self.position, self.span
        )?;
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
