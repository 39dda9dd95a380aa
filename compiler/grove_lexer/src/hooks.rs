//! Observation points for embedders.

/// Callbacks the scanner invokes as it enters and leaves delimiters and
/// when it gives a character back.
///
/// The defaults do nothing. Hooks only observe: the scanner's own state is
/// already updated when they run, and nothing they do feeds back into
/// scanning.
pub trait ScanHooks {
    /// A delimiter frame was pushed for `text` (`(`, `[`, `?[` or `{`).
    fn enter_delimiter(&mut self, text: &str) {
        let _ = text;
    }

    /// A closing delimiter was matched, whether or not a frame was open.
    fn exit_delimiter(&mut self, text: &str) {
        let _ = text;
    }

    /// The character that ended a bare splice was put back.
    fn rollback_one_char(&mut self) {}
}

/// Hooks that do nothing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NoHooks;

impl ScanHooks for NoHooks {}
