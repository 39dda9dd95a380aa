//! Lexical scanning modes.

/// The rule set the raw matcher uses at the current position.
///
/// String modes scan literal text until a terminator or a `$` splice.
/// `TypeSelector` is active right after a splice `$` and decides between a
/// braced expression and a bare name. `PathContinuation` follows a bare
/// name and accepts `.name` segments.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ScanMode {
    #[default]
    Default,
    DoubleQuoteString,
    TripleDoubleQuoteString,
    SlashyString,
    DollarSlashyString,
    TypeSelector,
    PathContinuation,
}

impl ScanMode {
    /// Modes that scan the body of an interpolated string.
    pub fn is_string(self) -> bool {
        matches!(
            self,
            ScanMode::DoubleQuoteString
                | ScanMode::TripleDoubleQuoteString
                | ScanMode::SlashyString
                | ScanMode::DollarSlashyString
        )
    }
}
