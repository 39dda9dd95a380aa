//! Stack of lexical modes.

use grove_lexer_core::ScanMode;
use smallvec::SmallVec;

/// Modes entered and not yet left, innermost last.
///
/// Never empty: the default mode at the bottom cannot be popped.
/// String nesting is rarely deeper than a handful of frames, so the
/// stack lives inline.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModeStack {
    modes: SmallVec<[ScanMode; 8]>,
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeStack {
    pub fn new() -> Self {
        let mut modes = SmallVec::new();
        modes.push(ScanMode::Default);
        ModeStack { modes }
    }

    /// The active mode.
    #[inline]
    pub fn top(&self) -> ScanMode {
        self.modes.last().copied().unwrap_or_default()
    }

    /// The mode the active one will return to.
    pub fn below_top(&self) -> Option<ScanMode> {
        let len = self.modes.len();
        len.checked_sub(2).map(|i| self.modes[i])
    }

    #[inline]
    pub fn push(&mut self, mode: ScanMode) {
        self.modes.push(mode);
    }

    /// Leave the active mode. At the base this does nothing and returns
    /// `None`.
    pub fn pop(&mut self) -> Option<ScanMode> {
        if self.modes.len() > 1 {
            self.modes.pop()
        } else {
            None
        }
    }

    /// Swap the active mode for `mode`; a push at the base.
    pub fn replace_top(&mut self, mode: ScanMode) {
        if self.modes.len() > 1 {
            self.modes.pop();
        }
        self.modes.push(mode);
    }

    /// Number of modes including the base.
    #[inline]
    pub fn depth(&self) -> usize {
        self.modes.len()
    }

    /// True when only the base mode is left.
    #[inline]
    pub fn is_at_base(&self) -> bool {
        self.modes.len() == 1
    }

    /// Drop everything above the base.
    pub fn unwind(&mut self) {
        self.modes.truncate(1);
    }

    pub fn iter(&self) -> impl Iterator<Item = ScanMode> + '_ {
        self.modes.iter().copied()
    }
}

#[cfg(test)]
mod tests;
