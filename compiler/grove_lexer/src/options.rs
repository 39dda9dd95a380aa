//! Scanner configuration.

/// Options for one scan.
///
/// In strict mode (the default) the first fatal lexical error stops the
/// scan. In lenient mode every error becomes a recovered diagnostic and
/// scanning continues, so the token stream always reaches end of input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LexOptions {
    pub lenient: bool,
}

impl LexOptions {
    #[inline]
    pub const fn strict() -> Self {
        LexOptions { lenient: false }
    }

    #[inline]
    pub const fn lenient() -> Self {
        LexOptions { lenient: true }
    }
}
