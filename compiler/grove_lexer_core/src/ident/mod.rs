//! Identifier character classification.
//!
//! Mirrors the JVM notion of identifier characters: letters, currency
//! symbols and connector punctuation may start a name; digits and combining
//! marks may continue one. Identifier-ignorable code points (format and most
//! control characters) never count. Letter classes come from
//! `unicode-ident`'s XID tables.
//!
//! The `_in_gstring` variants are used for a bare name right after a splice
//! `$`, where another `$` starts a new splice instead of continuing the name.

/// Can `c` start an identifier?
#[inline]
pub fn is_start(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic() || c == '$' || c == '_';
    }
    !is_identifier_ignorable(c)
        && (unicode_ident::is_xid_start(c) || is_currency_symbol(c) || is_connector(c))
}

/// Can `c` continue an identifier?
#[inline]
pub fn is_continue(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '$' || c == '_';
    }
    !is_identifier_ignorable(c)
        && (unicode_ident::is_xid_continue(c) || is_currency_symbol(c) || is_connector(c))
}

#[inline]
pub fn is_start_in_gstring(c: char) -> bool {
    c != '$' && is_start(c)
}

#[inline]
pub fn is_continue_in_gstring(c: char) -> bool {
    c != '$' && is_continue(c)
}

/// Classify one or two UTF-16 code units as an identifier start.
///
/// A surrogate pair is tested as its combined code point; a lone surrogate
/// never qualifies.
pub fn is_start_utf16(units: &[u16]) -> bool {
    decode_single(units).is_some_and(is_start)
}

/// Classify one or two UTF-16 code units as an identifier continuation.
pub fn is_continue_utf16(units: &[u16]) -> bool {
    decode_single(units).is_some_and(is_continue)
}

/// Decode exactly one code point from `units`, rejecting trailing units.
fn decode_single(units: &[u16]) -> Option<char> {
    let mut decoded = char::decode_utf16(units.iter().copied());
    let c = decoded.next()?.ok()?;
    decoded.next().is_none().then_some(c)
}

/// Uppercase test used to pick `CapitalizedIdentifier`.
#[inline]
pub fn is_capitalized(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Characters skipped by JVM identifiers: C0/C1 controls other than
/// whitespace, and Unicode format characters.
fn is_identifier_ignorable(c: char) -> bool {
    matches!(
        c,
        '\u{0000}'..='\u{0008}'
            | '\u{000E}'..='\u{001B}'
            | '\u{007F}'..='\u{009F}'
            | '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{0890}'..='\u{0891}'
            | '\u{08E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

/// Unicode category Sc.
fn is_currency_symbol(c: char) -> bool {
    matches!(
        c,
        '\u{00A2}'..='\u{00A5}'
            | '\u{058F}'
            | '\u{060B}'
            | '\u{07FE}'..='\u{07FF}'
            | '\u{09F2}'..='\u{09F3}'
            | '\u{09FB}'
            | '\u{0AF1}'
            | '\u{0BF9}'
            | '\u{0E3F}'
            | '\u{17DB}'
            | '\u{20A0}'..='\u{20C0}'
            | '\u{A838}'
            | '\u{FDFC}'
            | '\u{FE69}'
            | '\u{FF04}'
            | '\u{FFE0}'..='\u{FFE1}'
            | '\u{FFE5}'..='\u{FFE6}'
            | '\u{11FDD}'..='\u{11FE0}'
            | '\u{1E2FF}'
            | '\u{1ECB0}'
    )
}

/// Unicode category Pc.
fn is_connector(c: char) -> bool {
    matches!(
        c,
        '\u{203F}' | '\u{2040}' | '\u{2054}' | '\u{FE33}' | '\u{FE34}' | '\u{FE4D}'..='\u{FE4F}'
            | '\u{FF3F}'
    )
}
