//! Escape processing for string literal values.
//!
//! Each string family has its own escape set:
//!
//! - quoted (`'`, `"`, `'''`, `"""`): `\b \t \n \f \r \s \" \' \\ \$`,
//!   octal `\0`-`\377`, unicode `\uXXXX` (any number of `u`s), and a
//!   backslash-newline line continuation
//! - slashy (`/.../`): `\/`, unicode and line continuation; any other
//!   backslash is kept for the regex engine
//! - dollar-slashy (`$/.../$`): `$$` and `$/`, unicode and line continuation
//!
//! Only quoted strings can hold an invalid escape. It is kept verbatim in
//! the value and reported to the caller.

/// Which escape set applies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum EscapeFamily {
    Quoted,
    Slashy,
    DollarSlashy,
}

/// An escape the quoted family does not define.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct BadEscape {
    /// Byte offset of the backslash within the content.
    pub offset: usize,
    /// Byte length of the whole escape.
    pub len: usize,
    pub escaped: char,
}

/// Cook `content` (the text between the delimiters).
///
/// Fast path: returns `None` when nothing needs replacing, so the caller
/// can take the source slice as is.
pub(crate) fn unescape(
    content: &str,
    family: EscapeFamily,
    bad: &mut Vec<BadEscape>,
) -> Option<String> {
    let has_escape = match family {
        EscapeFamily::Quoted | EscapeFamily::Slashy => content.contains('\\'),
        EscapeFamily::DollarSlashy => content.contains(|c| c == '\\' || c == '$'),
    };
    if !has_escape {
        return None;
    }

    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(c) = rest.chars().next() {
        let offset = content.len() - rest.len();
        let consumed = match (c, family) {
            ('\\', _) => backslash(rest, family, offset, &mut out, bad),
            ('$', EscapeFamily::DollarSlashy) => match rest.as_bytes().get(1) {
                Some(b'$') => {
                    out.push('$');
                    2
                }
                Some(b'/') => {
                    out.push('/');
                    2
                }
                _ => {
                    out.push('$');
                    1
                }
            },
            _ => {
                out.push(c);
                c.len_utf8()
            }
        };
        rest = &rest[consumed..];
    }
    Some(out)
}

/// Handle the escape at the start of `rest` and return its byte length.
fn backslash(
    rest: &str,
    family: EscapeFamily,
    offset: usize,
    out: &mut String,
    bad: &mut Vec<BadEscape>,
) -> usize {
    let Some(next) = rest[1..].chars().next() else {
        out.push('\\');
        return 1;
    };

    match next {
        '\n' => return 2,
        '\r' => return if rest[2..].starts_with('\n') { 3 } else { 2 },
        'u' => {
            if let Some((ch, len)) = unicode(rest) {
                out.push(ch);
                return len;
            }
        }
        _ => {}
    }

    match family {
        EscapeFamily::Quoted => {
            if let Some(resolved) = simple_escape(next) {
                out.push(resolved);
                return 2;
            }
            if let Some((ch, len)) = octal(&rest[1..]) {
                out.push(ch);
                return len + 1;
            }
            bad.push(BadEscape {
                offset,
                len: 1 + next.len_utf8(),
                escaped: next,
            });
        }
        EscapeFamily::Slashy if next == '/' => {
            out.push('/');
            return 2;
        }
        EscapeFamily::Slashy | EscapeFamily::DollarSlashy => {}
    }
    out.push('\\');
    out.push(next);
    1 + next.len_utf8()
}

#[inline]
fn simple_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{8}'),
        't' => Some('\t'),
        'n' => Some('\n'),
        'f' => Some('\u{c}'),
        'r' => Some('\r'),
        's' => Some(' '),
        '"' => Some('"'),
        '\'' => Some('\''),
        '\\' => Some('\\'),
        '$' => Some('$'),
        _ => None,
    }
}

/// `[0-3]?[0-7]?[0-7]` at the start of `digits`.
fn octal(digits: &str) -> Option<(char, usize)> {
    let bytes = digits.as_bytes();
    let first = *bytes.first()?;
    if !(b'0'..=b'7').contains(&first) {
        return None;
    }
    let max_len = if first <= b'3' { 3 } else { 2 };
    let len = bytes
        .iter()
        .take(max_len)
        .take_while(|b| (b'0'..=b'7').contains(*b))
        .count();
    let value = u32::from_str_radix(&digits[..len], 8).ok()?;
    Some((char::from_u32(value)?, len))
}

/// `\u+XXXX`, pairing a high surrogate with a following `\uXXXX` low one.
fn unicode(rest: &str) -> Option<(char, usize)> {
    let (unit, len) = utf16_unit(rest)?;
    if let Some(ch) = char::from_u32(u32::from(unit)) {
        return Some((ch, len));
    }
    if (0xD800..0xDC00).contains(&unit) {
        if let Some((low, low_len)) = utf16_unit(&rest[len..]) {
            if let Some(Ok(ch)) = char::decode_utf16([unit, low]).next() {
                return Some((ch, len + low_len));
            }
        }
    }
    Some((char::REPLACEMENT_CHARACTER, len))
}

fn utf16_unit(rest: &str) -> Option<(u16, usize)> {
    let after = rest.strip_prefix('\\')?;
    let us = after.bytes().take_while(|&b| b == b'u').count();
    if us == 0 {
        return None;
    }
    let hex = after.get(us..us + 4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let unit = u16::from_str_radix(hex, 16).ok()?;
    Some((unit, 1 + us + 4))
}

#[cfg(test)]
mod tests;
