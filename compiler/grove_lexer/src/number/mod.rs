//! Number literal validation and value parsing.
//!
//! The raw matcher accepts any digit/underscore run, so grouping and radix
//! rules are checked here, once the whole literal is known:
//!
//! - an underscore must sit between two digits
//! - a decimal-looking literal with a leading `0` is octal, and may not
//!   contain `8` or `9`
//!
//! Values are parsed without allocating unless the text has underscores.
//! Integers that do not fit `u64` simply carry no value.

use grove_ir::LiteralValue;

use crate::NumberProblem;

/// Outcome of validating one literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NumberCheck {
    pub value: Option<LiteralValue>,
    /// The problem and the byte offset of the character it points at.
    pub problem: Option<(NumberProblem, usize)>,
}

/// Validate `text`, a complete literal as matched by the raw scanner.
///
/// `invalid_digit_count` is reset and, for a bad octal literal, set to the
/// number of digits from the first `8`/`9` to the end of the digit run.
pub(crate) fn validate(text: &str, float: bool, invalid_digit_count: &mut u32) -> NumberCheck {
    *invalid_digit_count = 0;

    let (mut radix, prefix) = match text.get(..2) {
        Some("0x" | "0X") => (16, 2),
        Some("0b" | "0B") => (2, 2),
        _ => (10, 0),
    };
    let body_end = text.len() - suffix_len(text, radix, float);
    let digits = &text[prefix..body_end];

    if let Some(at) = dangling_underscore(digits, radix) {
        return NumberCheck {
            value: None,
            problem: Some((NumberProblem::TrailingUnderscore, prefix + at)),
        };
    }

    if radix == 10 && !float && digits.len() > 1 && digits.starts_with('0') {
        radix = 8;
        if let Some(first) = digits.find(|c| c == '8' || c == '9') {
            let count = body_end - first;
            *invalid_digit_count = u32::try_from(count).unwrap_or(u32::MAX);
            return NumberCheck {
                value: None,
                problem: Some((NumberProblem::InvalidOctalDigit, body_end - count)),
            };
        }
    }

    let value = match (float, radix) {
        (true, 16) => parse_hex_float(digits).map(LiteralValue::float),
        (true, _) => parse_float_skip_underscores(digits).map(LiteralValue::float),
        (false, _) => parse_int_skip_underscores(digits, radix).map(LiteralValue::Integer),
    };
    NumberCheck {
        value,
        problem: None,
    }
}

/// Length of the type suffix (`L`, `G`, `f`, `d`, `i`...), 0 or 1.
///
/// In a hex integer `d` and `f` are digits, so only the non-hex suffixes
/// count there.
fn suffix_len(text: &str, radix: u32, float: bool) -> usize {
    match text.as_bytes().last() {
        Some(b'l' | b'L' | b'i' | b'I' | b'g' | b'G') => 1,
        Some(c) if c.is_ascii_alphabetic() && (float || radix != 16) => 1,
        _ => 0,
    }
}

/// Offset of the first `_` not followed by a digit.
fn dangling_underscore(digits: &str, radix: u32) -> Option<usize> {
    let bytes = digits.as_bytes();
    let is_digit = |b: u8| {
        if radix == 16 {
            b.is_ascii_hexdigit()
        } else {
            b.is_ascii_digit()
        }
    };
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'_' {
            let run_end = bytes[i..]
                .iter()
                .position(|&b| b != b'_')
                .map_or(bytes.len(), |n| i + n);
            if !bytes.get(run_end).copied().is_some_and(is_digit) {
                return Some(run_end - 1);
            }
            i = run_end;
        } else {
            i += 1;
        }
    }
    None
}

/// Parse integer skipping underscores without allocation.
#[inline]
pub(crate) fn parse_int_skip_underscores(s: &str, radix: u32) -> Option<u64> {
    let mut result: u64 = 0;
    for c in s.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix)?;
        result = result.checked_mul(u64::from(radix))?;
        result = result.checked_add(u64::from(digit))?;
    }
    Some(result)
}

/// Parse float - only allocate if underscores present.
#[inline]
pub(crate) fn parse_float_skip_underscores(s: &str) -> Option<f64> {
    if s.contains('_') {
        s.replace('_', "").parse().ok()
    } else {
        s.parse().ok()
    }
}

/// Hex float body after `0x`: hex mantissa, optional fraction, `p` exponent.
pub(crate) fn parse_hex_float(s: &str) -> Option<f64> {
    let (mantissa, exponent) = s.split_once(|c| c == 'p' || c == 'P')?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut value = 0f64;
    for c in whole.chars().chain(fraction.chars()).filter(|&c| c != '_') {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    let fraction_digits = i32::try_from(fraction.chars().filter(|&c| c != '_').count()).ok()?;
    let exponent: i32 = if exponent.contains('_') {
        exponent.replace('_', "").parse().ok()?
    } else {
        exponent.parse().ok()?
    };
    let scale = exponent.checked_sub(fraction_digits.checked_mul(4)?)?;
    Some(value * 2f64.powi(scale))
}

#[cfg(test)]
mod tests;
