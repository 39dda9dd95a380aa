//! Keyword and literal-word resolution for identifiers.
//!
//! Groovy's contextual keywords (`as`, `def`, `in`, `trait`, `var`, ...)
//! always come out as their own token kinds; deciding whether one is used
//! as a name is the parser's business. `true`, `false` and `null` resolve
//! to literal kinds, and the eight primitive type names share
//! [`TokenKind::BuiltInPrimitiveType`].
//!
//! `non-sealed` never reaches this table: the hyphen means the raw matcher
//! has to recognise it as a whole.

use grove_ir::TokenKind;

/// Look up a keyword by its exact text.
///
/// Uses the length as a first filter: every entry is 2-12 bytes and
/// starts with a lowercase ASCII letter.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if !(2..=12).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "as" => Some(TokenKind::As),
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            _ => None,
        },
        3 => match text {
            "def" => Some(TokenKind::Def),
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::BuiltInPrimitiveType),
            "new" => Some(TokenKind::New),
            "try" => Some(TokenKind::Try),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "byte" | "char" | "long" => Some(TokenKind::BuiltInPrimitiveType),
            "case" => Some(TokenKind::Case),
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "goto" => Some(TokenKind::Goto),
            "null" => Some(TokenKind::NullLiteral),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::BooleanLiteral),
            "void" => Some(TokenKind::Void),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "catch" => Some(TokenKind::Catch),
            "class" => Some(TokenKind::Class),
            "const" => Some(TokenKind::Const),
            "false" => Some(TokenKind::BooleanLiteral),
            "final" => Some(TokenKind::Final),
            "float" | "short" => Some(TokenKind::BuiltInPrimitiveType),
            "super" => Some(TokenKind::Super),
            "throw" => Some(TokenKind::Throw),
            "trait" => Some(TokenKind::Trait),
            "while" => Some(TokenKind::While),
            "yield" => Some(TokenKind::Yield),
            _ => None,
        },
        6 => match text {
            "assert" => Some(TokenKind::Assert),
            "double" => Some(TokenKind::BuiltInPrimitiveType),
            "import" => Some(TokenKind::Import),
            "native" => Some(TokenKind::Native),
            "public" => Some(TokenKind::Public),
            "record" => Some(TokenKind::Record),
            "return" => Some(TokenKind::Return),
            "sealed" => Some(TokenKind::Sealed),
            "static" => Some(TokenKind::Static),
            "switch" => Some(TokenKind::Switch),
            "throws" => Some(TokenKind::Throws),
            _ => None,
        },
        7 => match text {
            "boolean" => Some(TokenKind::BuiltInPrimitiveType),
            "default" => Some(TokenKind::Default),
            "extends" => Some(TokenKind::Extends),
            "finally" => Some(TokenKind::Finally),
            "package" => Some(TokenKind::Package),
            "permits" => Some(TokenKind::Permits),
            "private" => Some(TokenKind::Private),
            _ => None,
        },
        8 => match text {
            "abstract" => Some(TokenKind::Abstract),
            "continue" => Some(TokenKind::Continue),
            "strictfp" => Some(TokenKind::Strictfp),
            "volatile" => Some(TokenKind::Volatile),
            _ => None,
        },
        9 => match text {
            "interface" => Some(TokenKind::Interface),
            "protected" => Some(TokenKind::Protected),
            "transient" => Some(TokenKind::Transient),
            _ => None,
        },
        10 => match text {
            "implements" => Some(TokenKind::Implements),
            "instanceof" => Some(TokenKind::Instanceof),
            "threadsafe" => Some(TokenKind::Threadsafe),
            _ => None,
        },
        12 => match text {
            "synchronized" => Some(TokenKind::Synchronized),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
