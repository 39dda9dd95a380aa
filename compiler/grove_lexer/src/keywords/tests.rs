use grove_ir::TokenKind;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn contextual_keywords() {
    assert_eq!(lookup("as"), Some(TokenKind::As));
    assert_eq!(lookup("def"), Some(TokenKind::Def));
    assert_eq!(lookup("in"), Some(TokenKind::In));
    assert_eq!(lookup("trait"), Some(TokenKind::Trait));
    assert_eq!(lookup("threadsafe"), Some(TokenKind::Threadsafe));
    assert_eq!(lookup("var"), Some(TokenKind::Var));
}

#[test]
fn reserved_keywords() {
    assert_eq!(lookup("class"), Some(TokenKind::Class));
    assert_eq!(lookup("instanceof"), Some(TokenKind::Instanceof));
    assert_eq!(lookup("synchronized"), Some(TokenKind::Synchronized));
    assert_eq!(lookup("yield"), Some(TokenKind::Yield));
    assert_eq!(lookup("record"), Some(TokenKind::Record));
    assert_eq!(lookup("permits"), Some(TokenKind::Permits));
    assert_eq!(lookup("this"), Some(TokenKind::This));
}

#[test]
fn primitive_types_share_one_kind() {
    for name in ["boolean", "byte", "char", "short", "int", "long", "float", "double"] {
        assert_eq!(lookup(name), Some(TokenKind::BuiltInPrimitiveType), "{name}");
    }
}

#[test]
fn literal_words() {
    assert_eq!(lookup("true"), Some(TokenKind::BooleanLiteral));
    assert_eq!(lookup("false"), Some(TokenKind::BooleanLiteral));
    assert_eq!(lookup("null"), Some(TokenKind::NullLiteral));
}

#[test]
fn lookup_agrees_with_fixed_text() {
    let kinds = [
        TokenKind::Abstract,
        TokenKind::Default,
        TokenKind::Goto,
        TokenKind::Strictfp,
        TokenKind::Transient,
        TokenKind::While,
    ];
    for kind in kinds {
        let text = kind.fixed_text().unwrap_or_default();
        assert_eq!(lookup(text), Some(kind), "{text}");
    }
}

#[test]
fn not_keywords() {
    assert_eq!(lookup("foo"), None);
    assert_eq!(lookup("Class"), None);
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("non-sealed"), None);
    assert_eq!(lookup("synchronizedd"), None);
    assert_eq!(lookup(""), None);
}
