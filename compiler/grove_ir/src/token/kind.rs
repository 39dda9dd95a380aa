//! Token kinds for Groovy source.

use std::fmt;

/// Every kind of token the lexer produces.
///
/// Fieldless so that it stays `Copy` and totally ordered; literal payloads
/// travel separately in [`LiteralValue`](super::LiteralValue). The derived
/// `Ord` follows declaration order, which lets callers keep sorted
/// `&[TokenKind]` tables and test membership with `binary_search`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // String family
    StringLiteral,
    GStringBegin,
    GStringEnd,
    GStringPart,
    GStringPathPart,
    /// Zero-width, hidden marker that ends a `$name.path` splice.
    RollBackOne,

    // Contextual keywords
    As,
    Def,
    In,
    Trait,
    Threadsafe,
    Var,
    /// `boolean`, `byte`, `char`, `short`, `int`, `long`, `float`, `double`
    BuiltInPrimitiveType,

    // Reserved keywords
    Abstract,
    Assert,
    Break,
    Yield,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Else,
    Enum,
    Extends,
    Final,
    Finally,
    For,
    If,
    Goto,
    Implements,
    Import,
    Instanceof,
    Interface,
    Native,
    New,
    NonSealed,
    Package,
    Permits,
    Private,
    Protected,
    Public,
    Record,
    Return,
    Sealed,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Void,
    Volatile,
    While,

    // Literals
    IntegerLiteral,
    FloatingPointLiteral,
    BooleanLiteral,
    NullLiteral,

    // Groovy operators
    RangeInclusive,
    RangeExclusiveLeft,
    RangeExclusiveRight,
    RangeExclusiveFull,
    SpreadDot,
    SafeDot,
    SafeIndex,
    SafeChainDot,
    Elvis,
    MethodPointer,
    MethodReference,
    RegexFind,
    RegexMatch,
    Power,
    PowerAssign,
    Spaceship,
    Identical,
    NotIdentical,
    Implies,
    Arrow,
    NotInstanceof,
    NotIn,

    // Separators
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    Semi,
    Comma,
    Dot,

    // Java operators
    Assign,
    Gt,
    Lt,
    Not,
    BitNot,
    Question,
    Colon,
    Equal,
    Le,
    Ge,
    NotEqual,
    And,
    Or,
    Inc,
    Dec,
    Add,
    Sub,
    Mul,
    Div,
    BitAnd,
    BitOr,
    Xor,
    Mod,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ModAssign,
    LshiftAssign,
    RshiftAssign,
    UrshiftAssign,
    ElvisAssign,

    // Names
    CapitalizedIdentifier,
    Identifier,

    // Misc
    At,
    Ellipsis,

    // Trivia
    Whitespace,
    Newline,
    LineComment,
    BlockComment,
    Shebang,

    /// Lenient-mode stand-in for text no rule accepts.
    UnexpectedChar,
    Eof,
}

impl TokenKind {
    /// Human-readable name, used in diagnostics and debug dumps.
    pub fn display_name(self) -> &'static str {
        if let Some(text) = self.fixed_text() {
            return text;
        }
        match self {
            TokenKind::StringLiteral => "string literal",
            TokenKind::GStringBegin => "interpolated string start",
            TokenKind::GStringEnd => "interpolated string end",
            TokenKind::GStringPart => "interpolated string part",
            TokenKind::GStringPathPart => "interpolation path",
            TokenKind::RollBackOne => "rollback",
            TokenKind::BuiltInPrimitiveType => "primitive type",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::FloatingPointLiteral => "floating-point literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::NullLiteral => "null",
            TokenKind::CapitalizedIdentifier => "capitalized identifier",
            TokenKind::Identifier => "identifier",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Shebang => "shebang",
            TokenKind::UnexpectedChar => "unexpected character",
            TokenKind::Eof => "end of file",
            _ => "token",
        }
    }

    /// Source text for kinds that always spell the same way.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::As => "as",
            TokenKind::Def => "def",
            TokenKind::In => "in",
            TokenKind::Trait => "trait",
            TokenKind::Threadsafe => "threadsafe",
            TokenKind::Var => "var",
            TokenKind::Abstract => "abstract",
            TokenKind::Assert => "assert",
            TokenKind::Break => "break",
            TokenKind::Yield => "yield",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Default => "default",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::Extends => "extends",
            TokenKind::Final => "final",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Goto => "goto",
            TokenKind::Implements => "implements",
            TokenKind::Import => "import",
            TokenKind::Instanceof => "instanceof",
            TokenKind::Interface => "interface",
            TokenKind::Native => "native",
            TokenKind::New => "new",
            TokenKind::NonSealed => "non-sealed",
            TokenKind::Package => "package",
            TokenKind::Permits => "permits",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Record => "record",
            TokenKind::Return => "return",
            TokenKind::Sealed => "sealed",
            TokenKind::Static => "static",
            TokenKind::Strictfp => "strictfp",
            TokenKind::Super => "super",
            TokenKind::Switch => "switch",
            TokenKind::Synchronized => "synchronized",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::Throws => "throws",
            TokenKind::Transient => "transient",
            TokenKind::Try => "try",
            TokenKind::Void => "void",
            TokenKind::Volatile => "volatile",
            TokenKind::While => "while",
            TokenKind::RangeInclusive => "..",
            TokenKind::RangeExclusiveLeft => "<..",
            TokenKind::RangeExclusiveRight => "..<",
            TokenKind::RangeExclusiveFull => "<..<",
            TokenKind::SpreadDot => "*.",
            TokenKind::SafeDot => "?.",
            TokenKind::SafeIndex => "?[",
            TokenKind::SafeChainDot => "??.",
            TokenKind::Elvis => "?:",
            TokenKind::MethodPointer => ".&",
            TokenKind::MethodReference => "::",
            TokenKind::RegexFind => "=~",
            TokenKind::RegexMatch => "==~",
            TokenKind::Power => "**",
            TokenKind::PowerAssign => "**=",
            TokenKind::Spaceship => "<=>",
            TokenKind::Identical => "===",
            TokenKind::NotIdentical => "!==",
            TokenKind::Implies => "==>",
            TokenKind::Arrow => "->",
            TokenKind::NotInstanceof => "!instanceof",
            TokenKind::NotIn => "!in",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBrack => "[",
            TokenKind::RBrack => "]",
            TokenKind::Semi => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Assign => "=",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Not => "!",
            TokenKind::BitNot => "~",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Equal => "==",
            TokenKind::Le => "<=",
            TokenKind::Ge => ">=",
            TokenKind::NotEqual => "!=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::BitAnd => "&",
            TokenKind::BitOr => "|",
            TokenKind::Xor => "^",
            TokenKind::Mod => "%",
            TokenKind::AddAssign => "+=",
            TokenKind::SubAssign => "-=",
            TokenKind::MulAssign => "*=",
            TokenKind::DivAssign => "/=",
            TokenKind::AndAssign => "&=",
            TokenKind::OrAssign => "|=",
            TokenKind::XorAssign => "^=",
            TokenKind::ModAssign => "%=",
            TokenKind::LshiftAssign => "<<=",
            TokenKind::RshiftAssign => ">>=",
            TokenKind::UrshiftAssign => ">>>=",
            TokenKind::ElvisAssign => "?=",
            TokenKind::At => "@",
            TokenKind::Ellipsis => "...",
            _ => return None,
        };
        Some(text)
    }

    /// Keywords, including the contextual ones and the literal keywords
    /// `true`, `false` and `null`.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::BuiltInPrimitiveType | TokenKind::BooleanLiteral | TokenKind::NullLiteral
        ) || (self >= TokenKind::As && self <= TokenKind::While)
    }

    /// Whitespace, comments and shebang lines.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::Shebang
        )
    }

    /// Kinds that start a literal value.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::IntegerLiteral
                | TokenKind::FloatingPointLiteral
                | TokenKind::BooleanLiteral
                | TokenKind::NullLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
