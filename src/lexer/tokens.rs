use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("float");
        set.insert("char");
        set.insert("if");
        set.insert("else");
        set.insert("for");
        set.insert("while");
        set.insert("return");
        set.insert("void");
        set
    };
}

/// The closed set of token categories.
///
/// `MultiComment` and `Comment` only name priority slots in the pattern
/// table; the scanner never emits a token of either kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    MultiComment,
    Comment,
    String,
    Number,
    Identifier,
    Keyword,
    Operator,
    SpecialCharacter,
}

impl TokenKind {
    /// Stable label used across the crate boundary.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::MultiComment => "MULTICOMMENT",
            TokenKind::Comment => "COMMENT",
            TokenKind::String => "STRING",
            TokenKind::Number => "Constant_NUMBER",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "Operator",
            TokenKind::SpecialCharacter => "Special_Character",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, ", self.kind)?;
        write_quoted(f, &self.value)?;
        write!(f, ")")
    }
}

/// Writes a lexeme in single quotes, switching to double quotes when the
/// text holds a single quote but no double quote.
fn write_quoted(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    write!(f, "{}", quote)?;
    for ch in value.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ if ch == quote => write!(f, "\\{}", ch)?,
            _ => write!(f, "{}", ch)?,
        }
    }
    write!(f, "{}", quote)
}
