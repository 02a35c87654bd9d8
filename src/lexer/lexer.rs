use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_PATTERN, MK_TOKEN,
};

use super::{
    config::{LexerConfig, DEFAULT_CONFIG},
    tokens::{Token, TokenKind},
};

/// A handler receives the lexer positioned at the start of a match and the
/// byte length of that match. It must consume exactly that many bytes.
pub type RegexHandler = fn(&mut Lexer<'_, '_>, usize) -> Result<(), Error>;

/// The slot a pattern occupies in the priority table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PatternKind {
    MultiComment,
    Comment,
    String,
    Number,
    Identifier,
    Operator,
    SpecialCharacter,
    Newline,
    Skip,
    Invalid,
}

#[derive(Clone)]
pub struct RegexPattern {
    pub kind: PatternKind,
    pub regex: Regex,
    pub handler: RegexHandler,
}

impl std::fmt::Debug for RegexPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexPattern")
            .field("kind", &self.kind)
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

/// The standard pattern table, highest priority first.
pub fn standard_patterns() -> Vec<RegexPattern> {
    vec![
        MK_PATTERN!(PatternKind::MultiComment, r"(?s)/\*.*?\*/", block_comment_handler),
        MK_PATTERN!(PatternKind::Comment, r"//[^\n]*", skip_handler),
        MK_PATTERN!(PatternKind::String, r#""[^"\n]*"|'[^'\n]*'"#, MK_DEFAULT_HANDLER!(TokenKind::String)),
        MK_PATTERN!(PatternKind::Number, r"\d+(\.\d+)?", MK_DEFAULT_HANDLER!(TokenKind::Number)),
        MK_PATTERN!(PatternKind::Identifier, r"[A-Za-z_][\p{L}\p{N}_]*", symbol_handler),
        MK_PATTERN!(PatternKind::Operator, r"==|!=|<=|>=|[+\-*/=<>]", MK_DEFAULT_HANDLER!(TokenKind::Operator)),
        MK_PATTERN!(PatternKind::SpecialCharacter, r"[()\[\]{};,]", MK_DEFAULT_HANDLER!(TokenKind::SpecialCharacter)),
        MK_PATTERN!(PatternKind::Newline, r"\n", newline_handler),
        MK_PATTERN!(PatternKind::Skip, r"[ \t]+", skip_handler),
        MK_PATTERN!(PatternKind::Invalid, r"(?s).", invalid_handler),
    ]
}

/// One matched span of source text. Skipped spans (comments, newlines,
/// whitespace) carry no token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub pattern: PatternKind,
    pub kind: Option<TokenKind>,
    pub text: &'a str,
}

impl Lexeme<'_> {
    pub fn is_trivia(&self) -> bool {
        self.kind.is_none()
    }

    pub fn to_token(&self) -> Option<Token> {
        self.kind.map(|kind| MK_TOKEN!(kind, self.text.to_string()))
    }
}

/// Transient scan state for a single run over one source text.
pub struct Lexer<'a, 'c> {
    config: &'c LexerConfig,
    source: &'a str,
    pos: usize,
    line: usize,
    current: PatternKind,
    lexemes: Vec<Lexeme<'a>>,
}

impl<'a, 'c> Lexer<'a, 'c> {
    pub fn new(source: &'a str, config: &'c LexerConfig) -> Lexer<'a, 'c> {
        Lexer {
            config,
            source,
            pos: 0,
            line: 1,
            current: PatternKind::Invalid,
            lexemes: vec![],
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.config.is_reserved(word)
    }

    /// Consumes `len` bytes as a token of the given kind.
    pub fn emit(&mut self, kind: TokenKind, len: usize) {
        self.advance(Some(kind), len);
    }

    /// Consumes `len` bytes without producing a token.
    pub fn skip(&mut self, len: usize) {
        self.advance(None, len);
    }

    fn advance(&mut self, kind: Option<TokenKind>, len: usize) {
        let source = self.source;
        let text = &source[self.pos..self.pos + len];
        self.pos += len;
        self.lexemes.push(Lexeme {
            pattern: self.current,
            kind,
            text,
        });
    }
}

fn skip_handler(lexer: &mut Lexer<'_, '_>, len: usize) -> Result<(), Error> {
    lexer.skip(len);
    Ok(())
}

fn newline_handler(lexer: &mut Lexer<'_, '_>, len: usize) -> Result<(), Error> {
    lexer.skip(len);
    lexer.line += 1;
    Ok(())
}

fn block_comment_handler(lexer: &mut Lexer<'_, '_>, len: usize) -> Result<(), Error> {
    let newlines = lexer.remainder()[..len].matches('\n').count();
    lexer.skip(len);

    if lexer.config.counts_block_comment_lines() {
        lexer.line += newlines;
    }

    Ok(())
}

fn symbol_handler(lexer: &mut Lexer<'_, '_>, len: usize) -> Result<(), Error> {
    let value = &lexer.remainder()[..len];

    if lexer.is_reserved(value) {
        lexer.emit(TokenKind::Keyword, len);
    } else {
        lexer.emit(TokenKind::Identifier, len);
    }

    Ok(())
}

fn invalid_handler(lexer: &mut Lexer<'_, '_>, _len: usize) -> Result<(), Error> {
    let error = match lexer.at() {
        Some(symbol) => Error::new(ErrorImpl::InvalidSymbol { symbol }, lexer.line),
        None => Error::new(ErrorImpl::UnexpectedToken, lexer.line),
    };

    Err(error.at_offset(lexer.pos))
}

/// Splits the source into matched spans, trivia included.
///
/// At each position the patterns are tried in table order and the first
/// one that matches wins, even when a later pattern would match a longer
/// span. The scan stops at the first error.
pub fn scan<'a>(source: &'a str, config: &LexerConfig) -> Result<Vec<Lexeme<'a>>, Error> {
    let mut lex = Lexer::new(source, config);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let matched = config.patterns().iter().find_map(|pattern| {
            pattern
                .regex
                .find(remainder)
                .filter(|found| found.end() > 0)
                .map(|found| (pattern, found.end()))
        });

        let Some((pattern, len)) = matched else {
            return Err(Error::new(ErrorImpl::UnexpectedToken, lex.line).at_offset(lex.pos));
        };

        trace!(pattern = ?pattern.kind, pos = lex.pos, line = lex.line, len, "matched");
        lex.current = pattern.kind;
        (pattern.handler)(&mut lex, len)?;
    }

    debug!(lexemes = lex.lexemes.len(), lines = lex.line, "scanned source");
    Ok(lex.lexemes)
}

/// Tokenizes with the standard configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(source, &DEFAULT_CONFIG)
}

pub fn tokenize_with(source: &str, config: &LexerConfig) -> Result<Vec<Token>, Error> {
    let tokens = scan(source, config)?
        .iter()
        .filter_map(Lexeme::to_token)
        .collect::<Vec<Token>>();

    debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}
