//! Scanner configuration.
//!
//! A `LexerConfig` bundles everything the scanner reads but never changes:
//! the priority-ordered pattern table, the reserved-word set and the line
//! counting policy for block comments. Build one up front and lend it to
//! every scan; `DEFAULT_CONFIG` is the shared standard configuration.

use std::collections::HashSet;

use lazy_static::lazy_static;

use super::{
    lexer::{standard_patterns, PatternKind, RegexPattern},
    tokens::RESERVED_WORDS,
};

lazy_static! {
    pub static ref DEFAULT_CONFIG: LexerConfig = LexerConfig::default();
}

#[derive(Debug, Clone)]
pub struct LexerConfig {
    /// Patterns in priority order; the first one matching at the current
    /// position wins.
    patterns: Vec<RegexPattern>,
    reserved: HashSet<String>,
    /// When false, newlines inside `/* ... */` do not advance the line
    /// counter, which reproduces the line numbers of older diagnostics.
    count_block_comment_lines: bool,
}

impl LexerConfig {
    pub fn new<I, S>(patterns: Vec<RegexPattern>, reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LexerConfig {
            patterns,
            reserved: reserved.into_iter().map(Into::into).collect(),
            count_block_comment_lines: true,
        }
    }

    /// Standard table, but block comments leave the line counter alone.
    pub fn legacy_line_numbers() -> Self {
        LexerConfig::default().with_block_comment_lines(false)
    }

    pub fn with_block_comment_lines(mut self, count: bool) -> Self {
        self.count_block_comment_lines = count;
        self
    }

    pub fn with_reserved_words<I, S>(mut self, reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved = reserved.into_iter().map(Into::into).collect();
        self
    }

    pub fn without_pattern(mut self, kind: PatternKind) -> Self {
        self.patterns.retain(|pattern| pattern.kind != kind);
        self
    }

    pub fn patterns(&self) -> &[RegexPattern] {
        &self.patterns
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word)
    }

    pub fn counts_block_comment_lines(&self) -> bool {
        self.count_block_comment_lines
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig::new(standard_patterns(), RESERVED_WORDS.iter().copied())
    }
}
