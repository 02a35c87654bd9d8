//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! stream of classified tokens. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Reclassification of reserved words as keywords
//! - Line tracking for diagnostics
//! - Skipping comments, newlines and whitespace

pub mod config;
pub mod lexer;
pub mod tokens;
