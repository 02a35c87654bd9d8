//! Error types and error handling for the scanner.
//!
//! This module defines the errors raised while tokenizing and while
//! obtaining source text. It includes:
//!
//! - Lexical errors carrying the line they were raised on
//! - Error names and suggestions for diagnostics
//! - Errors reported by the source reader

pub mod errors;
