//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored RegexPattern entry for the pattern table
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits one token of a fixed kind
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a pattern table entry.
///
/// The regex is anchored so it can only match at the current scan position.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(PatternKind::Newline, "\\n", newline_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $regex:literal, $handler:expr) => {
        RegexPattern {
            kind: $kind,
            regex: Regex::new(concat!("^(?:", $regex, ")")).unwrap(),
            handler: $handler,
        }
    };
}

/// Creates a lexer handler for patterns that always produce a single token
/// of the given kind, with the matched text as its lexeme.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(PatternKind::Number, "[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Number))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {{
        fn handler(lexer: &mut Lexer<'_, '_>, len: usize) -> Result<(), Error> {
            lexer.emit($kind, len);
            Ok(())
        }
        handler
    }};
}
