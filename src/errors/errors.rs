use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

/// A fatal lexical error. Scanning stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at line {line}")]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
    /// Byte offset of the failing position, for pointing at it in diagnostics.
    offset: Option<usize>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
            offset: None,
        }
    }

    pub fn at_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn get_symbol(&self) -> Option<char> {
        match &self.internal_error {
            ErrorImpl::InvalidSymbol { symbol } => Some(*symbol),
            ErrorImpl::UnexpectedToken => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidSymbol { .. } => "InvalidSymbol",
            ErrorImpl::UnexpectedToken => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidSymbol { symbol: '"' | '\'' } => ErrorTip::Suggestion(String::from(
                "String literals must be closed on the line they start",
            )),
            ErrorImpl::InvalidSymbol { symbol: '\r' } => ErrorTip::Suggestion(String::from(
                "Carriage returns are not accepted, use `\\n` line endings",
            )),
            ErrorImpl::InvalidSymbol { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Invalid symbol {symbol:?}")]
    InvalidSymbol { symbol: char },
    #[error("Unexpected token")]
    UnexpectedToken,
}

/// Failures of the source reader. Either one means there is no input to
/// tokenize.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("The file '{}' was not found.", .path.display())]
    NotFound { path: PathBuf },
    #[error("Could not read the file '{}'.", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
