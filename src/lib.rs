#![allow(clippy::module_inception)]

use std::{
    fs,
    io::{self, Write},
    path::Path,
    sync::Once,
};

use crate::errors::errors::{Error, ErrorTip, SourceError};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod symbols;

extern crate regex;

static TRACING_INIT: Once = Once::new();

/// Installs the log subscriber. Only does anything when `RUST_LOG` is set;
/// calling it again is a no-op.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Reads a whole source file into memory.
///
/// Line endings are normalised: `\r\n` and lone `\r` both become `\n`.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Unreadable {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    Ok(normalize_newlines(&text))
}

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Returns the line containing a byte offset and the offset's column (in
/// characters, 0-based) within it.
fn line_at_offset(source: &str, offset: usize) -> Option<(&str, usize)> {
    let before = source.get(..offset)?;
    let start = before.rfind('\n').map_or(0, |newline| newline + 1);
    let end = source[offset..]
        .find('\n')
        .map_or(source.len(), |newline| offset + newline);

    let text = &source[start..end];
    let column = source[start..offset].chars().count();
    Some((text.strip_suffix('\r').unwrap_or(text), column))
}

pub fn display_error(out: &mut impl Write, error: &Error, source: &str, file: &Path) -> io::Result<()> {
    /*
        Error: InvalidSymbol
        -> main_code.c
           |
        20 | int a = @;
           |         ^
    */

    let line = error.get_line();
    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error)?;
    } else {
        writeln!(
            out,
            "Error: {} ({}, {})",
            error.get_error_name(),
            error,
            error.get_tip()
        )?;
    }
    writeln!(out, "-> {}", file.display())?;

    let located = error
        .get_offset()
        .and_then(|offset| line_at_offset(source, offset));

    let (line_text, column) = match located {
        Some((text, column)) => (text, Some(column)),
        None => match get_line(source, line) {
            Some(text) => (text, None),
            None => return Ok(()),
        },
    };

    writeln!(out, "{:>padding$}", "|")?;
    writeln!(out, "{} | {}", line_str, line_text)?;

    if let Some(column) = column {
        let arrows = column + 1;
        writeln!(out, "{:>padding$} {:>arrows$}", "|", "^")?;
    }

    Ok(())
}
