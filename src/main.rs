use std::{env, io, path::PathBuf, process::ExitCode, time::Instant};

use scanner::{
    display_error, init_tracing,
    lexer::{config::LexerConfig, lexer::tokenize_with},
    read_source,
    symbols::symbols::build_identifier_table,
};
use tracing::info;

const DEFAULT_SOURCE: &str = "main_code.c";

fn main() -> ExitCode {
    init_tracing();

    let mut legacy_lines = false;
    let mut file_path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--legacy-lines" => legacy_lines = true,
            "-h" | "--help" => {
                println!("usage: scanner [--legacy-lines] [FILE]");
                return ExitCode::SUCCESS;
            }
            _ if file_path.is_none() => file_path = Some(PathBuf::from(arg)),
            _ => {
                eprintln!("Incorrect arguments provided!");
                return ExitCode::FAILURE;
            }
        }
    }

    let file = file_path.unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));

    let source = match read_source(&file) {
        Ok(source) => source,
        Err(err) => {
            println!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if source.is_empty() {
        info!(file = %file.display(), "source is empty, nothing to tokenize");
        return ExitCode::SUCCESS;
    }

    println!("Successfully read code from '{}':\n", file.display());

    let config = if legacy_lines {
        LexerConfig::legacy_line_numbers()
    } else {
        LexerConfig::default()
    };

    let start = Instant::now();
    let tokens = match tokenize_with(&source, &config) {
        Ok(tokens) => tokens,
        Err(err) => {
            println!();
            if let Err(io_err) = display_error(&mut io::stdout().lock(), &err, &source, &file) {
                eprintln!("failed to write diagnostic: {}", io_err);
            }
            return ExitCode::FAILURE;
        }
    };
    info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    println!("Tokens:");
    for token in &tokens {
        println!("{}", token);
    }

    println!("\nSymbol Table:");
    print!("{}", build_identifier_table(&tokens));

    ExitCode::SUCCESS
}
