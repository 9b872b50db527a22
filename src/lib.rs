#![allow(clippy::module_inception)]

use std::{fmt::Write, path::Path};

use anyhow::Context;
use tracing::{debug, info};

use crate::{
    compiler::compiler::compile,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::parse,
    symbol_table::{registers::RegisterPool, symbol_table::SymbolTable},
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbol_table;
pub mod type_checker;

extern crate regex;

/// State shared by the passes of a single compilation.
///
/// Each pass resets the part it owns when it starts, so one session can be
/// reused without anything leaking from a previous run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub symbol_table: SymbolTable,
    pub registers: RegisterPool,
}

impl Session {
    pub fn new() -> Self {
        Session {
            symbol_table: SymbolTable::new(),
            registers: RegisterPool::new(),
        }
    }
}

/// Result of a successful run of the whole pipeline.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub generated_code: String,
    pub session: Session,
}

fn run_pipeline(lexer: Lexer) -> Result<CompileOutput, Error> {
    let mut program = parse(lexer)?;
    debug!(statements = program.body.len(), "parsed");

    let mut session = Session::new();
    if let Some(error) = type_check(&mut program, &mut session) {
        return Err(error);
    }

    let generated_code = compile(&program, &mut session)?;
    info!(registers_left = session.registers.remaining(), "compiled");

    Ok(CompileOutput {
        generated_code,
        session,
    })
}

/// Lexes, parses, type checks and compiles an in-memory source.
pub fn compile_source(source: impl Into<String>) -> Result<CompileOutput, Error> {
    run_pipeline(Lexer::new(source))
}

/// Same as [`compile_source`] for the contents of a file.
///
/// Compilation errors are kept as [`Error`] inside the returned error and can
/// be recovered with `downcast_ref`.
pub fn compile_file(path: impl AsRef<Path>) -> anyhow::Result<CompileOutput> {
    let path = path.as_ref();
    let lexer = Lexer::from_file(path)
        .with_context(|| format!("Failed to read source file {}", path.display()))?;

    Ok(run_pipeline(lexer)?)
}

/// Returns the text of the 1-based `row` of `source`, without its line break.
pub fn get_line_at_row(source: &str, row: u32) -> Option<&str> {
    if row == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(row as usize - 1)
        .map(|line| line.trim_end_matches('\r'))
}

/// Renders a diagnostic pointing at the row the error was raised on.
///
/// ```text
/// Error: TypeMatchError (An INT variable cannot hold a FLOAT value)
/// -> program.txt
///   |
/// 2 | int b = 1.5;
///   | ^^^^^^^^^^^^ cannot assign expression of type FLOAT to variable 'b' of type INT.
/// ```
pub fn format_error(error: &Error, source: &str, file_name: &str) -> String {
    let mut output = String::new();

    let row_string = error.get_row().to_string();
    let padding = row_string.len() + 2;

    // Writing into a String cannot fail
    let _ = match error.get_tip() {
        ErrorTip::None => writeln!(output, "Error: {}", error.get_error_name()),
        tip => writeln!(output, "Error: {} ({})", error.get_error_name(), tip),
    };
    let _ = writeln!(output, "-> {}", file_name);
    let _ = writeln!(output, "{:>padding$}", "|");

    match get_line_at_row(source, error.get_row()) {
        Some(line) if !line.trim().is_empty() => {
            let line_text = line.trim();
            let _ = writeln!(output, "{} | {}", row_string, line_text);
            let _ = writeln!(
                output,
                "{:>padding$} {} {}",
                "|",
                "^".repeat(line_text.chars().count()),
                error.get_message()
            );
        }
        _ => {
            let _ = writeln!(output, "{:>padding$} {}", "|", error);
        }
    }

    output
}

/// Prints a diagnostic to stderr.
pub fn display_error(error: &Error, source: &str, file_name: &str) {
    eprint!("{}", format_error(error, source, file_name));
}
