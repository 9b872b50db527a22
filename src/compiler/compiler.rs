//! Main code generation module.
//!
//! Holds the Compiler state and drives emission over a checked program. Each
//! top level statement produces one fragment of postfix code; fragments are
//! joined with single spaces in program order.

use tracing::{debug, error};

use crate::{
    ast::ast::Program, errors::errors::Error, symbol_table::registers::RegisterPool, Session,
};

use super::stmt::gen_statement;

/// The state of one code generation pass.
pub struct Compiler<'a> {
    /// Symbol table and register pool of the current compilation
    pub session: &'a mut Session,

    generated_code: String,
    log: Option<Error>,
}

impl<'a> Compiler<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Compiler {
            session,
            generated_code: String::new(),
            log: None,
        }
    }

    /// Generates code for every statement of the program in order.
    ///
    /// The first failure stops generation, discards everything emitted so far
    /// and is kept as the log of this pass.
    pub fn compile_program(&mut self, program: &Program) -> Result<(), Error> {
        for stmt in program.iter() {
            match gen_statement(self, stmt) {
                Ok(fragment) => self.emit(&fragment),
                Err(err) => {
                    error!(row = err.get_row(), "code generation failed: {}", err);

                    self.generated_code.clear();
                    self.log = Some(err.clone());
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    fn emit(&mut self, fragment: &str) {
        if fragment.trim().is_empty() {
            return;
        }

        debug!(fragment, "emitted");
        self.generated_code.push_str(fragment);
        self.generated_code.push(' ');
    }

    /// The code produced so far, without surrounding whitespace.
    pub fn get_generated_code(&self) -> &str {
        self.generated_code.trim()
    }

    /// The message of the error that stopped generation, or an empty string.
    pub fn get_log(&self) -> String {
        self.log
            .as_ref()
            .map(|err| err.get_message())
            .unwrap_or_default()
    }
}

/// Generates postfix code for a type checked program.
///
/// The session's register pool is refilled before generation starts, while
/// its symbol table must already hold every declared variable. Registers
/// handed out before a failure stay attached to their variables.
pub fn compile(program: &Program, session: &mut Session) -> Result<String, Error> {
    session.registers = RegisterPool::new();

    let mut compiler = Compiler::new(session);
    compiler.compile_program(program)?;

    Ok(compiler.get_generated_code().to_string())
}
