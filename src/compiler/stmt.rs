use tracing::debug;

use crate::{
    ast::{
        ast::{Identifier, Stmt},
        statements::{AssignmentStmt, PrintStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    compiler::Compiler,
    expr::{gen_expression, register_of},
};

/// Generates the code fragment of a single statement.
pub fn gen_statement(compiler: &mut Compiler, statement: &Stmt) -> Result<String, Error> {
    match statement {
        Stmt::VarDecl(var_decl) => gen_var_decl(compiler, var_decl),
        Stmt::Assignment(assignment) => gen_assignment(compiler, assignment),
        Stmt::Print(print) => gen_print(compiler, print),
    }
}

fn gen_var_decl(compiler: &mut Compiler, var_decl: &VarDeclStmt) -> Result<String, Error> {
    let register = assign_register(compiler, &var_decl.identifier)?;

    match &var_decl.assigned_value {
        Some(value) => {
            let value = gen_expression(compiler, value)?;
            Ok(format!("{} s{}", value, register))
        }
        // The register stays reserved even though nothing is stored yet
        None => Ok(String::new()),
    }
}

fn gen_assignment(compiler: &mut Compiler, assignment: &AssignmentStmt) -> Result<String, Error> {
    let value = gen_expression(compiler, &assignment.value)?;
    let register = register_of(compiler, &assignment.identifier)?;

    Ok(format!("{} s{}", value, register))
}

fn gen_print(compiler: &mut Compiler, print: &PrintStmt) -> Result<String, Error> {
    let register = register_of(compiler, &print.identifier)?;

    Ok(format!("l{} p P", register))
}

/// Pops a fresh register and attaches it to the declared variable.
fn assign_register(compiler: &mut Compiler, identifier: &Identifier) -> Result<char, Error> {
    let register = compiler
        .session
        .registers
        .new_register()
        .map_err(|err| Error::new(err, identifier.row))?;

    let attributes = compiler
        .session
        .symbol_table
        .lookup_mut(&identifier.name)
        .ok_or_else(|| {
            Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: identifier.name.clone(),
                },
                identifier.row,
            )
        })?;
    attributes.set_register(register);

    debug!(variable = %identifier.name, register = %register, "register assigned");
    Ok(register)
}
