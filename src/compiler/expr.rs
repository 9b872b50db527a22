use crate::{
    ast::{
        ast::{Expr, Identifier},
        types::LangOper,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::compiler::Compiler;

/// Generates postfix code for the given expression.
pub fn gen_expression(compiler: &Compiler, expression: &Expr) -> Result<String, Error> {
    match expression {
        Expr::Constant(constant) => Ok(constant.value.clone()),
        Expr::Deref(deref) => Ok(format!("l{}", register_of(compiler, &deref.identifier)?)),
        Expr::Binary(binary) => {
            let left = gen_expression(compiler, &binary.left)?;
            let right = gen_expression(compiler, &binary.right)?;

            Ok(format!("{} {} {}", left, right, operator_code(binary.operator)))
        }
    }
}

fn operator_code(operator: LangOper) -> &'static str {
    match operator {
        LangOper::Plus => "+",
        LangOper::Minus => "-",
        LangOper::Times => "*",
        LangOper::Div => "/",
        // Five digits of precision for the division, then back to integers
        LangOper::DivFloat => "5 k / 0 k",
    }
}

/// The register currently attached to a variable.
pub fn register_of(compiler: &Compiler, identifier: &Identifier) -> Result<char, Error> {
    let attributes = compiler
        .session
        .symbol_table
        .lookup(&identifier.name)
        .ok_or_else(|| {
            Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: identifier.name.clone(),
                },
                identifier.row,
            )
        })?;

    attributes.register.ok_or_else(|| {
        Error::new(
            ErrorImpl::UnassignedRegister {
                variable: identifier.name.clone(),
            },
            identifier.row,
        )
    })
}
