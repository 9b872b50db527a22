use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type ValueHandler = fn(&mut Parser) -> Result<Expr, Error>;

// FIRST(ExprTail) and FIRST(TermTail) minus epsilon
pub const ADDITIVE_OPERATORS: [TokenKind; 2] = [TokenKind::Plus, TokenKind::Minus];
pub const MULTIPLICATIVE_OPERATORS: [TokenKind; 2] = [TokenKind::Times, TokenKind::Divide];

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.stmt(TokenKind::TyInt, parse_var_decl_stmt);
    parser.stmt(TokenKind::TyFloat, parse_var_decl_stmt);

    // Statements
    parser.stmt(TokenKind::Id, parse_assignment_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);

    // Values
    parser.value(TokenKind::Int, parse_constant_expr);
    parser.value(TokenKind::Float, parse_constant_expr);
    parser.value(TokenKind::Id, parse_deref_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type ValueLookup = HashMap<TokenKind, ValueHandler>;
