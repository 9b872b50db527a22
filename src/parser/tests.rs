//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Declarations with and without initializers
//! - Assignments, compound assignments and print statements
//! - Operator precedence and left-to-right folding
//! - Syntax and lexical error reporting

use super::parser::parse_source;
use crate::ast::ast::{Expr, Stmt};
use crate::ast::types::{LangOper, LangType};
use crate::errors::errors::{ErrorImpl, ErrorPhase};
use crate::lexer::tokens::TokenKind;

fn parse_to_string(source: &str) -> String {
    parse_source(source).unwrap().to_string()
}

fn expect_unexpected(source: &str, expected: &str, found: TokenKind) {
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Syntactic);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: expected.to_string(),
            found,
        }
    );
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("").unwrap();
    assert!(program.is_empty());

    let program = parse_source("  \n\t\n").unwrap();
    assert!(program.is_empty());
}

#[test]
fn test_parse_declaration_without_initializer() {
    let program = parse_source("int a;").unwrap();

    match &program.body[0] {
        Stmt::VarDecl(decl) => {
            assert_eq!(decl.identifier.name, "a");
            assert_eq!(decl.var_type, LangType::Int);
            assert!(decl.assigned_value.is_none());
        }
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_declaration_with_initializer() {
    assert_eq!(
        parse_to_string("float b = 1.5;"),
        "[Prog:[[Decl:b,FLOAT,[Const:1.5,FLOAT]]]]"
    );
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_to_string("a = b;"),
        "[Prog:[[Assign:a,[Deref:b]]]]"
    );
}

#[test]
fn test_parse_print() {
    assert_eq!(parse_to_string("print a;"), "[Prog:[[Print:a]]]");
}

#[test]
fn test_compound_assignment_is_desugared() {
    assert_eq!(
        parse_to_string("a += 1;"),
        "[Prog:[[Assign:a,[BinOp:PLUS,[Deref:a],[Const:1,INT]]]]]"
    );
    assert_eq!(
        parse_to_string("a /= 2 * b;"),
        "[Prog:[[Assign:a,[BinOp:DIV,[Deref:a],[BinOp:TIMES,[Const:2,INT],[Deref:b]]]]]]"
    );
}

#[test]
fn test_all_compound_operators() {
    let program = parse_source("a += 1; a -= 1; a *= 1; a /= 1;").unwrap();
    let operators: Vec<LangOper> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Assignment(assignment) => match &assignment.value {
                Expr::Binary(binary) => binary.operator,
                other => panic!("expected binary expression, got {:?}", other),
            },
            other => panic!("expected assignment, got {:?}", other),
        })
        .collect();

    assert_eq!(
        operators,
        vec![LangOper::Plus, LangOper::Minus, LangOper::Times, LangOper::Div]
    );
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        parse_to_string("a = 1 + 2 * 3;"),
        "[Prog:[[Assign:a,[BinOp:PLUS,[Const:1,INT],[BinOp:TIMES,[Const:2,INT],[Const:3,INT]]]]]]"
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        parse_to_string("a = b - c - d;"),
        "[Prog:[[Assign:a,[BinOp:MINUS,[BinOp:MINUS,[Deref:b],[Deref:c]],[Deref:d]]]]]"
    );
}

#[test]
fn test_division_is_left_associative() {
    assert_eq!(
        parse_to_string("a = 8 / 4 / 2;"),
        "[Prog:[[Assign:a,[BinOp:DIV,[BinOp:DIV,[Const:8,INT],[Const:4,INT]],[Const:2,INT]]]]]"
    );
}

#[test]
fn test_mixed_program_keeps_order() {
    let program = parse_source("int a; float b = a; b *= 2.5; print b;").unwrap();

    assert_eq!(program.body.len(), 4);
    assert!(matches!(program.body[0], Stmt::VarDecl(_)));
    assert!(matches!(program.body[1], Stmt::VarDecl(_)));
    assert!(matches!(program.body[2], Stmt::Assignment(_)));
    assert!(matches!(program.body[3], Stmt::Print(_)));
}

#[test]
fn test_identifier_rows() {
    let program = parse_source("int a;\n\nprint a;").unwrap();

    assert_eq!(program.body[0].get_row(), 1);
    assert_eq!(program.body[1].get_row(), 3);
}

#[test]
fn test_missing_semicolon_after_declaration() {
    expect_unexpected("int a", "SEMI or ASSIGN", TokenKind::EOF);
}

#[test]
fn test_missing_semicolon_after_expression() {
    expect_unexpected("int a = 1 2;", "SEMI", TokenKind::Int);
}

#[test]
fn test_print_requires_identifier() {
    expect_unexpected("print 5;", "ID", TokenKind::Int);
}

#[test]
fn test_assignment_requires_operator() {
    expect_unexpected("a 5;", "ASSIGN or OP_ASSIGN", TokenKind::Int);
}

#[test]
fn test_statement_cannot_start_with_assign() {
    expect_unexpected("= 5;", "TYINT, TYFLOAT, ID, PRINT or EOF", TokenKind::Assign);
}

#[test]
fn test_missing_operand() {
    expect_unexpected("int a = ;", "INT, FLOAT or ID", TokenKind::Semi);
    expect_unexpected("a = 1 + ;", "INT, FLOAT or ID", TokenKind::Semi);
}

#[test]
fn test_declaration_requires_identifier() {
    expect_unexpected("int 3;", "ID", TokenKind::Int);
}

#[test]
fn test_syntax_error_row() {
    let error = parse_source("int a;\nprint ;").unwrap_err();

    assert_eq!(error.get_row(), 2);
}

#[test]
fn test_lexical_error_aborts_parse() {
    let error = parse_source("int a = 5.;").unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Lexical);
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::MissingFractionDigits { .. }
    ));
}
