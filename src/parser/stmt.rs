use crate::{
    ast::{
        ast::{Expr, Identifier, Program, Stmt},
        expressions::{BinaryExpr, DerefExpr},
        statements::{AssignmentStmt, PrintStmt, VarDeclStmt},
        types::{LangOper, LangType},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

const DECL_STMT_EXPECTED: &str = "TYINT, TYFLOAT, ID, PRINT or EOF";

/// Program -> DeclStmts EOF
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let body = parse_decl_stmts(parser)?;
    parser.expect(TokenKind::EOF)?;

    Ok(Program { body })
}

/// DeclStmts -> Decl DeclStmts | Stmt DeclStmts | ε
pub fn parse_decl_stmts(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    loop {
        let kind = parser.current_token_kind()?;

        if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
            body.push(handler(parser)?);
        } else if kind == TokenKind::EOF {
            return Ok(body);
        } else {
            return Err(parser.unexpected(DECL_STMT_EXPECTED));
        }
    }
}

/// Decl -> Type ID DeclTail
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // Type -> TYINT | TYFLOAT
    let var_type = match parser.current_token_kind()? {
        TokenKind::TyInt => LangType::Int,
        TokenKind::TyFloat => LangType::Float,
        _ => return Err(parser.unexpected("TYINT or TYFLOAT")),
    };
    parser.advance()?;

    let id = parser.expect(TokenKind::Id)?;
    let identifier = Identifier::new(id.text(), id.row);

    // DeclTail -> SEMI | ASSIGN Expr SEMI
    let assigned_value = match parser.current_token_kind()? {
        TokenKind::Semi => None,
        TokenKind::Assign => {
            parser.advance()?;
            Some(parse_expr(parser)?)
        }
        _ => return Err(parser.unexpected("SEMI or ASSIGN")),
    };

    parser.expect(TokenKind::Semi)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        var_type,
        assigned_value,
    }))
}

/// Stmt -> ID AssignOp Expr SEMI
///
/// `id OP= expr` becomes `id = id OP expr`.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let id = parser.expect(TokenKind::Id)?;
    let identifier = Identifier::new(id.text(), id.row);

    let value = match parser.current_token_kind()? {
        TokenKind::Assign => {
            parser.advance()?;
            parse_expr(parser)?
        }
        TokenKind::OpAssign => {
            let operator_token = parser.advance()?;
            let operator = match LangOper::from_compound(operator_token.text()) {
                Some(operator) => operator,
                None => return Err(parser.unexpected("ASSIGN or OP_ASSIGN")),
            };
            let right = parse_expr(parser)?;

            Expr::Binary(BinaryExpr::new(
                operator,
                Expr::Deref(DerefExpr {
                    identifier: identifier.clone(),
                }),
                right,
            ))
        }
        _ => return Err(parser.unexpected("ASSIGN or OP_ASSIGN")),
    };

    parser.expect(TokenKind::Semi)?;

    Ok(Stmt::Assignment(AssignmentStmt { identifier, value }))
}

/// Stmt -> PRINT ID SEMI
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Print)?;
    let id = parser.expect(TokenKind::Id)?;
    parser.expect(TokenKind::Semi)?;

    Ok(Stmt::Print(PrintStmt {
        identifier: Identifier::new(id.text(), id.row),
    }))
}
