use crate::{
    ast::{
        ast::{Expr, Identifier},
        expressions::{BinaryExpr, ConstantExpr, DerefExpr},
        types::{LangOper, LangType},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{ADDITIVE_OPERATORS, MULTIPLICATIVE_OPERATORS},
    parser::Parser,
};

/// Expr -> Term ExprTail
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_term(parser)?;
    parse_expr_tail(parser, left)
}

/// ExprTail -> PLUS Term ExprTail | MINUS Term ExprTail | ε
///
/// Receives the operand parsed so far and folds the next operator onto it,
/// which makes `a - b - c` evaluate as `(a - b) - c`.
pub fn parse_expr_tail(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let kind = parser.current_token_kind()?;
    if !ADDITIVE_OPERATORS.contains(&kind) {
        return Ok(left);
    }

    let operator = binary_operator(parser, kind)?;
    let right = parse_term(parser)?;

    parse_expr_tail(parser, Expr::Binary(BinaryExpr::new(operator, left, right)))
}

/// Term -> Value TermTail
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_value(parser)?;
    parse_term_tail(parser, left)
}

/// TermTail -> TIMES Value TermTail | DIVIDE Value TermTail | ε
pub fn parse_term_tail(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let kind = parser.current_token_kind()?;
    if !MULTIPLICATIVE_OPERATORS.contains(&kind) {
        return Ok(left);
    }

    let operator = binary_operator(parser, kind)?;
    let right = parse_value(parser)?;

    parse_term_tail(parser, Expr::Binary(BinaryExpr::new(operator, left, right)))
}

/// Value -> INT | FLOAT | ID
pub fn parse_value(parser: &mut Parser) -> Result<Expr, Error> {
    let kind = parser.current_token_kind()?;

    match parser.get_value_lookup().get(&kind).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("INT, FLOAT or ID")),
    }
}

pub fn parse_constant_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let literal_type = match LangType::from_literal_kind(parser.current_token_kind()?) {
        Some(literal_type) => literal_type,
        None => return Err(parser.unexpected("INT or FLOAT")),
    };
    let token = parser.advance()?;

    Ok(Expr::Constant(ConstantExpr {
        value: token.text().to_string(),
        literal_type,
    }))
}

pub fn parse_deref_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let id = parser.expect(TokenKind::Id)?;

    Ok(Expr::Deref(DerefExpr {
        identifier: Identifier::new(id.text(), id.row),
    }))
}

fn binary_operator(parser: &mut Parser, kind: TokenKind) -> Result<LangOper, Error> {
    match LangOper::from_token_kind(kind) {
        Some(operator) => {
            parser.advance()?;
            Ok(operator)
        }
        None => Err(parser.unexpected("PLUS, MINUS, TIMES or DIVIDE")),
    }
}
