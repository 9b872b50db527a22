//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats) and malformed numbers
//! - Operators, compound assignments and delimiters
//! - Row tracking and EOF handling
//! - Lookahead behaviour of `peek_token`

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};
use crate::errors::errors::ErrorImpl;

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("print int float").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Print);
    assert_eq!(tokens[1].kind, TokenKind::TyInt);
    assert_eq!(tokens[2].kind, TokenKind::TyFloat);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
    assert!(tokens[0].value.is_none());
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar2 printer integer x").unwrap();

    assert_eq!(tokens[0], Token::with_value(TokenKind::Id, 1, "foo"));
    assert_eq!(tokens[1], Token::with_value(TokenKind::Id, 1, "bar2"));
    assert_eq!(tokens[2], Token::with_value(TokenKind::Id, 1, "printer"));
    assert_eq!(tokens[3], Token::with_value(TokenKind::Id, 1, "integer"));
    assert_eq!(tokens[4], Token::with_value(TokenKind::Id, 1, "x"));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 7.12345").unwrap();

    assert_eq!(tokens[0], Token::with_value(TokenKind::Int, 1, "42"));
    assert_eq!(tokens[1], Token::with_value(TokenKind::Float, 1, "3.14"));
    assert_eq!(tokens[2], Token::with_value(TokenKind::Int, 1, "0"));
    assert_eq!(tokens[3], Token::with_value(TokenKind::Float, 1, "100.5"));
    assert_eq!(tokens[4], Token::with_value(TokenKind::Float, 1, "7.12345"));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / = ;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Times);
    assert_eq!(tokens[3].kind, TokenKind::Divide);
    assert_eq!(tokens[4].kind, TokenKind::Assign);
    assert_eq!(tokens[5].kind, TokenKind::Semi);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_compound_operators() {
    let tokens = tokenize("+= -= *= /=").unwrap();

    assert_eq!(tokens[0], Token::with_value(TokenKind::OpAssign, 1, "+="));
    assert_eq!(tokens[1], Token::with_value(TokenKind::OpAssign, 1, "-="));
    assert_eq!(tokens[2], Token::with_value(TokenKind::OpAssign, 1, "*="));
    assert_eq!(tokens[3], Token::with_value(TokenKind::OpAssign, 1, "/="));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_operator_followed_by_space_and_equals() {
    let tokens = tokenize("+ =").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Assign);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("int a = 1 / 6;").unwrap();

    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[0].kind, TokenKind::TyInt);
    assert_eq!(tokens[1], Token::with_value(TokenKind::Id, 1, "a"));
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3], Token::with_value(TokenKind::Int, 1, "1"));
    assert_eq!(tokens[4].kind, TokenKind::Divide);
    assert_eq!(tokens[5], Token::with_value(TokenKind::Int, 1, "6"));
    assert_eq!(tokens[6].kind, TokenKind::Semi);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokens_without_spaces() {
    let tokens = tokenize("a+=b*2;").unwrap();

    assert_eq!(tokens[0], Token::with_value(TokenKind::Id, 1, "a"));
    assert_eq!(tokens[1], Token::with_value(TokenKind::OpAssign, 1, "+="));
    assert_eq!(tokens[2], Token::with_value(TokenKind::Id, 1, "b"));
    assert_eq!(tokens[3].kind, TokenKind::Times);
    assert_eq!(tokens[4], Token::with_value(TokenKind::Int, 1, "2"));
    assert_eq!(tokens[5].kind, TokenKind::Semi);
}

#[test]
fn test_rows_increment_on_newlines() {
    let tokens = tokenize("int a;\n\nprint a;\r\n").unwrap();

    assert_eq!(tokens[0].row, 1);
    assert_eq!(tokens[2].row, 1);
    assert_eq!(tokens[3], Token::new(TokenKind::Print, 3));
    assert_eq!(tokens[4], Token::with_value(TokenKind::Id, 3, "a"));
    assert_eq!(tokens[6], Token::new(TokenKind::EOF, 4));
}

#[test]
fn test_whitespace_only_yields_eof() {
    let tokens = tokenize(" \t\n\n \r\n\n").unwrap();

    assert_eq!(tokens, vec![Token::new(TokenKind::EOF, 5)]);
}

#[test]
fn test_empty_source_yields_eof() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens, vec![Token::new(TokenKind::EOF, 1)]);
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("a");

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Id);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_peek_is_idempotent() {
    let mut lexer = Lexer::new("int x;");

    assert_eq!(lexer.peek_token().unwrap().kind, TokenKind::TyInt);
    assert_eq!(lexer.peek_token().unwrap().kind, TokenKind::TyInt);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::TyInt);
    assert_eq!(
        lexer.peek_token().unwrap(),
        &Token::with_value(TokenKind::Id, 1, "x")
    );
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::with_value(TokenKind::Id, 1, "x")
    );
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Semi);
}

#[test]
fn test_illegal_characters() {
    let mut lexer = Lexer::new("@\n#;\n$+");

    let error = lexer.next_token().unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::IllegalCharacter { character: '@' }
    );
    assert_eq!(error.get_row(), 1);

    let error = lexer.next_token().unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::IllegalCharacter { character: '#' }
    );
    assert_eq!(error.get_row(), 2);

    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Semi, 2));
    assert!(lexer.next_token().is_err());
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Plus, 3));
}

#[test]
fn test_uppercase_is_illegal() {
    let result = tokenize("int A;");

    assert!(matches!(
        result.unwrap_err().get_internal_error(),
        ErrorImpl::IllegalCharacter { character: 'A' }
    ));
}

#[test]
fn test_missing_fraction_digits() {
    let error = tokenize("float a = 5.;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::MissingFractionDigits {
            token: "5.".to_string()
        }
    );
}

#[test]
fn test_too_many_fraction_digits() {
    let error = tokenize("0.123456").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::TooManyFractionDigits {
            token: "0.123456".to_string()
        }
    );
}

#[test]
fn test_malformed_numbers() {
    let mut lexer = Lexer::new("0 33 12ab 1.5.3 7");

    assert_eq!(
        lexer.next_token().unwrap(),
        Token::with_value(TokenKind::Int, 1, "0")
    );
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::with_value(TokenKind::Int, 1, "33")
    );
    assert_eq!(
        lexer.next_token().unwrap_err().get_internal_error(),
        &ErrorImpl::MalformedNumber {
            token: "12".to_string()
        }
    );
    assert_eq!(
        lexer.next_token().unwrap_err().get_internal_error(),
        &ErrorImpl::MalformedNumber {
            token: "1.5".to_string()
        }
    );
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::with_value(TokenKind::Int, 1, "7")
    );
}

#[test]
fn test_token_display() {
    assert_eq!(Token::new(TokenKind::Semi, 2).to_string(), "<SEMI,r:2>");
    assert_eq!(
        Token::with_value(TokenKind::Float, 3, "1.5").to_string(),
        "<FLOAT,r:3,1.5>"
    );
}
