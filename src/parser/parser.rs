//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The grammar is LL(1): every decision is taken on the single lookahead
//! token buffered by the lexer.
//!
//! It maintains lookup tables keyed by the FIRST sets of:
//! - Declarations and statements
//! - Values (the operands of an expression)

use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup, ValueHandler, ValueLookup},
    stmt::parse_program,
};

/// The main parser structure that maintains parsing state.
///
/// Tokens are pulled from the lexer on demand, so a lexical error surfaces
/// at the point the parser first looks at the offending lexeme.
pub struct Parser {
    /// Token source with one token of lookahead
    lexer: Lexer,
    /// Handlers for each token that can start a declaration or statement
    stmt_lookup: StmtLookup,
    /// Handlers for each token that can start a value
    value_lookup: ValueLookup,
}

impl Parser {
    /// Creates a new Parser instance with empty lookup tables.
    pub fn new(lexer: Lexer) -> Self {
        Parser {
            lexer,
            stmt_lookup: HashMap::new(),
            value_lookup: HashMap::new(),
        }
    }

    /// Returns the lookahead token without consuming it.
    pub fn current_token(&mut self) -> Result<&Token, Error> {
        self.lexer.peek_token()
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&mut self) -> Result<TokenKind, Error> {
        Ok(self.lexer.peek_token()?.kind)
    }

    /// Consumes and returns the lookahead token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.lexer.next_token()
    }

    /// Consumes the lookahead if it is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise a syntax
    /// error naming the expected and the actual kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token()?;
        if token.kind != expected_kind {
            return Err(unexpected_token(token, expected_kind.to_string()));
        }

        let token = self.advance()?;
        trace!(%token, "matched");
        Ok(token)
    }

    /// Builds the syntax error for the current lookahead.
    pub fn unexpected(&mut self, expected: &str) -> Error {
        match self.current_token() {
            Ok(token) => unexpected_token(token, expected),
            Err(error) => error,
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the value lookup table.
    pub fn get_value_lookup(&self) -> &ValueLookup {
        &self.value_lookup
    }

    /// Registers a handler for a token in the FIRST set of declarations/statements.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a handler for a token in the FIRST set of values.
    pub fn value(&mut self, kind: TokenKind, value_fn: ValueHandler) {
        self.value_lookup.insert(kind, value_fn);
    }
}

fn unexpected_token(token: &Token, expected: impl Into<String>) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            expected: expected.into(),
            found: token.kind,
        },
        token.row,
    )
}

/// Parses a whole compilation unit into its Program node.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses until EOF. The first lexical
/// or syntax error aborts the parse; no partial tree is returned.
pub fn parse(lexer: Lexer) -> Result<Program, Error> {
    let mut parser = Parser::new(lexer);
    create_token_lookups(&mut parser);

    parse_program(&mut parser)
}

/// Convenience wrapper lexing and parsing an in-memory source.
pub fn parse_source(source: impl Into<String>) -> Result<Program, Error> {
    parse(Lexer::new(source))
}
