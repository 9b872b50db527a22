//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the
//! lexer's token stream into an Abstract Syntax Tree. It handles:
//!
//! - Declarations with optional initializers
//! - Assignment, compound assignment and print statements
//! - Left-associative arithmetic expressions with `*`/`/` binding tighter than `+`/`-`
//! - Syntax errors naming the expected and the actual token
//!
//! Every production is chosen from the FIRST set of the lookahead token;
//! the first error aborts the parse without recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
