//! Code generation module for the compiler.
//!
//! Turns a type checked program into a single line of postfix code for a
//! register based stack calculator. It handles:
//!
//! - Register assignment for declared variables
//! - Emission of expressions and statements
//! - Discarding all output when generation fails

pub mod compiler;
pub mod expr;
pub mod stmt;
