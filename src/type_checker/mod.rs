//! Type checking and semantic analysis module.
//!
//! This module performs semantic analysis on the AST while:
//!
//! - Populating the symbol table from declarations
//! - Detecting duplicate declarations and undeclared variables
//! - Rejecting FLOAT values stored into INT variables
//! - Selecting float division where an operand is a float
//!
//! Only the last semantic error survives a full traversal.

pub mod type_checker;
