//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures carrying the source row
//! - Specific error variants for each compilation phase
//! - Phase classification (lexical, syntactic, semantic, code generation)
//! - Helpful suggestions rendered alongside a diagnostic

pub mod errors;
