//! Compilation-scoped storage shared by the semantic and code generation passes.
//!
//! - symbol_table: declared variables with their type and assigned register
//! - registers: the finite pool of one-letter target registers

pub mod registers;
pub mod symbol_table;

#[cfg(test)]
mod tests;
