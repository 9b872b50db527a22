/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root, statement and expression enums, identifiers
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the declaration and statement nodes
/// - types: Declarable types, operators and type descriptors
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
