use std::fmt::Display;

use super::{
    ast::{Expr, Identifier},
    types::LangType,
};

/// `int a;` or `float b = expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: Identifier,
    pub var_type: LangType,
    pub assigned_value: Option<Expr>,
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.assigned_value {
            Some(value) => write!(f, "[Decl:{},{},{}]", self.identifier, self.var_type, value),
            None => write!(f, "[Decl:{},{}]", self.identifier, self.var_type),
        }
    }
}

/// Plain assignment. Compound assignments are desugared by the parser into
/// this node with a binary expression reading the target.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: Identifier,
    pub value: Expr,
}

impl Display for AssignmentStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Assign:{},{}]", self.identifier, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub identifier: Identifier,
}

impl Display for PrintStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Print:{}]", self.identifier)
    }
}
