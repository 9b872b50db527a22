use std::{
    fmt::Display,
    slice::{Iter, IterMut},
};

use super::{
    expressions::{BinaryExpr, ConstantExpr, DerefExpr},
    statements::{AssignmentStmt, PrintStmt, VarDeclStmt},
};

/// Root of the tree: declarations and statements in program order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, Stmt> {
        self.body.iter_mut()
    }
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self
            .body
            .iter()
            .map(|stmt| stmt.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "[Prog:[{}]]", body)
    }
}

/// A top-level declaration or statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    Print(PrintStmt),
}

impl Stmt {
    pub fn get_row(&self) -> u32 {
        match self {
            Stmt::VarDecl(decl) => decl.identifier.row,
            Stmt::Assignment(assignment) => assignment.identifier.row,
            Stmt::Print(print) => print.identifier.row,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::VarDecl(decl) => write!(f, "{}", decl),
            Stmt::Assignment(assignment) => write!(f, "{}", assignment),
            Stmt::Print(print) => write!(f, "{}", print),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Constant(ConstantExpr),
    Deref(DerefExpr),
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(binary) => write!(f, "{}", binary),
            Expr::Constant(constant) => write!(f, "{}", constant),
            Expr::Deref(deref) => write!(f, "{}", deref),
        }
    }
}

/// A variable name and the row it was written on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub row: u32,
}

impl Identifier {
    pub fn new(name: impl Into<String>, row: u32) -> Self {
        Identifier {
            name: name.into(),
            row,
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
