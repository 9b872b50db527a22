use std::fmt::Display;

use super::{
    ast::{Expr, Identifier},
    types::{LangOper, LangType},
};

/// Binary Expression
/// `operator` is rewritten in place by the type checker for float division.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: LangOper,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(operator: LangOper, left: Expr, right: Expr) -> Self {
        BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[BinOp:{},{},{}]", self.operator, self.left, self.right)
    }
}

/// Constant Expression
/// Keeps the literal text verbatim, it is emitted unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpr {
    pub value: String,
    pub literal_type: LangType,
}

impl Display for ConstantExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Const:{},{}]", self.value, self.literal_type)
    }
}

/// Dereference Expression
/// Reads the current value of a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct DerefExpr {
    pub identifier: Identifier,
}

impl Display for DerefExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Deref:{}]", self.identifier)
    }
}
