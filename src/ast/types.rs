//! Type system definitions for the AST.
//!
//! This module defines the two declarable types of the language, the
//! arithmetic operators, and the type descriptor produced by semantic
//! analysis for every node.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// A type that can be written in a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LangType {
    Int,
    Float,
}

impl LangType {
    /// Type of a numeric literal token.
    pub fn from_literal_kind(kind: TokenKind) -> Option<LangType> {
        match kind {
            TokenKind::Int => Some(LangType::Int),
            TokenKind::Float => Some(LangType::Float),
            _ => None,
        }
    }
}

impl Display for LangType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LangType::Int => write!(f, "INT"),
            LangType::Float => write!(f, "FLOAT"),
        }
    }
}

/// Binary operators. `DivFloat` never comes out of the parser, the type
/// checker rewrites `Div` into it when an operand is a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangOper {
    Plus,
    Minus,
    Times,
    Div,
    DivFloat,
}

impl LangOper {
    pub fn from_token_kind(kind: TokenKind) -> Option<LangOper> {
        match kind {
            TokenKind::Plus => Some(LangOper::Plus),
            TokenKind::Minus => Some(LangOper::Minus),
            TokenKind::Times => Some(LangOper::Times),
            TokenKind::Divide => Some(LangOper::Div),
            _ => None,
        }
    }

    /// Maps the first character of a compound assignment (`+=`, `-=`, ...).
    pub fn from_compound(operator: &str) -> Option<LangOper> {
        match operator.chars().next()? {
            '+' => Some(LangOper::Plus),
            '-' => Some(LangOper::Minus),
            '*' => Some(LangOper::Times),
            '/' => Some(LangOper::Div),
            _ => None,
        }
    }
}

impl Display for LangOper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LangOper::Plus => write!(f, "PLUS"),
            LangOper::Minus => write!(f, "MINUS"),
            LangOper::Times => write!(f, "TIMES"),
            LangOper::Div => write!(f, "DIV"),
            LangOper::DivFloat => write!(f, "DIV_FLOAT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Int,
    Float,
    Ok,
    Error,
}

impl From<LangType> for TypeTag {
    fn from(value: LangType) -> Self {
        match value {
            LangType::Int => TypeTag::Int,
            LangType::Float => TypeTag::Float,
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeTag::Int => write!(f, "INT"),
            TypeTag::Float => write!(f, "FLOAT"),
            TypeTag::Ok => write!(f, "OK"),
            TypeTag::Error => write!(f, "ERROR"),
        }
    }
}

/// Resolved type of a node, or the diagnostic explaining why it has none.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    pub tag: TypeTag,
    pub message: Option<String>,
    pub row: Option<u32>,
}

impl TypeDescriptor {
    pub fn new(tag: TypeTag) -> Self {
        TypeDescriptor {
            tag,
            message: None,
            row: None,
        }
    }

    pub fn ok() -> Self {
        TypeDescriptor::new(TypeTag::Ok)
    }

    pub fn error(message: impl Into<String>, row: u32) -> Self {
        TypeDescriptor {
            tag: TypeTag::Error,
            message: Some(message.into()),
            row: Some(row),
        }
    }

    pub fn is_error(&self) -> bool {
        self.tag == TypeTag::Error
    }

    pub fn is_float(&self) -> bool {
        self.tag == TypeTag::Float
    }

    /// Whether a value of this type may be stored into `target`.
    ///
    /// Only FLOAT into INT is rejected; INT widens to FLOAT.
    pub fn is_compatible_with(&self, target: &TypeDescriptor) -> bool {
        !(self.tag == TypeTag::Float && target.tag == TypeTag::Int)
    }
}

impl From<LangType> for TypeDescriptor {
    fn from(value: LangType) -> Self {
        TypeDescriptor::new(value.into())
    }
}
