use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("print", TokenKind::Print);
        map.insert("int", TokenKind::TyInt);
        map.insert("float", TokenKind::TyFloat);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Int,
    Float,
    Id,

    // Reserved
    TyInt,
    TyFloat,
    Print,

    Assign,   // =
    OpAssign, // += -= *= /=

    Plus,
    Minus,
    Times,
    Divide,

    Semi,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::EOF => "EOF",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Id => "ID",
            TokenKind::TyInt => "TYINT",
            TokenKind::TyFloat => "TYFLOAT",
            TokenKind::Print => "PRINT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::OpAssign => "OP_ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Semi => "SEMI",
        };
        write!(f, "{}", name)
    }
}

/// A lexeme together with the row it was read on.
///
/// `value` is only present for identifiers, numbers and compound
/// assignment operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub row: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "<{},r:{},{}>", self.kind, self.row, value),
            None => write!(f, "<{},r:{}>", self.kind, self.row),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, row: u32) -> Self {
        Token {
            kind,
            value: None,
            row,
        }
    }

    pub fn with_value(kind: TokenKind, row: u32, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: Some(value.into()),
            row,
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Returns the textual value, or an empty string for valueless tokens.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}
