use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::TypeTag, lexer::tokens::TokenKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    row: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, row: u32) -> Self {
        Error {
            internal_error: error_impl,
            row,
        }
    }

    pub fn get_row(&self) -> u32 {
        self.row
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The bare diagnostic text, without phase or row decoration.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::MissingFractionDigits { .. } => "MissingFractionDigits",
            ErrorImpl::TooManyFractionDigits { .. } => "TooManyFractionDigits",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::RegistersExhausted => "RegistersExhausted",
            ErrorImpl::UnassignedRegister { .. } => "UnassignedRegister",
        }
    }

    pub fn get_phase(&self) -> ErrorPhase {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. }
            | ErrorImpl::MissingFractionDigits { .. }
            | ErrorImpl::TooManyFractionDigits { .. }
            | ErrorImpl::MalformedNumber { .. } => ErrorPhase::Lexical,
            ErrorImpl::UnexpectedToken { .. } => ErrorPhase::Syntactic,
            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::TypeMatchError { .. } => ErrorPhase::Semantic,
            ErrorImpl::RegistersExhausted | ErrorImpl::UnassignedRegister { .. } => {
                ErrorPhase::CodeGeneration
            }
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::MissingFractionDigits { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, add at least one digit after the decimal point",
                token
            )),
            ErrorImpl::TooManyFractionDigits { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, floats accept at most 5 decimal digits",
                token
            )),
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, identifiers cannot start with a digit",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } if expected == "SEMI" => {
                ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, did you miss a semicolon?",
                    found
                ))
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` can only be declared once",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Declare `{}` with `int` or `float` before using it",
                variable
            )),
            ErrorImpl::TypeMatchError { .. } => ErrorTip::Suggestion(String::from(
                "An INT variable cannot hold a FLOAT value",
            )),
            ErrorImpl::RegistersExhausted => ErrorTip::Suggestion(String::from(
                "A program can declare at most 26 variables",
            )),
            ErrorImpl::UnassignedRegister { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} error at row {}: {}",
            self.get_phase(),
            self.row,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Lexical,
    Syntactic,
    Semantic,
    CodeGeneration,
}

impl Display for ErrorPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPhase::Lexical => write!(f, "Lexical"),
            ErrorPhase::Syntactic => write!(f, "Syntactic"),
            ErrorPhase::Semantic => write!(f, "Semantic"),
            ErrorPhase::CodeGeneration => write!(f, "Code generation"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal character '{character}'")]
    IllegalCharacter { character: char },
    #[error("invalid float format, no digits after decimal point: {token}")]
    MissingFractionDigits { token: String },
    #[error("float has more than 5 decimal digits: {token}")]
    TooManyFractionDigits { token: String },
    #[error("invalid number format: {token}")]
    MalformedNumber { token: String },
    #[error("expected token: {expected} but was: {found}")]
    UnexpectedToken { expected: String, found: TokenKind },
    #[error("variable '{variable}' already declared.")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable '{variable}' not declared.")]
    VariableNotDeclared { variable: String },
    #[error("cannot assign expression of type {received} to variable '{variable}' of type {expected}.")]
    TypeMatchError {
        variable: String,
        expected: TypeTag,
        received: TypeTag,
    },
    #[error("No more registers available")]
    RegistersExhausted,
    #[error("variable '{variable}' has no register assigned")]
    UnassignedRegister { variable: String },
}
