//! Utility macros for the compiler.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for single-character tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$row` - The source row the token was read on
/// * `$value` - Optional textual value (identifiers, numbers, compound operators)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, 1, "42");
/// let semi = MK_TOKEN!(TokenKind::Semi, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $row:expr) => {
        Token {
            kind: $kind,
            value: None,
            row: $row,
        }
    };
    ($kind:expr, $row:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: Some(String::from($value)),
            row: $row,
        }
    };
}

/// Creates a default lexer handler for fixed, valueless tokens.
///
/// Generates a handler function that advances the lexer past the literal
/// and produces a token of the given kind on the current row.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^;").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Semi, ";"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<Option<Token>, Error> {
            lexer.advance_n($value.len());
            Ok(Some(MK_TOKEN!($kind, lexer.row())))
        }
    };
}
