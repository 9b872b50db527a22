use std::{fs, io, path::Path};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Maximum number of digits accepted after the decimal point.
pub const MAX_FRACTION_DIGITS: usize = 5;

/// Handlers return `Ok(None)` for lexemes that produce no token (whitespace).
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<Option<Token>, Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-z][a-z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[+\\-*/]=?").unwrap(), handler: operator_handler },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semi, ";") },
    ];

    // Anything that may not directly follow a complete number.
    static ref NUMBER_TRAILER: Regex = Regex::new("^[a-z0-9.]+").unwrap();
}

/// On-demand scanner over one source text.
///
/// Tokens are produced lazily: `peek_token` buffers at most one token and
/// `next_token` hands it out. A failed scan consumes the offending lexeme,
/// so a caller that keeps pulling resumes right after it.
pub struct Lexer {
    source: String,
    pos: usize,
    row: u32,
    peeked: Option<Token>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            row: 1,
            peeked: None,
        }
    }

    /// Reads the whole file up front; the handle is closed before lexing starts.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Lexer> {
        let source = fs::read_to_string(path)?;
        Ok(Lexer::new(source))
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<&Token, Error> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan_token()?,
        };

        let token: &Token = self.peeked.insert(token);
        Ok(token)
    }

    /// Returns the next token and consumes it.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan_token(),
        }
    }

    fn scan_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                trace!(row = self.row, "end of input");
                return Ok(MK_TOKEN!(TokenKind::EOF, self.row));
            }

            let pattern = PATTERNS
                .iter()
                .find(|pattern| pattern.regex.is_match(self.remainder()));

            match pattern {
                Some(pattern) => {
                    if let Some(token) = (pattern.handler)(self, &pattern.regex)? {
                        trace!(%token, "token scanned");
                        return Ok(token);
                    }
                }
                None => return Err(self.illegal_character()),
            }
        }
    }

    fn illegal_character(&mut self) -> Error {
        let character = self.remainder().chars().next().unwrap_or('\0');
        self.advance_n(character.len_utf8());
        trace!(row = self.row, %character, "illegal character");

        Error::new(ErrorImpl::IllegalCharacter { character }, self.row)
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let skipped = lexer.matched(regex);
    lexer.row += skipped.matches('\n').count() as u32;
    lexer.advance_n(skipped.len());

    Ok(None)
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let value = lexer.matched(regex);
    lexer.advance_n(value.len());

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        Ok(Some(MK_TOKEN!(*kind, lexer.row)))
    } else {
        Ok(Some(MK_TOKEN!(TokenKind::Id, lexer.row, value)))
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let number = lexer.matched(regex);
    lexer.advance_n(number.len());

    if let Some((_, fraction)) = number.split_once('.') {
        if fraction.is_empty() {
            return Err(Error::new(
                ErrorImpl::MissingFractionDigits { token: number },
                lexer.row,
            ));
        }

        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(Error::new(
                ErrorImpl::TooManyFractionDigits { token: number },
                lexer.row,
            ));
        }
    }

    let trailer = lexer.matched(&NUMBER_TRAILER);
    if !trailer.is_empty() {
        lexer.advance_n(trailer.len());
        return Err(Error::new(
            ErrorImpl::MalformedNumber { token: number },
            lexer.row,
        ));
    }

    if number.contains('.') {
        Ok(Some(MK_TOKEN!(TokenKind::Float, lexer.row, number)))
    } else {
        Ok(Some(MK_TOKEN!(TokenKind::Int, lexer.row, number)))
    }
}

fn operator_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let operator = lexer.matched(regex);
    lexer.advance_n(operator.len());

    if operator.ends_with('=') {
        return Ok(Some(MK_TOKEN!(TokenKind::OpAssign, lexer.row, operator)));
    }

    let kind = match operator.as_str() {
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Times,
        _ => TokenKind::Divide,
    };

    Ok(Some(MK_TOKEN!(kind, lexer.row)))
}

/// Scans the whole source eagerly, up to and including the EOF token.
pub fn tokenize(source: impl Into<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let at_end = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_end {
            return Ok(tokens);
        }
    }
}
