//! Reader for value literals.
//!
//! Accepts the grammar the text marshaler writes, compact or indented
//! (whitespace between tokens is free):
//!
//! ```text
//! value    := NULL | TRUE | FALSE | number | string | array | document
//! number   := '-'? digits ('.' digits?)? (('e' | 'E') ('+' | '-')? digits)?
//! string   := '"' (char | escape)* '"'        text
//!           | '"' '\x' hexdigit* '"'          blob
//! array    := '[' (value (',' value)*)? ']'
//! document := '{' (name ':' value (',' name ':' value)*)? '}'
//! name     := identifier | string | '`' ('``' | any but '`')* '`'
//! ```
//!
//! Keywords are case-insensitive. Integral numbers outside `i64` read as
//! doubles.

use crate::{
    config::ValueConfig,
    error::ValueError,
    value::{Document, Value},
};
use std::{collections::HashSet, fmt};
use thiserror::Error as ThisError;

///
/// LiteralError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid literal at byte {offset}: {reason}")]
pub struct LiteralError {
    pub offset: usize,
    pub reason: LiteralErrorReason,
}

///
/// LiteralErrorReason
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LiteralErrorReason {
    UnexpectedEnd,
    UnexpectedChar(char),
    UnknownKeyword(String),
    InvalidNumber,
    InvalidEscape,
    InvalidHex,
    DuplicateField(String),
    TooDeep { limit: usize },
    TrailingInput,
}

impl fmt::Display for LiteralErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd => f.write_str("unexpected end of input"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character {c:?}"),
            Self::UnknownKeyword(word) => write!(f, "unknown keyword `{word}`"),
            Self::InvalidNumber => f.write_str("malformed number"),
            Self::InvalidEscape => f.write_str("malformed escape sequence"),
            Self::InvalidHex => f.write_str("blob literal is not valid hex"),
            Self::DuplicateField(name) => write!(f, "duplicate field `{name}`"),
            Self::TooDeep { limit } => write!(f, "nesting exceeds depth limit of {limit}"),
            Self::TrailingInput => f.write_str("trailing input after value"),
        }
    }
}

///
/// LiteralReader
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LiteralReader {
    max_depth: usize,
}

impl LiteralReader {
    #[must_use]
    pub const fn new(config: &ValueConfig) -> Self {
        Self {
            max_depth: config.depth_limit(),
        }
    }

    /// Parse exactly one literal; surrounding whitespace is allowed.
    pub fn parse(&self, input: &str) -> Result<Value, ValueError> {
        let mut cursor = Cursor {
            input,
            pos: 0,
            max_depth: self.max_depth,
        };

        let value = cursor.value(0)?;
        cursor.skip_ws();
        if cursor.pos < input.len() {
            return Err(cursor.error(LiteralErrorReason::TrailingInput).into());
        }

        Ok(value)
    }
}

impl Default for LiteralReader {
    fn default() -> Self {
        Self::new(&ValueConfig::default())
    }
}

pub fn parse_literal(input: &str) -> Result<Value, ValueError> {
    LiteralReader::default().parse(input)
}

///
/// Cursor
///

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    max_depth: usize,
}

impl<'a> Cursor<'a> {
    fn value(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.skip_ws();

        match self.peek() {
            None => Err(self.error(LiteralErrorReason::UnexpectedEnd)),
            Some(b'[') => self.array(depth + 1),
            Some(b'{') => self.document(depth + 1),
            Some(b'"') => self.string_or_blob(),
            Some(b'-' | b'0'..=b'9') => self.number(),
            Some(c) if c.is_ascii_alphabetic() => self.keyword(),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn array(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.check_depth(depth)?;
        self.expect(b'[')?;

        let mut items = Vec::new();
        if self.eat_closing(b']') {
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.value(depth)?);
            if self.eat_separator(b']')? {
                return Ok(Value::Array(items));
            }
        }
    }

    fn document(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.check_depth(depth)?;
        self.expect(b'{')?;

        let mut doc = Document::new();
        if self.eat_closing(b'}') {
            return Ok(Value::Document(doc));
        }

        let mut seen = HashSet::new();
        loop {
            self.skip_ws();
            let start = self.pos;
            let name = self.field_name()?;
            if !seen.insert(name.clone()) {
                return Err(LiteralError {
                    offset: start,
                    reason: LiteralErrorReason::DuplicateField(name),
                });
            }

            self.skip_ws();
            self.expect(b':')?;
            let field = self.value(depth)?;
            doc.push_unchecked(name, field);

            if self.eat_separator(b'}')? {
                return Ok(Value::Document(doc));
            }
        }
    }

    fn field_name(&mut self) -> Result<String, LiteralError> {
        match self.peek() {
            Some(b'`') => self.backtick_name(),
            Some(b'"') => {
                self.pos += 1;
                self.text_body()
            }
            Some(c) if c.is_ascii_alphabetic() || c == b'_' => {
                let word = self.word();
                Ok(word.to_string())
            }
            Some(_) => Err(self.unexpected()),
            None => Err(self.error(LiteralErrorReason::UnexpectedEnd)),
        }
    }

    fn backtick_name(&mut self) -> Result<String, LiteralError> {
        self.expect(b'`')?;

        let mut name = String::new();
        loop {
            let rest = &self.input[self.pos..];
            let Some(end) = rest.find('`') else {
                self.pos = self.input.len();
                return Err(self.error(LiteralErrorReason::UnexpectedEnd));
            };
            name.push_str(&rest[..end]);
            self.pos += end + 1;

            // a doubled back-tick is an escaped one
            if self.peek() == Some(b'`') {
                name.push('`');
                self.pos += 1;
            } else {
                return Ok(name);
            }
        }
    }

    fn keyword(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let word = self.word();

        if word.eq_ignore_ascii_case("NULL") {
            Ok(Value::Null)
        } else if word.eq_ignore_ascii_case("TRUE") {
            Ok(Value::Bool(true))
        } else if word.eq_ignore_ascii_case("FALSE") {
            Ok(Value::Bool(false))
        } else {
            Err(LiteralError {
                offset: start,
                reason: LiteralErrorReason::UnknownKeyword(word.to_string()),
            })
        }
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let mut is_double = false;

        self.eat(b'-');
        if self.digits() == 0 {
            return Err(self.error_at(start, LiteralErrorReason::InvalidNumber));
        }
        if self.eat(b'.') {
            is_double = true;
            self.digits();
        }
        if self.eat(b'e') || self.eat(b'E') {
            is_double = true;
            if !self.eat(b'+') {
                self.eat(b'-');
            }
            if self.digits() == 0 {
                return Err(self.error_at(start, LiteralErrorReason::InvalidNumber));
            }
        }

        let text = &self.input[start..self.pos];
        if !is_double && let Ok(int) = text.parse::<i64>() {
            return Ok(Value::Integer(int));
        }

        text.parse::<f64>()
            .map(Value::Double)
            .map_err(|_| self.error_at(start, LiteralErrorReason::InvalidNumber))
    }

    fn string_or_blob(&mut self) -> Result<Value, LiteralError> {
        self.expect(b'"')?;

        if self.input[self.pos..].starts_with("\\x") {
            self.pos += 2;
            return self.blob_body();
        }

        self.text_body().map(Value::Text)
    }

    fn blob_body(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let rest = &self.input[start..];
        let Some(end) = rest.find('"') else {
            self.pos = self.input.len();
            return Err(self.error(LiteralErrorReason::UnexpectedEnd));
        };

        let bytes = hex::decode(&rest[..end])
            .map_err(|_| self.error_at(start, LiteralErrorReason::InvalidHex))?;
        self.pos += end + 1;

        Ok(Value::Blob(bytes))
    }

    // Body of a double-quoted string; the opening quote is consumed.
    fn text_body(&mut self) -> Result<String, LiteralError> {
        let mut text = String::new();

        loop {
            let rest = &self.input[self.pos..];
            let Some(stop) = rest.find(['"', '\\']) else {
                self.pos = self.input.len();
                return Err(self.error(LiteralErrorReason::UnexpectedEnd));
            };
            text.push_str(&rest[..stop]);
            self.pos += stop;

            if self.eat(b'"') {
                return Ok(text);
            }

            let escape_start = self.pos;
            self.pos += 1;
            let decoded = match self.bump() {
                Some(b'"') => '"',
                Some(b'\\') => '\\',
                Some(b'n') => '\n',
                Some(b'r') => '\r',
                Some(b't') => '\t',
                Some(b'u') => self.unicode_escape(escape_start)?,
                Some(_) => return Err(self.error_at(escape_start, LiteralErrorReason::InvalidEscape)),
                None => return Err(self.error(LiteralErrorReason::UnexpectedEnd)),
            };
            text.push(decoded);
        }
    }

    fn unicode_escape(&mut self, escape_start: usize) -> Result<char, LiteralError> {
        let invalid = LiteralError {
            offset: escape_start,
            reason: LiteralErrorReason::InvalidEscape,
        };

        let digits = self
            .input
            .get(self.pos..self.pos + 4)
            .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| invalid.clone())?;
        let code = u32::from_str_radix(digits, 16).map_err(|_| invalid.clone())?;
        let c = char::from_u32(code).ok_or(invalid)?;
        self.pos += 4;

        Ok(c)
    }

    // lexing

    fn check_depth(&self, depth: usize) -> Result<(), LiteralError> {
        if depth > self.max_depth {
            tracing::debug!(depth, limit = self.max_depth, "literal nesting exceeded limit");
            return Err(self.error(LiteralErrorReason::TooDeep {
                limit: self.max_depth,
            }));
        }

        Ok(())
    }

    // After an element: `,` continues, `close` ends the container.
    fn eat_separator(&mut self, close: u8) -> Result<bool, LiteralError> {
        self.skip_ws();
        if self.eat(b',') {
            return Ok(false);
        }
        if self.eat(close) {
            return Ok(true);
        }

        match self.peek() {
            Some(_) => Err(self.unexpected()),
            None => Err(self.error(LiteralErrorReason::UnexpectedEnd)),
        }
    }

    fn eat_closing(&mut self, close: u8) -> bool {
        self.skip_ws();
        self.eat(close)
    }

    fn word(&mut self) -> &'a str {
        let input = self.input;
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == b'_') {
            self.pos += 1;
        }

        &input[start..self.pos]
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }

        self.pos - start
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), LiteralError> {
        if self.eat(byte) {
            return Ok(());
        }

        match self.peek() {
            Some(_) => Err(self.unexpected()),
            None => Err(self.error(LiteralErrorReason::UnexpectedEnd)),
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            return true;
        }

        false
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;

        Some(byte)
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn unexpected(&self) -> LiteralError {
        let c = self.input[self.pos..].chars().next().unwrap_or('\0');
        self.error(LiteralErrorReason::UnexpectedChar(c))
    }

    const fn error(&self, reason: LiteralErrorReason) -> LiteralError {
        self.error_at(self.pos, reason)
    }

    const fn error_at(&self, offset: usize, reason: LiteralErrorReason) -> LiteralError {
        LiteralError { offset, reason }
    }
}
