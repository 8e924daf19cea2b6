//! The tree builder: a recursive-descent parser over the scanner's flat
//! token stream, producing a [`Table`]/[`Value`] tree.
//!
//! The root of a document is itself an (unbracketed) table: the builder's
//! entry point runs the same entry-parsing loop a nested table runs between
//! `{` and `}`, just without the braces and terminated by end of input
//! instead of `}`.

use kevs_lex::{Token, TokenKind};
use kevs_util::{Diagnostics, ParseError, Phase};

use crate::escape;
use crate::numeric::parse_i64;
use crate::value::{List, Table, Value};

/// Builds a [`Table`] from a token stream produced by [`kevs_lex::scan`].
///
/// On failure, also records the first error into `diagnostics` at the line
/// of the offending (or, at end of input, the last) token.
pub fn build(tokens: &[Token<'_>], diagnostics: &mut Diagnostics) -> Result<Table, ParseError> {
    let mut cursor = Cursor::new(tokens);
    cursor.parse_entries_until_eof().map_err(|err| {
        diagnostics.record(Phase::Parse, cursor.last_line, &err);
        err
    })
}

struct Cursor<'src, 'tok> {
    tokens: &'tok [Token<'src>],
    pos: usize,
    last_line: u32,
}

impl<'src, 'tok> Cursor<'src, 'tok> {
    fn new(tokens: &'tok [Token<'src>]) -> Self {
        Cursor {
            tokens,
            pos: 0,
            last_line: tokens.first().map_or(1, |t| t.line),
        }
    }

    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos)
    }

    fn pop(&mut self) -> Option<&Token<'src>> {
        let tok = self.tokens.get(self.pos);
        if let Some(t) = tok {
            self.pos += 1;
            self.last_line = t.line;
        }
        tok
    }

    fn peek_is_delim(&self, byte: u8) -> bool {
        self.peek().is_some_and(|t| t.is_delim(byte))
    }

    fn expect_delim(&mut self, expected: u8) -> Result<(), ParseError> {
        match self.pop() {
            Some(t) if t.is_delim(expected) => Ok(()),
            Some(_) => Err(ParseError::ExpectedDelim { expected }),
            None => Err(ParseError::ExpectedTokenAtEof {
                expected: delim_name(expected),
            }),
        }
    }

    /// The root-table production: key/value entries until end of input.
    fn parse_entries_until_eof(&mut self) -> Result<Table, ParseError> {
        let mut table = Table::new();
        while self.peek().is_some() {
            self.parse_entry_into(&mut table)?;
        }
        Ok(table)
    }

    /// One `key = value;` entry, inserted into `table`.
    fn parse_entry_into(&mut self, table: &mut Table) -> Result<(), ParseError> {
        let key = self.parse_key()?;
        self.expect_delim(b'=')?;
        let value = self.parse_value()?;
        table.insert(key, value).map_err(ParseError::DuplicateKey)?;
        Ok(())
    }

    fn parse_key(&mut self) -> Result<String, ParseError> {
        let tok = self.pop().ok_or(ParseError::ExpectedTokenAtEof {
            expected: "a key",
        })?;
        if tok.kind != TokenKind::Key {
            return Err(ParseError::ExpectedTokenAtEof {
                expected: "a key",
            });
        }
        let key = String::from_utf8_lossy(tok.text).into_owned();
        if !is_valid_identifier(&key) {
            return Err(ParseError::InvalidIdentifier(key));
        }
        Ok(key)
    }

    /// A value production: a simple lexeme, a list, or a table, always
    /// followed by the `;` that terminates the enclosing entry.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let value = if self.peek_is_delim(b'[') {
            self.parse_list()?
        } else if self.peek_is_delim(b'{') {
            self.parse_table()?
        } else {
            self.parse_simple_value()?
        };
        self.expect_delim(b';')?;
        Ok(value)
    }

    fn parse_simple_value(&mut self) -> Result<Value, ParseError> {
        let tok = self.pop().ok_or(ParseError::ExpectedTokenAtEof {
            expected: "a value",
        })?;
        if tok.kind != TokenKind::Value {
            return Err(ParseError::ExpectedTokenAtEof {
                expected: "a value",
            });
        }

        let text = tok.text;
        if text.len() >= 2 && text[0] == b'"' && text[text.len() - 1] == b'"' {
            let inner = &text[1..text.len() - 1];
            let decoded = escape::decode(inner)?;
            return Ok(Value::String(decoded));
        }
        if text.len() >= 2 && text[0] == b'`' && text[text.len() - 1] == b'`' {
            let inner = &text[1..text.len() - 1];
            return Ok(Value::String(String::from_utf8_lossy(inner).into_owned()));
        }
        if text == b"true" {
            return Ok(Value::Boolean(true));
        }
        if text == b"false" {
            return Ok(Value::Boolean(false));
        }

        let lexeme = String::from_utf8_lossy(text).into_owned();
        let n = parse_i64(text).map_err(|source| ParseError::NotAnInteger {
            lexeme: lexeme.clone(),
            source,
        })?;
        Ok(Value::Integer(n))
    }

    fn parse_list(&mut self) -> Result<Value, ParseError> {
        self.expect_delim(b'[')?;
        let mut list = List::new();
        loop {
            if self.peek_is_delim(b']') {
                self.pop();
                return Ok(Value::List(list));
            }
            let item = self.parse_value()?;
            list.push(item);
        }
    }

    fn parse_table(&mut self) -> Result<Value, ParseError> {
        self.expect_delim(b'{')?;
        let mut table = Table::new();
        loop {
            if self.peek_is_delim(b'}') {
                self.pop();
                return Ok(Value::Table(table));
            }
            self.parse_entry_into(&mut table)?;
        }
    }
}

fn delim_name(byte: u8) -> &'static str {
    match byte {
        b'=' => "'='",
        b';' => "';'",
        b'[' => "'['",
        b']' => "']'",
        b'{' => "'{'",
        b'}' => "'}'",
        _ => "a delimiter",
    }
}

/// `[_A-Za-z][_A-Za-z0-9]*`
fn is_valid_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
