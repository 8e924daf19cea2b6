//! The lexical scanner: bytes in, a flat token stream out.
//!
//! The scanner never backtracks and never allocates storage for a token's
//! payload — every [`Token`] borrows a sub-slice of the input it was given.
//! Context (top level / inside a list / inside a table / inside a value)
//! is threaded through which function is currently on the call stack via
//! mutual recursion; there is no explicit state enum.

use kevs_util::{ByteSliceExt, Diagnostics, LexError, Phase};

use crate::token::{Token, TokenKind};

const KEY_VAL_SEP: u8 = b'=';
const KEY_VAL_END: u8 = b';';
const COMMENT_BEGIN: u8 = b'#';
const STRING_BEGIN: u8 = b'"';
const RAW_STRING_BEGIN: u8 = b'`';
const LIST_BEGIN: u8 = b'[';
const LIST_END: u8 = b']';
const TABLE_BEGIN: u8 = b'{';
const TABLE_END: u8 = b'}';

/// Scans `input` into a flat token vector, or records the first lexical
/// error into `diagnostics` and returns it.
///
/// Line numbers start at 1 and advance on every `\n` consumed, including
/// those embedded in raw-string lexemes.
pub fn scan<'src>(
    input: &'src [u8],
    diagnostics: &mut Diagnostics,
) -> Result<Vec<Token<'src>>, LexError> {
    let mut scanner = Scanner {
        content: input,
        line: 1,
        tokens: Vec::new(),
    };
    scanner.run().map_err(|err| {
        diagnostics.record(Phase::Scan, scanner.line, &err);
        err
    })?;
    Ok(scanner.tokens)
}

struct Scanner<'src> {
    content: &'src [u8],
    line: u32,
    tokens: Vec<Token<'src>>,
}

impl<'src> Scanner<'src> {
    fn run(&mut self) -> Result<(), LexError> {
        while !self.content.is_empty() {
            self.trim_space();
            if self.content.is_empty() {
                break;
            }
            if self.expect(b'\n') {
                self.scan_newline();
            } else if self.expect(COMMENT_BEGIN) {
                self.scan_comment()?;
            } else {
                self.scan_key_value()?;
            }
        }
        Ok(())
    }

    fn expect(&self, byte: u8) -> bool {
        self.content.starts_with_byte(byte)
    }

    fn advance(&mut self, n: usize) {
        self.content = &self.content[n..];
    }

    fn trim_space(&mut self) {
        self.content = self.content.trim_start_space_tab();
    }

    /// Appends a token spanning the first `end` bytes of the remaining
    /// content (trailing space/tab trimmed), then advances past them.
    fn append(&mut self, kind: TokenKind, end: usize) {
        let text = self.content[..end].trim_end_space_tab();
        self.tokens.push(Token::new(kind, text, self.line));
        self.advance(end);
    }

    fn append_delim(&mut self) {
        self.tokens
            .push(Token::new(TokenKind::Delim, &self.content[..1], self.line));
        self.advance(1);
    }

    fn scan_newline(&mut self) {
        self.line += 1;
        self.advance(1);
    }

    fn scan_comment(&mut self) -> Result<(), LexError> {
        let newline = self
            .content
            .index_of(b'\n')
            .ok_or(LexError::UnterminatedComment)?;
        self.advance(newline);
        Ok(())
    }

    fn scan_key(&mut self) -> Result<(), LexError> {
        let (end, sep) = self
            .content
            .index_of_any(b"=\n")
            .ok_or(LexError::MissingSeparator)?;
        if sep != KEY_VAL_SEP {
            return Err(LexError::MissingSeparator);
        }
        self.append(TokenKind::Key, end);
        if self.tokens.last().unwrap().text.is_empty() {
            return Err(LexError::EmptyKey);
        }
        Ok(())
    }

    fn scan_delim(&mut self, byte: u8) -> bool {
        if !self.expect(byte) {
            return false;
        }
        self.append_delim();
        true
    }

    fn scan_string_value(&mut self) -> Result<(), LexError> {
        // Search for the closing quote, skipping any that are escaped.
        let mut rest = &self.content[1..];
        loop {
            let i = rest.index_of(STRING_BEGIN).ok_or(LexError::UnterminatedString)?;
            let escaped = i > 0 && rest[i - 1] == b'\\';
            rest = &rest[i + 1..];
            if !escaped {
                break;
            }
        }
        let end = self.content.len() - rest.len() - 1;
        // +1 for the leading quote already skipped.
        self.append(TokenKind::Value, end + 1);
        Ok(())
    }

    fn scan_raw_string(&mut self) -> Result<(), LexError> {
        let end = self.content[1..]
            .index_of(RAW_STRING_BEGIN)
            .ok_or(LexError::UnterminatedRawString)?;
        // +2 for the leading and trailing backticks.
        self.append(TokenKind::Value, end + 2);
        self.line += self.tokens.last().unwrap().text.count_of(b'\n') as u32;
        Ok(())
    }

    fn scan_int_or_bool_value(&mut self) -> Result<(), LexError> {
        let (end, terminator) = self
            .content
            .index_of_any(b";]}\n")
            .ok_or(LexError::ValueNotSemicolonTerminated)?;
        if terminator != KEY_VAL_END {
            return Err(LexError::ValueNotSemicolonTerminated);
        }
        self.append(TokenKind::Value, end);
        Ok(())
    }

    fn scan_list_value(&mut self) -> Result<(), LexError> {
        self.append_delim();
        loop {
            self.trim_space();
            if self.content.is_empty() {
                return Err(LexError::UnterminatedList);
            }
            if self.expect(b'\n') {
                self.scan_newline();
                continue;
            }
            if self.expect(COMMENT_BEGIN) {
                self.scan_comment()?;
                continue;
            }
            if self.expect(LIST_END) {
                self.append_delim();
                return Ok(());
            }
            self.scan_value()?;
            if self.expect(LIST_END) {
                self.append_delim();
                return Ok(());
            }
        }
    }

    fn scan_table_value(&mut self) -> Result<(), LexError> {
        self.append_delim();
        loop {
            self.trim_space();
            if self.content.is_empty() {
                return Err(LexError::UnterminatedTable);
            }
            if self.expect(b'\n') {
                self.scan_newline();
                continue;
            }
            if self.expect(COMMENT_BEGIN) {
                self.scan_comment()?;
                continue;
            }
            if self.expect(TABLE_END) {
                self.append_delim();
                return Ok(());
            }
            self.scan_key_value()?;
            if self.expect(TABLE_END) {
                self.append_delim();
                return Ok(());
            }
        }
    }

    fn scan_value(&mut self) -> Result<(), LexError> {
        self.trim_space();
        if self.expect(LIST_BEGIN) {
            self.scan_list_value()?;
        } else if self.expect(TABLE_BEGIN) {
            self.scan_table_value()?;
        } else if self.expect(STRING_BEGIN) {
            self.scan_string_value()?;
        } else if self.expect(RAW_STRING_BEGIN) {
            self.scan_raw_string()?;
        } else {
            self.scan_int_or_bool_value()?;
        }
        if !self.scan_delim(KEY_VAL_END) {
            return Err(LexError::MissingValueEnd);
        }
        Ok(())
    }

    fn scan_key_value(&mut self) -> Result<(), LexError> {
        self.scan_key()?;
        // The separator is known to be `=` because `scan_key` already
        // validated it; just emit the delimiter token.
        self.append_delim();
        self.scan_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_ok(src: &[u8]) -> Vec<Token<'_>> {
        let mut diag = Diagnostics::new("test", true, false);
        scan(src, &mut diag).expect("scan should succeed")
    }

    #[test]
    fn primitives() {
        let tokens = scan_ok(b"s=\"hi\";i=42;b=true;\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        use TokenKind::*;
        assert_eq!(
            kinds,
            vec![
                Key, Delim, Value, Delim, Key, Delim, Value, Delim, Key, Delim, Value, Delim,
            ]
        );
        assert_eq!(tokens[2].text, b"\"hi\"");
        assert_eq!(tokens[6].text, b"42");
        assert_eq!(tokens[10].text, b"true");
    }

    #[test]
    fn comment_is_skipped() {
        let tokens = scan_ok(b"# a comment\nk=1;");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, b"k");
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn raw_string_counts_embedded_newlines() {
        let tokens = scan_ok(b"k=`a\nb`;\nj=2;");
        // the value token itself
        assert_eq!(tokens[2].text, b"`a\nb`");
        // `j` starts on line 3: one newline inside the raw string, one after it
        assert_eq!(tokens[3].line, 3);
    }

    #[test]
    fn missing_separator_is_an_error() {
        let mut diag = Diagnostics::new("test", true, false);
        let err = scan(b"key\n", &mut diag).unwrap_err();
        assert_eq!(err, LexError::MissingSeparator);
        assert!(diag.has_error());
    }

    #[test]
    fn empty_key_is_an_error() {
        let mut diag = Diagnostics::new("test", true, false);
        let err = scan(b"=1;", &mut diag).unwrap_err();
        assert_eq!(err, LexError::EmptyKey);
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        let mut diag = Diagnostics::new("test", true, false);
        let err = scan(b"# no newline", &mut diag).unwrap_err();
        assert_eq!(err, LexError::UnterminatedComment);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let mut diag = Diagnostics::new("test", true, false);
        let err = scan(b"k=\"unterminated;", &mut diag).unwrap_err();
        assert_eq!(err, LexError::UnterminatedString);
    }

    #[test]
    fn escaped_quote_does_not_end_string() {
        let tokens = scan_ok(b"k=\"a\\\"b\";");
        assert_eq!(tokens[2].text, b"\"a\\\"b\"");
    }

    #[test]
    fn list_and_table_delimiters() {
        let tokens = scan_ok(b"xs=[1;\"two\";false;];");
        use TokenKind::*;
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        // Each item's value is immediately followed by its own ';', then
        // the list's closing ']' and the outer entry's own ';'.
        assert_eq!(
            kinds,
            vec![
                Key, Delim, Delim, Value, Delim, Value, Delim, Value, Delim, Delim, Delim,
            ]
        );
    }

    #[test]
    fn empty_list_is_accepted() {
        let tokens = scan_ok(b"xs=[];");
        assert_eq!(tokens.len(), 5); // Key = Delim Delim Delim
    }

    #[test]
    fn unterminated_list_is_an_error() {
        let mut diag = Diagnostics::new("test", true, false);
        let err = scan(b"xs=[1;", &mut diag).unwrap_err();
        assert_eq!(err, LexError::UnterminatedList);
    }

    #[test]
    fn int_value_stops_before_stray_bracket() {
        let mut diag = Diagnostics::new("test", true, false);
        let err = scan(b"k=1]", &mut diag).unwrap_err();
        assert_eq!(err, LexError::ValueNotSemicolonTerminated);
    }
}
