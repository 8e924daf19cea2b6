//! Structured error types shared by the scanner and the tree builder.
//!
//! Each enum corresponds to one of the abstract error kinds the format
//! distinguishes: lexical failures the scanner can hit, escape-sequence
//! failures the string decoder can hit, numeric-literal failures the
//! integer decoder can hit, structural failures the tree builder can hit,
//! and lookup failures the typed accessors can hit.

use thiserror::Error;

/// Errors the scanner can report while turning bytes into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A key/value entry had no `=` before a `;` or newline.
    #[error("key-value pair is missing separator")]
    MissingSeparator,

    /// A key token's trimmed span was empty.
    #[error("empty key")]
    EmptyKey,

    /// End of input reached inside a `#` comment.
    #[error("comment does not end with newline")]
    UnterminatedComment,

    /// No closing `"` found for a quoted string.
    #[error("string value does not end with quote")]
    UnterminatedString,

    /// No closing backtick found for a raw string.
    #[error("raw string value does not end with backtick")]
    UnterminatedRawString,

    /// An integer or boolean lexeme ran into `]`, `}`, or a newline before `;`.
    #[error("integer or boolean value does not end with semicolon")]
    ValueNotSemicolonTerminated,

    /// A value was not followed by `;`.
    #[error("value does not end with semicolon")]
    MissingValueEnd,

    /// End of input reached before a list's closing `]`.
    #[error("end of input without list end")]
    UnterminatedList,

    /// End of input reached before a table's closing `}`.
    #[error("end of input without table end")]
    UnterminatedTable,
}

/// Errors the quoted-string escape decoder can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EscapeError {
    /// `\` followed by a byte that is not a recognized escape letter.
    #[error("unknown escape sequence")]
    UnknownEscape,

    /// `\u` was not followed by 4 hex digits.
    #[error("\\u must be followed by 4 hex digits: \\uXXXX")]
    TruncatedShortEscape,

    /// `\U` was not followed by 8 hex digits.
    #[error("\\U must be followed by 8 hex digits: \\UXXXXXXXX")]
    TruncatedLongEscape,

    /// A byte inside a `\u`/`\U` payload was not a hex digit.
    #[error(transparent)]
    InvalidHexPayload(#[from] NumberError),

    /// The decoded code point fell in the UTF-16 surrogate range.
    #[error("code point U+{0:04X} is a surrogate, not a valid UTF-8 scalar value")]
    Surrogate(u32),

    /// The decoded code point exceeded `U+10FFFF`.
    #[error("code point U+{0:04X} is above U+10FFFF")]
    OutOfRange(u32),
}

/// Errors the numeric decoder can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// The lexeme had no digits after an optional sign/base prefix.
    #[error("empty input")]
    Empty,

    /// `0` was followed by a byte other than `x`, `o`, or `b`.
    #[error("invalid base char, must be 'x', 'o' or 'b'")]
    InvalidBasePrefix,

    /// `0` was followed by fewer than two further characters.
    #[error("leading 0 requires at least 2 more chars")]
    ShortBasePrefix,

    /// A byte was neither an ASCII digit nor an ASCII letter.
    #[error("invalid char, must be a letter or a digit")]
    InvalidDigitChar,

    /// A digit's value was `>=` the base.
    #[error("invalid digit, bigger than base")]
    DigitExceedsBase,

    /// Multiplying the accumulator by the base would overflow `u64`.
    #[error("invalid input, mul overflows")]
    MulOverflow,

    /// Adding the next digit would overflow `u64`.
    #[error("invalid input, add overflows")]
    AddOverflow,

    /// A non-negative magnitude was `>= 2^63`.
    #[error("invalid input, overflows max value")]
    PositiveOverflow,

    /// A negative magnitude was `> 2^63`.
    #[error("invalid input, underflows min value")]
    NegativeOverflow,
}

/// Errors the tree builder can report while turning tokens into a `Value` tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A lexical error surfaced by the scanner.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// An escape-sequence error surfaced while decoding a quoted string.
    #[error("could not normalize string: {0}")]
    Escape(#[from] EscapeError),

    /// A simple-value lexeme was not a valid integer.
    #[error("value '{lexeme}' is not an integer: {source}")]
    NotAnInteger { lexeme: String, source: NumberError },

    /// The builder expected a token of a given kind but ran out of tokens.
    #[error("expected token '{expected}', have nothing")]
    ExpectedTokenAtEof { expected: &'static str },

    /// The builder expected a specific delimiter byte but found something else.
    #[error("expected delimiter '{}', have a different token", *.expected as char)]
    ExpectedDelim { expected: u8 },

    /// A key did not match `[_A-Za-z][_A-Za-z0-9]*`.
    #[error("key is not a valid identifier: '{0}'")]
    InvalidIdentifier(String),

    /// A table already had an entry with this key.
    #[error("key '{0}' is not unique for current table")]
    DuplicateKey(String),
}

/// Errors the typed accessors (`Table`/`List` lookups) can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No entry in the table had the requested key.
    #[error("key not found")]
    KeyNotFound,

    /// An index was `>=` the list's length.
    #[error("index out of bounds")]
    IndexOutOfBounds,

    /// The value at the given key/index was not of the requested kind.
    #[error("value is not {0}")]
    WrongKind(&'static str),
}
