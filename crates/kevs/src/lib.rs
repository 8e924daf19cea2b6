//! kevs - KEVS configuration parser
//!
//! Composes the scanner (`kevs-lex`) and the tree builder (`kevs-par`)
//! behind one entry point, a single driver function standing between
//! callers and the phase crates.
//!
//! ```
//! let table = kevs::parse(b"name=\"example\";port=8080;", &kevs::ParseOptions::default())
//!     .expect("valid document");
//! assert_eq!(table.get_string("name").unwrap(), "example");
//! assert_eq!(table.get_int("port").unwrap(), 8080);
//! ```

use std::path::{Path, PathBuf};

use kevs_util::{Diagnostics, LexError, ParseError};
use thiserror::Error;

pub use kevs_par::{List, Table, Value};

/// Everything that can go wrong turning bytes into a [`Table`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a [`parse`] call should name its source and behave on error.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// The name reported in `file:line:`-prefixed diagnostics.
    pub file_name: String,
    /// Whether diagnostics carry the `file:line:` prefix at all (the
    /// CLI's `--no-file` flag turns this off).
    pub include_location: bool,
    /// Whether the first error should abort the process after being
    /// printed, a debugging aid for tracking down where a bad document
    /// originates.
    pub abort_on_error: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            file_name: "<input>".to_string(),
            include_location: true,
            abort_on_error: false,
        }
    }
}

/// Parses a complete KEVS document from `bytes` into a [`Table`].
///
/// Scanning and building both stop at the first error: this format has no
/// error-recovery story, so there is never more than one diagnostic to
/// report for a given input.
pub fn parse(bytes: &[u8], options: &ParseOptions) -> Result<Table, Error> {
    let mut diagnostics = Diagnostics::new(
        options.file_name.clone(),
        options.include_location,
        options.abort_on_error,
    );

    let tokens = kevs_lex::scan(bytes, &mut diagnostics)?;
    tracing::debug!(tokens = tokens.len(), "scanned document");

    let table = kevs_par::build(&tokens, &mut diagnostics)?;
    tracing::debug!(entries = table.len(), "built root table");

    Ok(table)
}

/// Parses a complete KEVS document from `bytes`, also returning the
/// rendered diagnostic message on failure (the `file:line: error: ...`
/// string a CLI would print), alongside the structured [`Error`].
pub fn parse_reporting(
    bytes: &[u8],
    options: &ParseOptions,
) -> Result<Table, (Error, Option<String>)> {
    let mut diagnostics = Diagnostics::new(
        options.file_name.clone(),
        options.include_location,
        options.abort_on_error,
    );

    let tokens = match kevs_lex::scan(bytes, &mut diagnostics) {
        Ok(tokens) => tokens,
        Err(err) => return Err((Error::Lex(err), diagnostics.take_message())),
    };

    match kevs_par::build(&tokens, &mut diagnostics) {
        Ok(table) => Ok(table),
        Err(err) => Err((Error::Parse(err), diagnostics.take_message())),
    }
}

/// Reads `path` and parses it, naming diagnostics after the file itself.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Table, Error> {
    let path = path.as_ref();
    let bytes = read_file(path)?;
    let options = ParseOptions {
        file_name: path.display().to_string(),
        ..ParseOptions::default()
    };
    parse(&bytes, &options)
}

/// Reads a file's full contents, wrapping I/O failures in [`Error::Io`]
/// instead of leaving them anonymous in the caller.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
