//! A deterministic, one-value-per-line printer for tokens and parsed
//! tables, used by the CLI's `--scan`/`--dump` debugging flags.

use std::io::{self, Write};

use kevs_lex::{Token, TokenKind};
use kevs_par::{List, Table, Value};

/// Prints the raw token stream, one token per line: `<kind> <text>`.
pub fn dump_tokens(tokens: &[Token<'_>], out: &mut impl Write) -> io::Result<()> {
    for token in tokens {
        let kind = match token.kind {
            TokenKind::Key => "key",
            TokenKind::Delim => "delim",
            TokenKind::Value => "value",
        };
        writeln!(out, "{kind} {}", String::from_utf8_lossy(token.text))?;
    }
    Ok(())
}

/// Prints a parsed table's entries, one per line, recursing into nested
/// lists/tables with indentation proportional to depth.
pub fn dump_table(table: &Table, out: &mut impl Write) -> io::Result<()> {
    dump_table_at(table, 0, out)
}

fn dump_table_at(table: &Table, depth: usize, out: &mut impl Write) -> io::Result<()> {
    let pad = "  ".repeat(depth);
    for (key, value) in table {
        write!(out, "{pad}{key} ")?;
        dump_value(value, depth, out)?;
    }
    Ok(())
}

fn dump_list_at(list: &List, depth: usize, out: &mut impl Write) -> io::Result<()> {
    let pad = "  ".repeat(depth);
    for (index, value) in list.iter().enumerate() {
        write!(out, "{pad}[{index}] ")?;
        dump_value(value, depth, out)?;
    }
    Ok(())
}

fn dump_value(value: &Value, depth: usize, out: &mut impl Write) -> io::Result<()> {
    match value {
        Value::String(s) => writeln!(out, "string {s}"),
        Value::Integer(n) => writeln!(out, "int {n}"),
        Value::Boolean(b) => writeln!(out, "bool {b}"),
        Value::List(l) => {
            writeln!(out, "list {}", l.len())?;
            dump_list_at(l, depth + 1, out)
        }
        Value::Table(t) => {
            writeln!(out, "table {}", t.len())?;
            dump_table_at(t, depth + 1, out)
        }
    }
}
