//! kevs-par - Tree builder
//!
//! Turns a [`kevs_lex::Token`] stream into a [`Table`]/[`Value`] tree,
//! decoding numeric and escaped-string lexemes along the way.

pub mod builder;
pub mod escape;
pub mod numeric;
pub mod value;

pub use builder::build;
pub use value::{List, Table, Value};
