//! kevs-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation shared by the scanner and the tree
//! builder: non-owning byte-slice helpers, the diagnostic sink that renders
//! the first error of a parse, and the structured error enums each phase
//! returns to its caller.
//!
//! Nothing in this crate allocates long-lived storage for source bytes; it
//! only ever borrows the input slice or formats owned `String`s for error
//! messages.

pub mod bytes;
pub mod diagnostic;
pub mod error;

pub use bytes::ByteSliceExt;
pub use diagnostic::{Diagnostics, Phase};
pub use error::{AccessError, EscapeError, LexError, NumberError, ParseError};
