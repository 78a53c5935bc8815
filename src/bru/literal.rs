//! JSON literals embedded in `body:json` blocks
//!
//! The literal text is tokenized with logos and parsed with a recursive
//! chumsky grammar. The parsed tree is re-emitted as canonical compact JSON,
//! which is what a document stores for a JSON body.

pub mod parser;
pub mod tokens;

pub use parser::{canonicalize, parse_literal, Literal, LiteralError, MAX_DEPTH};
pub use tokens::{tokenize, Token};
