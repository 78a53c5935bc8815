//! The bru request description format
//!
//! A bru file is a sequence of blocks, each introduced by a keyword such as
//! `meta`, `get`, `headers` or `body:json`. Blocks are either dictionaries of
//! `key: value` lines or free text, and every block is closed by a `}` at the
//! start of a line:
//!
//!     meta {
//!       name: Get users
//!       seq: 1
//!     }
//!
//!     get {
//!       url: https://api.example.com/users
//!     }
//!
//!     headers {
//!       Accept: application/json
//!       ~X-Debug: 1
//!     }
//!
//! Parsing produces a [`Document`](ast::Document), or a single
//! [`ParseError`](ast::ParseError) describing where the text stopped making
//! sense.

pub mod ast;
pub mod config;
pub mod formats;
pub mod grammar;
pub mod literal;
pub mod mapping;
pub mod merge;
pub mod parser;
pub mod testing;

pub use ast::{Document, ErrorKind, ParseError, ParseResult};
pub use config::{BruConfig, Loader, OutputConfig, ParserConfig};
pub use parser::{parse_blocks, parse_document, parse_document_with};
