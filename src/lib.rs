//! # bru-lang
//!
//! A parser for the bru request description format.
//!
//! ```text
//! use bru_lang::parse_document;
//!
//! let doc = parse_document("get {\n  url: https://example.com\n}\n")?;
//! assert_eq!(doc.http.unwrap().url(), Some("https://example.com"));
//! ```
//!
//! ## Testing
//!
//! Document-level tests use the fluent helpers in the
//! [testing module](bru::testing).

pub mod bru;

pub use bru::{
    parse_blocks, parse_document, parse_document_with, Document, ErrorKind, ParseError,
    ParseResult, ParserConfig,
};
