//! Parsing entry points
//!
//! A parse runs in three passes over one source buffer: the block grammar
//! splits the text into raw blocks, each block is mapped to a document
//! fragment, and the fragments are merged in source order.

use crate::bru::ast::{Document, ParseResult};
use crate::bru::config::ParserConfig;
use crate::bru::grammar::{self, RawBlock};
use crate::bru::mapping::map_block;

/// Parse a bru source with the default configuration
pub fn parse_document(source: &str) -> ParseResult<Document> {
    parse_document_with(source, &ParserConfig::default())
}

pub fn parse_document_with(source: &str, config: &ParserConfig) -> ParseResult<Document> {
    let blocks = parse_blocks(source, config)?;
    blocks.iter().try_fold(Document::new(), |mut doc, block| {
        doc.merge(map_block(block, source)?);
        Ok(doc)
    })
}

/// The blocks of a source, unmapped, in source order
pub fn parse_blocks(source: &str, config: &ParserConfig) -> ParseResult<Vec<RawBlock>> {
    grammar::parse_blocks(source, config.indent_width)
}
