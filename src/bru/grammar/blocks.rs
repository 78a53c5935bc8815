//! Document-level grammar: zero or more keyword-prefixed blocks
//!
//! Blocks are parsed one at a time. The keyword is read first and decides
//! which body parser runs, so a failure inside a body is always reported
//! against that block instead of being lost among the alternatives of every
//! other keyword.

use chumsky::prelude::*;
use std::ops::Range;

use super::dictionary::{assert_dictionary, dictionary, Pair};
use super::keywords::{BlockShape, Keyword};
use super::primitives::{stream, CharError};
use super::text_block::{text_block, TextBody};
use crate::bru::ast::{ErrorKind, ParseError, ParseResult};

/// Body of a parsed block, before any mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    Pairs(Vec<Pair>),
    Text(TextBody),
}

/// A block as it appears in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub keyword: Keyword,
    pub body: BlockBody,
    /// From the first keyword byte through the closing `}`
    pub span: Range<usize>,
}

impl RawBlock {
    pub fn pairs(&self) -> &[Pair] {
        match &self.body {
            BlockBody::Pairs(pairs) => pairs,
            BlockBody::Text(_) => &[],
        }
    }

    pub fn text(&self) -> Option<&TextBody> {
        match &self.body {
            BlockBody::Text(text) => Some(text),
            BlockBody::Pairs(_) => None,
        }
    }
}

/// A run of non-blank characters up to the opening brace, resolved against
/// the keyword table
fn keyword() -> impl Parser<char, Keyword, Error = CharError> + Clone {
    none_of(" \t\r\n{")
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|word, span| {
            Keyword::from_name(&word)
                .ok_or_else(|| Simple::custom(span, format!("unknown block `{}`", word)))
        })
}

fn body_parser(
    keyword: Keyword,
    indent: usize,
) -> impl Parser<char, BlockBody, Error = CharError> + Clone {
    match keyword.shape() {
        BlockShape::Dictionary => dictionary(indent).map(BlockBody::Pairs).boxed(),
        BlockShape::AssertDictionary => assert_dictionary(indent).map(BlockBody::Pairs).boxed(),
        BlockShape::Text => text_block(indent).map(BlockBody::Text).boxed(),
    }
}

fn skip_whitespace(source: &str, offset: usize) -> usize {
    source.len() - source[offset..].trim_start().len()
}

/// Split a source into its blocks. `indent` is the indentation stripped from
/// text block lines and multiline values.
pub fn parse_blocks(source: &str, indent: usize) -> ParseResult<Vec<RawBlock>> {
    let mut blocks = Vec::new();
    let mut offset = skip_whitespace(source, 0);

    while offset < source.len() {
        let block = parse_block(source, offset, indent)?;
        log::debug!(
            "parsed `{}` block at {}..{}",
            block.keyword,
            block.span.start,
            block.span.end
        );
        offset = skip_whitespace(source, block.span.end);
        blocks.push(block);
    }

    Ok(blocks)
}

fn parse_block(source: &str, start: usize, indent: usize) -> ParseResult<RawBlock> {
    let (keyword, keyword_end) = keyword()
        .map_with_span(|keyword, span: Range<usize>| (keyword, span.end))
        .parse(stream(source, start))
        .map_err(|_| unknown_block(source, start))?;

    let after_keyword = &source[keyword_end..];
    let brace = after_keyword.trim_start_matches([' ', '\t']);
    if !brace.starts_with('{') {
        let offset = keyword_end + (after_keyword.len() - brace.len());
        return Err(ParseError::new(
            ErrorKind::UnknownBlock,
            source,
            offset,
            format!("expected `{{` after `{}`", keyword),
        ));
    }

    let (body, end) = body_parser(keyword, indent)
        .map_with_span(|body, span: Range<usize>| (body, span.end))
        .parse(stream(source, keyword_end))
        .map_err(|errors| body_error(source, keyword, errors))?;

    Ok(RawBlock {
        keyword,
        body,
        span: start..end,
    })
}

fn unknown_block(source: &str, offset: usize) -> ParseError {
    let word: String = source[offset..]
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '{')
        .collect();
    ParseError::new(
        ErrorKind::UnknownBlock,
        source,
        offset,
        format!("expected a block keyword, found `{}`", word),
    )
}

/// Classify a body failure: a dictionary line without `:` is a broken pair,
/// anything else means the closing brace was never found
fn body_error(source: &str, keyword: Keyword, errors: Vec<CharError>) -> ParseError {
    let missing_colon = errors
        .iter()
        .filter(|e| e.expected().any(|expected| *expected == Some(':')))
        .map(|e| e.span().start)
        .filter(|offset| *offset < source.len())
        .min();

    if let Some(offset) = missing_colon {
        let found = source[offset..].chars().next().unwrap_or_default();
        return ParseError::new(
            ErrorKind::MalformedPair,
            source,
            offset,
            format!("expected `:` after key in `{}`, found {:?}", keyword, found),
        );
    }

    let offset = errors
        .iter()
        .map(|e| e.span().start)
        .max()
        .unwrap_or(source.len());
    ParseError::new(
        ErrorKind::UnterminatedBlock,
        source,
        offset,
        format!("expected closing `}}` at the start of a line to end `{}`", keyword),
    )
}
