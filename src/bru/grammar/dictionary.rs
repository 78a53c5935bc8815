//! Dictionary blocks: `{` newline, one `key: value` pair per line, tag-end
//!
//! Blank lines between pairs are allowed. A value is either the rest of the
//! line (trimmed) or a `'''` delimited multiline string, which may span
//! several lines and is outdented like a text block.

use chumsky::prelude::*;
use std::ops::Range;

use super::primitives::{
    assert_key_char, hspace, key_char, multiline_text, newline, not_tag_end, tag_end, value_char,
    CharError,
};
use super::text_block::outdent;

/// One `key: value` line of a dictionary block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
    /// Byte range of the whole line, leading indentation included
    pub span: Range<usize>,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            span: 0..0,
        }
    }
}

/// One dictionary line: a `key: value` pair, or nothing for a blank line.
///
/// A key with no `:` after it emits an error pointing at the first character
/// where the colon was expected, and parsing carries on with the next line.
fn dictionary_line<K>(
    key: K,
    indent: usize,
) -> impl Parser<char, Option<Pair>, Error = CharError> + Clone
where
    K: Parser<char, char, Error = CharError> + Clone,
{
    // A `'''` that is never closed, or is followed by more text on its last
    // line, falls back to a plain single-line value.
    let multiline = multiline_text()
        .then_ignore(hspace().repeated())
        .then_ignore(newline().rewind())
        .map(move |text| outdent(&text, indent).trim().to_string());

    let single = value_char()
        .repeated()
        .collect::<String>()
        .map(|value| value.trim().to_string());

    let value = just(':')
        .ignore_then(hspace().repeated())
        .ignore_then(multiline.or(single))
        .map(Ok::<String, usize>);

    let missing_colon = value_char()
        .repeated()
        .map_with_span(|_, span: Range<usize>| Err::<String, usize>(span.start));

    hspace()
        .repeated()
        .ignore_then(key.repeated().collect::<String>())
        .then_ignore(hspace().repeated())
        .then(value.or(missing_colon))
        .map_with_span(|(key, value), span| (key, value, span))
        .validate(|(key, value, span), _, emit| match value {
            Ok(value) => Some(Pair {
                key: key.trim().to_string(),
                value,
                span,
            }),
            Err(_) if key.trim().is_empty() => None,
            Err(offset) => {
                emit(CharError::expected_input_found(
                    offset..offset + 1,
                    Some(Some(':')),
                    None,
                ));
                None
            }
        })
}

fn dictionary_with<K>(
    key: K,
    indent: usize,
) -> impl Parser<char, Vec<Pair>, Error = CharError> + Clone
where
    K: Parser<char, char, Error = CharError> + Clone,
{
    let line = not_tag_end()
        .ignore_then(newline())
        .ignore_then(dictionary_line(key, indent));

    hspace()
        .repeated()
        .ignore_then(just('{'))
        .ignore_then(hspace().repeated())
        .ignore_then(line.repeated())
        .then_ignore(tag_end())
        .map(|lines| lines.into_iter().flatten().collect())
}

/// General dictionary: keys contain no whitespace and no colon
pub(crate) fn dictionary(
    indent: usize,
) -> impl Parser<char, Vec<Pair>, Error = CharError> + Clone {
    dictionary_with(key_char(), indent)
}

/// Assertion dictionary: keys are expressions and may contain spaces and
/// colons not followed by whitespace
pub(crate) fn assert_dictionary(
    indent: usize,
) -> impl Parser<char, Vec<Pair>, Error = CharError> + Clone {
    dictionary_with(assert_key_char(), indent)
}
