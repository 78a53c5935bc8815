//! Text blocks: `{` followed by free text up to the tag-end
//!
//! The interior is kept verbatim apart from the fixed indentation that every
//! line carries inside a block.

use chumsky::prelude::*;

use super::primitives::{hspace, tag_end, CharError};

/// Content of a text block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBody {
    /// Outdented text with `\n` line endings
    pub text: String,
    /// Content exactly as written between `{` and the tag-end
    pub raw: String,
    /// Byte offset of `raw` in the source
    pub raw_offset: usize,
}

impl TextBody {
    pub fn new(raw: impl Into<String>, raw_offset: usize, indent: usize) -> Self {
        let raw = raw.into();
        let text = outdent(raw.trim_start_matches(['\r', '\n']), indent);
        Self {
            text,
            raw,
            raw_offset,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Remove up to `width` leading spaces or tabs from every line.
///
/// Only whitespace is ever removed, so a line indented less than `width`
/// loses just the whitespace it has. `\r\n` endings become `\n`.
pub fn outdent(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let strip = line
                .bytes()
                .take(width)
                .take_while(|b| *b == b' ' || *b == b'\t')
                .count();
            &line[strip..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn text_block(indent: usize) -> impl Parser<char, TextBody, Error = CharError> + Clone {
    hspace()
        .repeated()
        .ignore_then(just('{'))
        .ignore_then(take_until(tag_end()).map_with_span(move |(chars, ()), span| {
            let raw: String = chars.into_iter().collect();
            TextBody::new(raw, span.start, indent)
        }))
}
