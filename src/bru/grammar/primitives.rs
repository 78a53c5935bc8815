//! Atomic character-level rules shared by every block parser
//!
//! The grammar runs over a stream of `(char, byte range)` pairs so that every
//! span chumsky reports is a byte offset into the original source.

use chumsky::prelude::*;
use chumsky::Stream;
use std::ops::Range;

/// Error type for the character-level grammar
pub(crate) type CharError = Simple<char>;

/// Build a parser input over `source[base..]` whose spans are absolute byte
/// offsets into `source`
pub(crate) fn stream(
    source: &str,
    base: usize,
) -> Stream<'_, char, Range<usize>, impl Iterator<Item = (char, Range<usize>)> + '_> {
    let end = source.len();
    Stream::from_iter(
        end..end,
        source[base..]
            .char_indices()
            .map(move |(i, c)| (c, base + i..base + i + c.len_utf8())),
    )
}

/// `\r? \n`
pub(crate) fn newline() -> impl Parser<char, (), Error = CharError> + Clone {
    just('\r').or_not().ignore_then(just('\n')).ignored()
}

/// Space or tab
pub(crate) fn hspace() -> impl Parser<char, char, Error = CharError> + Clone {
    one_of(" \t")
}

/// A newline immediately followed by `}` at column 0. Closes every block.
pub(crate) fn tag_end() -> impl Parser<char, (), Error = CharError> + Clone {
    newline().then_ignore(just('}')).ignored()
}

/// Succeeds without consuming input when the input is not at a tag-end
pub(crate) fn not_tag_end() -> impl Parser<char, (), Error = CharError> + Clone {
    tag_end().not().rewind().ignored()
}

/// Characters allowed in a dictionary key
pub(crate) fn key_char() -> impl Parser<char, char, Error = CharError> + Clone {
    none_of(" \t\r\n:")
}

/// Characters allowed in an assertion key.
///
/// Assertion keys are expressions and may contain spaces and colons. A colon
/// belongs to the key unless it is followed by whitespace or the end of the
/// line, which makes it the key/value separator.
pub(crate) fn assert_key_char() -> impl Parser<char, char, Error = CharError> + Clone {
    none_of("\r\n:").or(just(':').then_ignore(none_of(" \t\r\n").rewind()))
}

/// Characters allowed in a single-line value
pub(crate) fn value_char() -> impl Parser<char, char, Error = CharError> + Clone {
    none_of("\r\n")
}

pub(crate) const MULTILINE_DELIMITER: &str = "'''";

/// Raw text between two `'''` delimiters, captured without escaping
pub(crate) fn multiline_text() -> impl Parser<char, String, Error = CharError> + Clone {
    just(MULTILINE_DELIMITER)
        .ignore_then(take_until(just(MULTILINE_DELIMITER)))
        .map(|(chars, _)| chars.into_iter().collect())
}
