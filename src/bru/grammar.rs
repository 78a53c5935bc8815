//! Block grammar for bru files
//!
//! The grammar is written with chumsky parser combinators over characters.
//! Spans are byte offsets into the source.
//!
//!     document   = block*
//!     block      = keyword hspace* body
//!     dictionary = "{" (newline pair?)* tag-end
//!     text-block = "{" any* tag-end
//!     tag-end    = newline "}"

pub mod blocks;
pub mod dictionary;
pub mod keywords;
mod primitives;
pub mod text_block;

pub use blocks::{parse_blocks, BlockBody, RawBlock};
pub use dictionary::Pair;
pub use keywords::{AuthScheme, BlockShape, BodyEncoding, Keyword, Phase};
pub use text_block::{outdent, TextBody};
