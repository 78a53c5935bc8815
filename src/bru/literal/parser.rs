//! Recursive literal grammar over logos tokens
//!
//!     value  = object | array | string | number | true | false | null
//!     object = "{" (string ":" value ("," string ":" value)*)? "}"
//!     array  = "[" (value ("," value)*)? "]"

use chumsky::prelude::*;
use std::fmt;
use std::ops::Range;

use super::tokens::{tokenize, Token};

pub type TokenSpan = (Token, Range<usize>);
type ParserError = Simple<TokenSpan>;

/// Deepest nesting of objects and arrays a literal may have
pub const MAX_DEPTH: usize = 512;

/// A parsed literal
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Members in source order
    Object(Vec<(String, Literal)>),
    Array(Vec<Literal>),
    /// Source text of the string, quotes and escapes included
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

/// Emits canonical compact JSON: no whitespace, members in source order,
/// strings exactly as written.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Object(members) => {
                f.write_str("{")?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                f.write_str("}")
            }
            Literal::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Literal::String(raw) => f.write_str(raw),
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Null => f.write_str("null"),
        }
    }
}

/// Shortest text that reads back as the same number. Integral values print
/// without a fraction, very small or very large ones in exponent form.
fn format_number(n: f64) -> String {
    let abs = n.abs();
    if abs == 0.0 {
        "0".to_string()
    } else if abs >= 1e21 || abs < 1e-6 {
        format!("{:e}", n)
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Failure while reading a literal, relative to the literal's own text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralError {
    pub offset: usize,
    pub message: String,
}

fn token(expected: Token) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(move |(t, _): &TokenSpan| *t == expected).ignored()
}

fn string() -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    filter_map(|span, (t, _): TokenSpan| match t {
        Token::Str(raw) => Ok(raw),
        _ => Err(ParserError::custom(span, "expected a string")),
    })
}

fn number() -> impl Parser<TokenSpan, f64, Error = ParserError> + Clone {
    filter_map(|span, (t, _): TokenSpan| match t {
        Token::Number(raw) => match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(ParserError::custom(span, format!("number `{}` is out of range", raw))),
        },
        _ => Err(ParserError::custom(span, "expected a number")),
    })
}

pub(crate) fn literal() -> impl Parser<TokenSpan, Literal, Error = ParserError> + Clone {
    recursive(|value| {
        let array = value
            .clone()
            .separated_by(token(Token::Comma))
            .delimited_by(token(Token::OpenBracket), token(Token::CloseBracket))
            .map(Literal::Array);

        let member = string().then_ignore(token(Token::Colon)).then(value);
        let object = member
            .separated_by(token(Token::Comma))
            .delimited_by(token(Token::OpenBrace), token(Token::CloseBrace))
            .map(Literal::Object);

        token(Token::True)
            .to(Literal::Boolean(true))
            .or(token(Token::False).to(Literal::Boolean(false)))
            .or(token(Token::Null).to(Literal::Null))
            .or(number().map(Literal::Number))
            .or(string().map(Literal::String))
            .or(array)
            .or(object)
    })
}

/// Parse a complete literal
pub fn parse_literal(source: &str) -> Result<Literal, LiteralError> {
    let tokens = tokenize(source).map_err(|span| LiteralError {
        offset: span.start,
        message: format!("unexpected `{}`", &source[span]),
    })?;
    check_depth(&tokens)?;

    literal()
        .then_ignore(end())
        .parse(tokens.clone())
        .map_err(|errors| describe(source, &tokens, errors))
}

/// Reject literals nested past `MAX_DEPTH` before the recursive grammar
/// runs, pointing at the first bracket over the limit
fn check_depth(tokens: &[TokenSpan]) -> Result<(), LiteralError> {
    let mut depth = 0usize;
    for (token, range) in tokens {
        match token {
            Token::OpenBrace | Token::OpenBracket => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(LiteralError {
                        offset: range.start,
                        message: format!("JSON body is nested deeper than {} levels", MAX_DEPTH),
                    });
                }
            }
            Token::CloseBrace | Token::CloseBracket => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn describe(source: &str, tokens: &[TokenSpan], errors: Vec<ParserError>) -> LiteralError {
    // Spans here are token indices
    let index = errors
        .iter()
        .map(|e| e.span().start)
        .max()
        .unwrap_or(tokens.len());

    match tokens.get(index) {
        Some((token, range)) => LiteralError {
            offset: range.start,
            message: format!("unexpected {} in JSON body", token),
        },
        None => LiteralError {
            offset: source.trim_end().len(),
            message: "unexpected end of JSON body".to_string(),
        },
    }
}

/// Parse a literal and re-emit it as canonical compact JSON
pub fn canonicalize(source: &str) -> Result<String, LiteralError> {
    parse_literal(source).map(|literal| literal.to_string())
}
