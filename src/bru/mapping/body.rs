//! Request body blocks

use once_cell::sync::Lazy;
use regex::Regex;

use super::pairs::to_name_values;
use crate::bru::ast::{
    Body, ErrorKind, GraphQl, MultipartField, MultipartValue, ParseError, ParseResult, PartKind,
};
use crate::bru::grammar::{BodyEncoding, Pair, TextBody};
use crate::bru::literal;

/// `@file(<paths>)` with `|` separating the paths
static FILE_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^@file\((.*)\)$").unwrap());

pub(crate) fn map_text_body(
    encoding: BodyEncoding,
    body: &TextBody,
    source: &str,
) -> ParseResult<Body> {
    let mut mapped = Body::default();
    match encoding {
        BodyEncoding::Json => mapped.json = Some(json(body, source)?),
        BodyEncoding::Text => mapped.text = Some(body.text.clone()),
        BodyEncoding::Xml => mapped.xml = Some(body.text.clone()),
        BodyEncoding::Sparql => mapped.sparql = Some(body.text.clone()),
        BodyEncoding::Graphql => {
            mapped.graphql = Some(GraphQl {
                query: Some(body.text.clone()),
                variables: None,
            })
        }
        BodyEncoding::GraphqlVars => {
            mapped.graphql = Some(GraphQl {
                query: None,
                variables: Some(body.text.clone()),
            })
        }
    }
    Ok(mapped)
}

/// Canonical compact JSON for the block. The literal is read from the raw
/// block content so error offsets point into the source.
fn json(body: &TextBody, source: &str) -> ParseResult<String> {
    if body.is_blank() {
        return Ok(String::new());
    }
    literal::canonicalize(&body.raw).map_err(|e| {
        ParseError::new(
            ErrorKind::InvalidLiteral,
            source,
            body.raw_offset + e.offset,
            e.message,
        )
    })
}

pub(crate) fn form_url_encoded(pairs: &[Pair]) -> Body {
    Body {
        form_url_encoded: Some(to_name_values(pairs)),
        ..Body::default()
    }
}

pub(crate) fn multipart_form(pairs: &[Pair]) -> Body {
    let fields = to_name_values(pairs)
        .into_iter()
        .map(|field| {
            let (value, kind) = classify_part(&field.value);
            MultipartField {
                name: field.name,
                value,
                enabled: field.enabled,
                kind,
            }
        })
        .collect();

    Body {
        multipart_form: Some(fields),
        ..Body::default()
    }
}

fn classify_part(value: &str) -> (MultipartValue, PartKind) {
    match FILE_REFERENCE.captures(value).and_then(|c| c.get(1)) {
        Some(paths) => (
            MultipartValue::Files(paths.as_str().split('|').map(str::to_string).collect()),
            PartKind::File,
        ),
        None => (MultipartValue::Text(value.to_string()), PartKind::Text),
    }
}
