//! Mapping from raw blocks to document fragments
//!
//! Each block maps to a document that only populates the category the block
//! belongs to. Mapping is a pure function of the block; folding the fragments
//! together is the job of [`Document::merge`].

mod auth;
mod body;
mod pairs;

use crate::bru::ast::{Body, Document, Http, ParseResult, Record, Script, Vars};
use crate::bru::grammar::{BlockBody, Keyword, Pair, Phase, RawBlock, TextBody};

/// Map one block to the document fragment it describes
pub fn map_block(block: &RawBlock, source: &str) -> ParseResult<Document> {
    match &block.body {
        BlockBody::Pairs(pairs) => Ok(map_pairs(block.keyword, pairs)),
        BlockBody::Text(text) => map_text(block.keyword, text, source),
    }
}

fn map_pairs(keyword: Keyword, pairs: &[Pair]) -> Document {
    let mut doc = Document::new();
    match keyword {
        Keyword::Meta => doc.meta = Some(meta(pairs)),
        Keyword::Http(method) => {
            let mut fields = pairs::to_record(pairs);
            fields.remove("method");
            doc.http = Some(Http {
                method: Some(method),
                fields,
            });
        }
        Keyword::Headers => doc.headers = Some(pairs::to_name_values(pairs)),
        Keyword::Query => doc.query = Some(pairs::to_name_values(pairs)),
        Keyword::Auth(scheme) => doc.auth = Some(auth::map_auth(scheme, pairs)),
        Keyword::FormUrlEncoded => doc.body = Some(body::form_url_encoded(pairs)),
        Keyword::MultipartForm => doc.body = Some(body::multipart_form(pairs)),
        Keyword::Vars(phase) => {
            let vars = Some(pairs::to_vars(pairs));
            doc.vars = Some(match phase {
                Phase::PreRequest => Vars { req: vars, res: None },
                Phase::PostResponse => Vars { req: None, res: vars },
            });
        }
        Keyword::Assert => doc.assertions = Some(pairs::to_assertions(pairs)),
        // text-shaped keywords never carry pairs
        Keyword::Body(_)
        | Keyword::LegacyBody
        | Keyword::Script(_)
        | Keyword::Tests
        | Keyword::Docs => {}
    }
    doc
}

/// `seq` and `type` are always present; an empty value counts as missing
fn meta(pairs: &[Pair]) -> Record {
    let mut meta = pairs::to_record(pairs);
    for (key, default) in [("seq", "1"), ("type", "http")] {
        if meta.get(key).map_or(true, str::is_empty) {
            meta.insert(key, default);
        }
    }
    meta
}

fn map_text(keyword: Keyword, text: &TextBody, source: &str) -> ParseResult<Document> {
    let mut doc = Document::new();
    match keyword {
        Keyword::Body(encoding) => doc.body = Some(body::map_text_body(encoding, text, source)?),
        Keyword::LegacyBody => {
            // The older spelling marks the request as carrying a JSON body
            let mut fields = Record::new();
            fields.insert("body", "json");
            doc.http = Some(Http {
                method: None,
                fields,
            });
            doc.body = Some(Body {
                text: Some(text.text.clone()),
                ..Default::default()
            });
        }
        Keyword::Script(phase) => {
            let script = Some(text.text.clone());
            doc.script = Some(match phase {
                Phase::PreRequest => Script {
                    req: script,
                    res: None,
                },
                Phase::PostResponse => Script {
                    req: None,
                    res: script,
                },
            });
        }
        Keyword::Tests => doc.tests = Some(text.text.clone()),
        Keyword::Docs => doc.docs = Some(text.text.clone()),
        // dictionary-shaped keywords never carry text
        Keyword::Meta
        | Keyword::Http(_)
        | Keyword::Headers
        | Keyword::Query
        | Keyword::Auth(_)
        | Keyword::FormUrlEncoded
        | Keyword::MultipartForm
        | Keyword::Vars(_)
        | Keyword::Assert => {}
    }
    Ok(doc)
}
