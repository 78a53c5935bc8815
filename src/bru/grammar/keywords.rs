//! Block keywords
//!
//! A keyword is the whole word before a block's opening brace. Keywords are
//! matched as complete words, so `headers` never dispatches to `head` and
//! `body:graphql:vars` never dispatches to `body:graphql` or `body`.

use std::fmt;

use crate::bru::ast::HttpMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    AwsV4,
    Basic,
    Bearer,
    Digest,
    OAuth2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyEncoding {
    Json,
    Text,
    Xml,
    Sparql,
    Graphql,
    GraphqlVars,
}

/// Whether a script or variable block runs before the request or after the
/// response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    PreRequest,
    PostResponse,
}

/// The kind of body a block carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockShape {
    Dictionary,
    AssertDictionary,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Meta,
    Http(HttpMethod),
    Headers,
    Query,
    Auth(AuthScheme),
    Body(BodyEncoding),
    /// Bare `body`, an older spelling of `body:json`
    LegacyBody,
    FormUrlEncoded,
    MultipartForm,
    Script(Phase),
    Tests,
    Docs,
    Vars(Phase),
    Assert,
}

impl Keyword {
    pub const ALL: [Keyword; 33] = [
        Keyword::Meta,
        Keyword::Http(HttpMethod::Get),
        Keyword::Http(HttpMethod::Post),
        Keyword::Http(HttpMethod::Put),
        Keyword::Http(HttpMethod::Delete),
        Keyword::Http(HttpMethod::Patch),
        Keyword::Http(HttpMethod::Options),
        Keyword::Http(HttpMethod::Head),
        Keyword::Http(HttpMethod::Connect),
        Keyword::Http(HttpMethod::Trace),
        Keyword::Headers,
        Keyword::Query,
        Keyword::Auth(AuthScheme::AwsV4),
        Keyword::Auth(AuthScheme::Basic),
        Keyword::Auth(AuthScheme::Bearer),
        Keyword::Auth(AuthScheme::Digest),
        Keyword::Auth(AuthScheme::OAuth2),
        Keyword::Body(BodyEncoding::Json),
        Keyword::Body(BodyEncoding::Text),
        Keyword::Body(BodyEncoding::Xml),
        Keyword::Body(BodyEncoding::Sparql),
        Keyword::Body(BodyEncoding::Graphql),
        Keyword::Body(BodyEncoding::GraphqlVars),
        Keyword::LegacyBody,
        Keyword::FormUrlEncoded,
        Keyword::MultipartForm,
        Keyword::Script(Phase::PreRequest),
        Keyword::Script(Phase::PostResponse),
        Keyword::Tests,
        Keyword::Docs,
        Keyword::Vars(Phase::PreRequest),
        Keyword::Vars(Phase::PostResponse),
        Keyword::Assert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Meta => "meta",
            Keyword::Http(method) => method.as_str(),
            Keyword::Headers => "headers",
            Keyword::Query => "query",
            Keyword::Auth(AuthScheme::AwsV4) => "auth:awsv4",
            Keyword::Auth(AuthScheme::Basic) => "auth:basic",
            Keyword::Auth(AuthScheme::Bearer) => "auth:bearer",
            Keyword::Auth(AuthScheme::Digest) => "auth:digest",
            Keyword::Auth(AuthScheme::OAuth2) => "auth:oauth2",
            Keyword::Body(BodyEncoding::Json) => "body:json",
            Keyword::Body(BodyEncoding::Text) => "body:text",
            Keyword::Body(BodyEncoding::Xml) => "body:xml",
            Keyword::Body(BodyEncoding::Sparql) => "body:sparql",
            Keyword::Body(BodyEncoding::Graphql) => "body:graphql",
            Keyword::Body(BodyEncoding::GraphqlVars) => "body:graphql:vars",
            Keyword::LegacyBody => "body",
            Keyword::FormUrlEncoded => "body:form-urlencoded",
            Keyword::MultipartForm => "body:multipart-form",
            Keyword::Script(Phase::PreRequest) => "script:pre-request",
            Keyword::Script(Phase::PostResponse) => "script:post-response",
            Keyword::Tests => "tests",
            Keyword::Docs => "docs",
            Keyword::Vars(Phase::PreRequest) => "vars:pre-request",
            Keyword::Vars(Phase::PostResponse) => "vars:post-response",
            Keyword::Assert => "assert",
        }
    }

    pub fn from_name(name: &str) -> Option<Keyword> {
        Self::ALL.iter().copied().find(|kw| kw.as_str() == name)
    }

    pub fn shape(&self) -> BlockShape {
        match self {
            Keyword::Meta
            | Keyword::Http(_)
            | Keyword::Headers
            | Keyword::Query
            | Keyword::Auth(_)
            | Keyword::FormUrlEncoded
            | Keyword::MultipartForm
            | Keyword::Vars(_) => BlockShape::Dictionary,
            Keyword::Assert => BlockShape::AssertDictionary,
            Keyword::Body(_)
            | Keyword::LegacyBody
            | Keyword::Script(_)
            | Keyword::Tests
            | Keyword::Docs => BlockShape::Text,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_round_trip() {
        let names: HashSet<&str> = Keyword::ALL.iter().map(|kw| kw.as_str()).collect();
        assert_eq!(names.len(), Keyword::ALL.len());

        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_name(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_prefix_overlaps_resolve_to_whole_word() {
        assert_eq!(Keyword::from_name("head"), Some(Keyword::Http(HttpMethod::Head)));
        assert_eq!(Keyword::from_name("headers"), Some(Keyword::Headers));
        assert_eq!(Keyword::from_name("body"), Some(Keyword::LegacyBody));
        assert_eq!(
            Keyword::from_name("body:graphql:vars"),
            Some(Keyword::Body(BodyEncoding::GraphqlVars))
        );
        assert_eq!(Keyword::from_name("header"), None);
        assert_eq!(Keyword::from_name("GET"), None);
    }

    #[test]
    fn test_shapes() {
        assert_eq!(Keyword::Assert.shape(), BlockShape::AssertDictionary);
        assert_eq!(Keyword::Tests.shape(), BlockShape::Text);
        assert_eq!(Keyword::Vars(Phase::PreRequest).shape(), BlockShape::Dictionary);
    }
}
