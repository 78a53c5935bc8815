//! The parsed document and its per-category shapes
//!
//! Every category is optional: a file only populates what its blocks
//! mention. Serialization skips absent categories, so the JSON form of a
//! document mirrors the blocks that were actually written.

use serde::Serialize;
use std::fmt;

use super::record::Record;

/// A parsed bru file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<Http>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<NameValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<NameValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<Vars>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertions: Option<Vec<Assertion>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Document::default()
    }

    pub fn headers(&self) -> &[NameValue] {
        self.headers.as_deref().unwrap_or_default()
    }

    pub fn query(&self) -> &[NameValue] {
        self.query.as_deref().unwrap_or_default()
    }

    pub fn assertions(&self) -> &[Assertion] {
        self.assertions.as_deref().unwrap_or_default()
    }
}

/// The request line: method plus any other pairs from the method block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Http {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    #[serde(flatten)]
    pub fields: Record,
}

impl Http {
    pub fn url(&self) -> Option<&str> {
        self.fields.get("url")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Connect,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Connect => "connect",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A header, query parameter or url-encoded form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameValue {
    pub name: String,
    pub value: String,
    pub enabled: bool,
}

/// A request or response variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Var {
    pub name: String,
    pub value: String,
    pub enabled: bool,
    pub local: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assertion {
    pub name: String,
    pub value: String,
}

/// A multipart form field, either plain text or one or more file paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultipartField {
    pub name: String,
    pub value: MultipartValue,
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: PartKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MultipartValue {
    Text(String),
    Files(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Text,
    File,
}

/// Authentication settings, one slot per scheme
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Auth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awsv4: Option<AwsV4Auth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<BearerAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<DigestAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth2: Option<OAuth2>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsV4Auth {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub service: String,
    pub region: String,
    pub profile_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BearerAuth {
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DigestAuth {
    pub username: String,
    pub password: String,
}

/// OAuth2 settings. The populated fields depend on the grant type; an
/// unrecognised or missing grant type yields an empty record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OAuth2 {
    Password(PasswordGrant),
    AuthorizationCode(AuthorizationCodeGrant),
    ClientCredentials(ClientCredentialsGrant),
    Unsupported(EmptyGrant),
}

impl OAuth2 {
    pub fn grant_type(&self) -> Option<&str> {
        match self {
            OAuth2::Password(grant) => Some(&grant.grant_type),
            OAuth2::AuthorizationCode(grant) => Some(&grant.grant_type),
            OAuth2::ClientCredentials(grant) => Some(&grant.grant_type),
            OAuth2::Unsupported(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordGrant {
    pub grant_type: String,
    pub access_token_url: String,
    pub username: String,
    pub password: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationCodeGrant {
    pub grant_type: String,
    pub callback_url: String,
    pub authorization_url: String,
    pub access_token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
    pub pkce: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCredentialsGrant {
    pub grant_type: String,
    pub access_token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
}

/// Serializes as `{}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmptyGrant {}

/// Request bodies, one slot per encoding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Canonical compact JSON text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparql: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql: Option<GraphQl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_url_encoded: Option<Vec<NameValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipart_form: Option<Vec<MultipartField>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphQl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Script {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req: Option<Vec<Var>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res: Option<Vec<Var>>,
}
