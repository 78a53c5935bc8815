//! Document model, source positions and parse errors

pub mod document;
pub mod error;
pub mod position;
pub mod record;
pub mod span;

pub use document::{
    Assertion, Auth, AuthorizationCodeGrant, AwsV4Auth, BasicAuth, BearerAuth, Body,
    ClientCredentialsGrant, DigestAuth, Document, EmptyGrant, GraphQl, Http, HttpMethod,
    MultipartField, MultipartValue, NameValue, OAuth2, PartKind, PasswordGrant, Script, Var, Vars,
};
pub use error::{ErrorKind, ParseError, ParseResult};
pub use position::SourceLocation;
pub use record::Record;
pub use span::{Position, Span};
