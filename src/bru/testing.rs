//! Test support
//!
//! Fluent assertions over parsed documents, so tests read as a description
//! of the expected request:
//!
//!     assert_doc(&doc)
//!         .method(HttpMethod::Get)
//!         .url("https://example.com")
//!         .header_count(1)
//!         .header(0, |h| h.name("Accept").enabled(true));

mod assertions;

pub use assertions::{assert_doc, DocumentAssertion, NameValueAssertion, VarAssertion};
