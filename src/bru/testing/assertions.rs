//! Fluent assertion API for parsed documents

use crate::bru::ast::{Document, HttpMethod, NameValue, OAuth2, Var};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn meta(self, key: &str, expected: &str) -> Self {
        let meta = self
            .doc
            .meta
            .as_ref()
            .unwrap_or_else(|| {
                panic!("Expected meta.{} = '{}', document has no meta", key, expected)
            });
        assert_eq!(meta.get(key), Some(expected), "meta.{}", key);
        self
    }

    pub fn method(self, expected: HttpMethod) -> Self {
        let actual = self.doc.http.as_ref().and_then(|h| h.method);
        assert_eq!(actual, Some(expected), "http.method");
        self
    }

    pub fn url(self, expected: &str) -> Self {
        self.http_field("url", expected)
    }

    pub fn http_field(self, key: &str, expected: &str) -> Self {
        let actual = self.doc.http.as_ref().and_then(|h| h.fields.get(key));
        assert_eq!(actual, Some(expected), "http.{}", key);
        self
    }

    pub fn header_count(self, expected: usize) -> Self {
        let actual = self.doc.headers();
        assert_eq!(
            actual.len(),
            expected,
            "Expected {} headers, found [{}]",
            expected,
            summarize(actual)
        );
        self
    }

    pub fn header<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NameValueAssertion<'a>),
    {
        assertion(NameValueAssertion::at(self.doc.headers(), index, "headers"));
        self
    }

    pub fn query_count(self, expected: usize) -> Self {
        let actual = self.doc.query();
        assert_eq!(
            actual.len(),
            expected,
            "Expected {} query params, found [{}]",
            expected,
            summarize(actual)
        );
        self
    }

    pub fn query<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NameValueAssertion<'a>),
    {
        assertion(NameValueAssertion::at(self.doc.query(), index, "query"));
        self
    }

    pub fn form_field<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NameValueAssertion<'a>),
    {
        let fields = self
            .doc
            .body
            .as_ref()
            .and_then(|b| b.form_url_encoded.as_deref())
            .unwrap_or_default();
        assertion(NameValueAssertion::at(fields, index, "body.formUrlEncoded"));
        self
    }

    pub fn req_var<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(VarAssertion<'a>),
    {
        let vars = self
            .doc
            .vars
            .as_ref()
            .and_then(|v| v.req.as_deref())
            .unwrap_or_default();
        assertion(VarAssertion::at(vars, index, "vars.req"));
        self
    }

    pub fn res_var<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(VarAssertion<'a>),
    {
        let vars = self
            .doc
            .vars
            .as_ref()
            .and_then(|v| v.res.as_deref())
            .unwrap_or_default();
        assertion(VarAssertion::at(vars, index, "vars.res"));
        self
    }

    pub fn assertion(self, index: usize, name: &str, value: &str) -> Self {
        let assertions = self.doc.assertions();
        assert!(
            index < assertions.len(),
            "Assertion index {} out of bounds (document has {} assertions)",
            index,
            assertions.len()
        );
        assert_eq!(assertions[index].name, name, "assertions[{}].name", index);
        assert_eq!(assertions[index].value, value, "assertions[{}].value", index);
        self
    }

    pub fn json_body(self, expected: &str) -> Self {
        let actual = self.doc.body.as_ref().and_then(|b| b.json.as_deref());
        assert_eq!(actual, Some(expected), "body.json");
        self
    }

    pub fn oauth2_grant(self, expected: &str) -> Self {
        let actual = self
            .doc
            .auth
            .as_ref()
            .and_then(|a| a.oauth2.as_ref())
            .and_then(OAuth2::grant_type);
        assert_eq!(actual, Some(expected), "auth.oauth2.grantType");
        self
    }

    pub fn tests_contain(self, expected: &str) -> Self {
        let actual = self.doc.tests.as_deref().unwrap_or_default();
        assert!(
            actual.contains(expected),
            "Expected tests to contain '{}', but got '{}'",
            expected,
            actual
        );
        self
    }

    pub fn docs(self, expected: &str) -> Self {
        assert_eq!(self.doc.docs.as_deref(), Some(expected), "docs");
        self
    }
}

fn summarize(entries: &[NameValue]) -> String {
    entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Entry Assertions
// ============================================================================

pub struct NameValueAssertion<'a> {
    entry: &'a NameValue,
    context: String,
}

impl<'a> NameValueAssertion<'a> {
    fn at(entries: &'a [NameValue], index: usize, category: &str) -> Self {
        assert!(
            index < entries.len(),
            "{} index {} out of bounds (found {})",
            category,
            index,
            entries.len()
        );
        Self {
            entry: &entries[index],
            context: format!("{}[{}]", category, index),
        }
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.entry.name, expected, "{}.name", self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_eq!(self.entry.value, expected, "{}.value", self.context);
        self
    }

    pub fn enabled(self, expected: bool) -> Self {
        assert_eq!(self.entry.enabled, expected, "{}.enabled", self.context);
        self
    }
}

pub struct VarAssertion<'a> {
    var: &'a Var,
    context: String,
}

impl<'a> VarAssertion<'a> {
    fn at(vars: &'a [Var], index: usize, category: &str) -> Self {
        assert!(
            index < vars.len(),
            "{} index {} out of bounds (found {})",
            category,
            index,
            vars.len()
        );
        Self {
            var: &vars[index],
            context: format!("{}[{}]", category, index),
        }
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.var.name, expected, "{}.name", self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_eq!(self.var.value, expected, "{}.value", self.context);
        self
    }

    pub fn enabled(self, expected: bool) -> Self {
        assert_eq!(self.var.enabled, expected, "{}.enabled", self.context);
        self
    }

    pub fn local(self, expected: bool) -> Self {
        assert_eq!(self.var.local, expected, "{}.local", self.context);
        self
    }
}
