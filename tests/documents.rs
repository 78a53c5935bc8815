//! Whole-document tests over the fixture files in `tests/fixtures`

use bru_lang::bru::ast::{HttpMethod, OAuth2};
use bru_lang::bru::formats::{render, OutputFormat};
use bru_lang::bru::testing::assert_doc;
use bru_lang::bru::OutputConfig;
use bru_lang::{parse_document, Document};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use std::fs;

fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{}", name)).expect("Failed to read fixture")
}

fn parse_fixture(name: &str) -> Document {
    parse_document(&read_fixture(name)).expect("fixture to parse")
}

#[test]
fn test_simple_request() {
    let doc = parse_fixture("simple.bru");

    let rendered = render(
        &doc,
        &OutputConfig {
            format: OutputFormat::Json,
            pretty: true,
        },
    )
    .unwrap();

    insta::assert_snapshot!(rendered, @r###"
    {
      "meta": {
        "name": "test",
        "type": "http",
        "seq": "1"
      },
      "http": {
        "method": "get",
        "url": "https://example.com"
      },
      "headers": [
        {
          "name": "Authorization",
          "value": "Bearer xyz",
          "enabled": false
        }
      ]
    }
    "###);
}

#[test]
fn test_simple_request_with_crlf() {
    let source = read_fixture("simple.bru").replace('\n', "\r\n");
    assert_eq!(parse_document(&source).unwrap(), parse_fixture("simple.bru"));
}

#[test]
fn test_full_request() {
    let doc = parse_fixture("full.bru");

    assert_doc(&doc)
        .meta("name", "Create user")
        .meta("seq", "3")
        .meta("type", "http")
        .method(HttpMethod::Post)
        .url("https://api.example.com/users?dry=true")
        .http_field("body", "json")
        .http_field("auth", "bearer")
        .query_count(2)
        .query(0, |q| {
            q.name("dry").value("true").enabled(true);
        })
        .query(1, |q| {
            q.name("verbose").value("1").enabled(false);
        })
        .header_count(2)
        .header(0, |h| {
            h.name("content-type").value("application/json").enabled(true);
        })
        .header(1, |h| {
            h.name("x-debug").value("on").enabled(false);
        })
        .json_body(r#"{"name":"Ada","tags":["admin","ops"],"age":36,"active":true,"manager":null}"#)
        .req_var(0, |v| {
            v.name("host").value("api.example.com").enabled(true).local(false);
        })
        .req_var(1, |v| {
            v.name("tmp").value("scratch").enabled(true).local(true);
        })
        .res_var(0, |v| {
            v.name("userId").value("res.body.id").enabled(false).local(true);
        })
        .assertion(0, "res.status", "eq 201")
        .assertion(1, "res.body.name", "eq Ada")
        .tests_contain("expect(res.status).to.equal(201);")
        .docs("Creates a user.\n\n  Indented example stays indented.");

    let auth = doc.auth.as_ref().unwrap();
    assert_eq!(auth.bearer.as_ref().unwrap().token, "{{token}}");

    let script = doc.script.as_ref().unwrap();
    assert_eq!(script.req.as_deref(), Some(r#"req.setHeader("x-request-id", "1");"#));
    assert_eq!(script.res.as_deref(), Some(r#"bru.setVar("userId", res.body.id);"#));

    assert_eq!(
        doc.tests.as_deref(),
        Some("test(\"created\", function() {\n  expect(res.status).to.equal(201);\n});")
    );
}

#[test]
fn test_multipart_and_form_bodies() {
    let doc = parse_fixture("multipart.bru");
    let body = serde_json::to_value(doc.body.as_ref().unwrap()).unwrap();

    assert_eq!(
        body,
        json!({
            "formUrlEncoded": [
                { "name": "grant", "value": "yes", "enabled": true }
            ],
            "multipartForm": [
                { "name": "title", "value": "Holiday photos", "enabled": true, "type": "text" },
                { "name": "photos", "value": ["a.png", "b.png", "c.png"], "enabled": true, "type": "file" },
                { "name": "cover", "value": ["cover.png"], "enabled": false, "type": "file" }
            ]
        })
    );
}

#[test]
fn test_graphql_query_and_variables() {
    let doc = parse_fixture("graphql.bru");
    let graphql = doc.body.as_ref().unwrap().graphql.as_ref().unwrap();

    assert_doc(&doc).meta("type", "graphql").method(HttpMethod::Post);
    assert_eq!(
        graphql.query.as_deref(),
        Some("query Viewer($id: ID!) {\n  user(id: $id) {\n    name\n  }\n}")
    );
    assert_eq!(graphql.variables.as_deref(), Some("{\n  \"id\": \"42\"\n}"));
}

#[rstest]
#[case("oauth2-password.bru", "password")]
#[case("oauth2-authorization-code.bru", "authorization_code")]
#[case("oauth2-client-credentials.bru", "client_credentials")]
fn test_oauth2_grant_types(#[case] fixture: &str, #[case] grant: &str) {
    assert_doc(&parse_fixture(fixture)).oauth2_grant(grant);
}

#[test]
fn test_oauth2_password_fields_only() {
    let doc = parse_fixture("oauth2-password.bru");
    let oauth2 = serde_json::to_value(doc.auth.unwrap().oauth2.unwrap()).unwrap();

    assert_eq!(
        oauth2,
        json!({
            "grantType": "password",
            "accessTokenUrl": "https://auth.example.com/token",
            "username": "ada",
            "password": "hunter2",
            "clientId": "client",
            "clientSecret": "secret",
            "scope": "read"
        })
    );
}

#[test]
fn test_oauth2_authorization_code_without_pkce() {
    let doc = parse_fixture("oauth2-authorization-code.bru");
    match doc.auth.unwrap().oauth2.unwrap() {
        OAuth2::AuthorizationCode(grant) => {
            assert!(!grant.pkce);
            assert_eq!(grant.callback_url, "https://example.com/callback");
            assert_eq!(grant.scope, "read write");
        }
        other => panic!("expected authorization code grant, got {:?}", other),
    }
}

#[test]
fn test_oauth2_authorization_code_with_pkce() {
    let source = "auth:oauth2 {\n  grant_type: authorization_code\n  pkce: true\n}\n";
    match parse_document(source).unwrap().auth.unwrap().oauth2.unwrap() {
        OAuth2::AuthorizationCode(grant) => assert!(grant.pkce),
        other => panic!("expected authorization code grant, got {:?}", other),
    }
}

#[test]
fn test_oauth2_unknown_grant_is_empty() {
    let source = "auth:oauth2 {\n  grant_type: implicit\n  client_id: x\n}\n";
    let doc = parse_document(source).unwrap();
    let rendered = serde_json::to_string(&doc).unwrap();
    assert_eq!(rendered, r#"{"auth":{"oauth2":{}}}"#);
}

#[test]
fn test_blocks_in_any_order() {
    let forward = parse_fixture("simple.bru");
    let source = "headers {\n  ~Authorization: Bearer xyz\n}\nget {\n  url: https://example.com\n}\nmeta {\n  name: test\n  type: http\n}\n";
    let backward = parse_document(source).unwrap();

    assert_eq!(backward.meta, forward.meta);
    assert_eq!(backward.http, forward.http);
    assert_eq!(backward.headers, forward.headers);
}

#[test]
fn test_duplicate_keys_last_wins() {
    let doc = parse_document("meta {\n  seq: 1\n  seq: 2\n}\n").unwrap();
    assert_doc(&doc).meta("seq", "2");
    assert_eq!(doc.meta.unwrap().len(), 2);
}

#[test]
fn test_empty_blocks() {
    let doc = parse_document("headers {\n}\ntests {\n}\n").unwrap();
    assert_eq!(doc.headers, Some(Vec::new()));
    assert_eq!(doc.tests.as_deref(), Some(""));
}

#[test]
fn test_multiline_dictionary_value() {
    let source = "vars:pre-request {\n  payload: '''\n    {\n      \"a\": 1\n    }\n  '''\n  next: 2\n}\n";
    let doc = parse_document(source).unwrap();
    assert_doc(&doc)
        .req_var(0, |v| {
            v.name("payload").value("{\n  \"a\": 1\n}");
        })
        .req_var(1, |v| {
            v.name("next").value("2");
        });
}
