//! Parse failures: kind, location and message

use bru_lang::bru::literal::MAX_DEPTH;
use bru_lang::{parse_document, ErrorKind};
use rstest::rstest;

#[test]
fn test_missing_colon_is_malformed_pair() {
    let source = "headers {\n  X-Foo bar\n}";
    let err = parse_document(source).unwrap_err();

    assert_eq!(err.kind, ErrorKind::MalformedPair);
    assert_eq!(&source[err.offset..], "bar\n}");
    assert_eq!((err.line(), err.column()), (1, 8));
    assert!(err.message.starts_with("expected `:` after key"));
    assert_eq!(
        err.to_string(),
        format!("malformed pair at 2:9: {}", err.message)
    );
}

#[rstest]
#[case::unknown_keyword("meta {\n}\npatch2 {\n}\n", ErrorKind::UnknownBlock, 9)]
#[case::stray_text("hello\n", ErrorKind::UnknownBlock, 0)]
#[case::uppercase_method("GET {\n  url: x\n}\n", ErrorKind::UnknownBlock, 0)]
#[case::no_brace("docs\n", ErrorKind::UnknownBlock, 4)]
#[case::key_without_value("headers {\n  X-Foo\n}\n", ErrorKind::MalformedPair, 17)]
#[case::pair_after_valid_pair("headers {\n  a: 1\n  X-Foo bar\n}\n", ErrorKind::MalformedPair, 25)]
#[case::meta_without_colon("meta {\n  name test\n}\n", ErrorKind::MalformedPair, 14)]
#[case::assertion_without_colon("assert {\n  res.status eq 200\n}\n", ErrorKind::MalformedPair, 28)]
#[case::dictionary_at_eof("get {\n  url: x\n", ErrorKind::UnterminatedBlock, 15)]
#[case::indented_close("docs {\n  text\n  }", ErrorKind::UnterminatedBlock, 17)]
#[case::text_at_eof("tests {\n  expect(1)", ErrorKind::UnterminatedBlock, 19)]
#[case::missing_json_comma("body:json {\n  [1 2]\n}\n", ErrorKind::InvalidLiteral, 17)]
#[case::unquoted_json_key("body:json {\n  {a: 1}\n}\n", ErrorKind::InvalidLiteral, 15)]
fn test_error_kinds(#[case] source: &str, #[case] kind: ErrorKind, #[case] offset: usize) {
    let err = parse_document(source).unwrap_err();
    assert_eq!(err.kind, kind, "{}", err);
    assert_eq!(err.offset, offset, "{}", err);
}

#[test]
fn test_unterminated_block_message_names_the_brace() {
    let err = parse_document("query {\n  a: 1\n").unwrap_err();
    assert!(err.message.contains("closing `}`"), "{}", err.message);
    assert!(err.message.contains("query"), "{}", err.message);
}

#[test]
fn test_error_after_valid_blocks_aborts_whole_parse() {
    let source = "meta {\n  name: ok\n}\n\nget {\n  url: x\n}\n\nnonsense\n";
    let err = parse_document(source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownBlock);
    assert_eq!(err.line(), 8);
}

#[test]
fn test_invalid_pkce_is_not_an_error() {
    let source = "auth:oauth2 {\n  grant_type: authorization_code\n  pkce: maybe\n}\n";
    let doc = parse_document(source).unwrap();
    let json = serde_json::to_value(doc.auth.unwrap().oauth2.unwrap()).unwrap();
    assert_eq!(json["pkce"], serde_json::Value::Bool(false));
}

#[test]
fn test_deeply_nested_json_body_is_rejected() {
    let depth = MAX_DEPTH * 10;
    let source = format!(
        "body:json {{\n  {}{}\n}}\n",
        "[".repeat(depth),
        "]".repeat(depth)
    );
    let err = parse_document(&source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidLiteral);
    // "body:json {\n  " is 14 bytes
    assert_eq!(err.offset, 14 + MAX_DEPTH);
}
