//! Property-based tests for the dictionary conventions: `~` disables an
//! entry, `@` marks a variable local, `@file(...)` names multipart files,
//! `meta` always carries `seq` and `type`, and text blocks lose exactly their
//! fixed indentation.

use bru_lang::bru::ast::{MultipartValue, PartKind};
use bru_lang::parse_document;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_-]{0,10}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9./:_-]{1,20}",
        "[A-Za-z0-9][A-Za-z0-9 ./:_-]{0,18}[A-Za-z0-9]",
    ]
}

fn dictionary(keyword: &str, lines: &[String]) -> String {
    let body: Vec<String> = lines.iter().map(|l| format!("  {}", l)).collect();
    format!("{} {{\n{}\n}}\n", keyword, body.join("\n"))
}

proptest! {
    #[test]
    fn test_header_disabled_prefix(
        entries in prop::collection::vec((name_strategy(), value_strategy(), any::<bool>()), 1..8)
    ) {
        let lines: Vec<String> = entries
            .iter()
            .map(|(name, value, disabled)| {
                format!("{}{}: {}", if *disabled { "~" } else { "" }, name, value)
            })
            .collect();

        let doc = parse_document(&dictionary("headers", &lines)).unwrap();
        let headers = doc.headers();

        prop_assert_eq!(headers.len(), entries.len());
        for (header, (name, value, disabled)) in headers.iter().zip(&entries) {
            prop_assert_eq!(&header.name, name);
            prop_assert_eq!(&header.value, value);
            prop_assert_eq!(header.enabled, !disabled);
        }
    }

    #[test]
    fn test_var_prefixes_combine_in_either_order(
        entries in prop::collection::vec(
            (name_strategy(), value_strategy(), any::<bool>(), any::<bool>(), any::<bool>()),
            1..8,
        )
    ) {
        let lines: Vec<String> = entries
            .iter()
            .map(|(name, value, disabled, local, local_first)| {
                let tilde = if *disabled { "~" } else { "" };
                let at = if *local { "@" } else { "" };
                let prefix = if *local_first {
                    format!("{}{}", at, tilde)
                } else {
                    format!("{}{}", tilde, at)
                };
                format!("{}{}: {}", prefix, name, value)
            })
            .collect();

        let doc = parse_document(&dictionary("vars:pre-request", &lines)).unwrap();
        let vars = doc.vars.unwrap().req.unwrap();

        prop_assert_eq!(vars.len(), entries.len());
        for (var, (name, value, disabled, local, _)) in vars.iter().zip(&entries) {
            prop_assert_eq!(&var.name, name);
            prop_assert_eq!(&var.value, value);
            prop_assert_eq!(var.enabled, !disabled);
            prop_assert_eq!(var.local, *local);
        }
    }

    #[test]
    fn test_multipart_file_references(
        paths in prop::collection::vec("[a-z0-9_./-]{1,12}", 1..5),
        text in "[A-Za-z0-9][A-Za-z0-9 ]{0,9}[A-Za-z0-9]",
    ) {
        let lines = vec![
            format!("upload: @file({})", paths.join("|")),
            format!("note: {}", text),
        ];

        let doc = parse_document(&dictionary("body:multipart-form", &lines)).unwrap();
        let fields = doc.body.unwrap().multipart_form.unwrap();

        prop_assert_eq!(fields[0].kind, PartKind::File);
        prop_assert_eq!(&fields[0].value, &MultipartValue::Files(paths.clone()));
        prop_assert_eq!(fields[1].kind, PartKind::Text);
        prop_assert_eq!(&fields[1].value, &MultipartValue::Text(text.clone()));
    }

    #[test]
    fn test_meta_defaults(name in value_strategy()) {
        let doc = parse_document(&dictionary("meta", &[format!("name: {}", name)])).unwrap();
        let meta = doc.meta.unwrap();

        prop_assert_eq!(meta.get("name"), Some(name.as_str()));
        prop_assert_eq!(meta.get("seq"), Some("1"));
        prop_assert_eq!(meta.get("type"), Some("http"));
    }

    #[test]
    fn test_text_block_loses_only_fixed_indent(
        lines in prop::collection::vec((0usize..6, "[a-z(){};]{1,12}"), 1..8)
    ) {
        let body: Vec<String> = lines
            .iter()
            .map(|(extra, text)| format!("    {}{}", " ".repeat(*extra), text))
            .collect();
        let source = format!("script:pre-request {{\n{}\n}}\n", body.join("\n"));

        let expected: Vec<String> = lines
            .iter()
            .map(|(extra, text)| format!("{}{}", " ".repeat(*extra), text))
            .collect();

        let doc = parse_document(&source).unwrap();
        prop_assert_eq!(doc.script.unwrap().req.unwrap(), expected.join("\n"));
    }
}
