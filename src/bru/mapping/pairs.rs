//! Conventions shared by dictionary-shaped blocks
//!
//! A leading `~` on a name disables the entry. In variable blocks a leading
//! `@` marks the variable as local. Both prefixes are removed from the name.

use crate::bru::ast::{Assertion, NameValue, Record, Var};
use crate::bru::grammar::Pair;

const DISABLED: char = '~';
const LOCAL: char = '@';

/// Fold pairs into a record, last occurrence of a key wins
pub(crate) fn to_record(pairs: &[Pair]) -> Record {
    pairs
        .iter()
        .map(|p| (p.key.as_str(), p.value.as_str()))
        .collect()
}

/// Value of the last pair named `key`, or an empty string
pub(crate) fn lookup<'a>(pairs: &'a [Pair], key: &str) -> &'a str {
    find(pairs, key).unwrap_or_default()
}

pub(crate) fn find<'a>(pairs: &'a [Pair], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|p| p.key == key)
        .map(|p| p.value.as_str())
}

fn split_disabled(name: &str) -> (&str, bool) {
    match name.strip_prefix(DISABLED) {
        Some(rest) => (rest, false),
        None => (name, true),
    }
}

/// Strip `~` and `@` in either order, each at most once
fn split_var(name: &str) -> (&str, bool, bool) {
    let mut name = name;
    let mut enabled = true;
    let mut local = false;

    loop {
        if enabled {
            if let Some(rest) = name.strip_prefix(DISABLED) {
                name = rest;
                enabled = false;
                continue;
            }
        }
        if !local {
            if let Some(rest) = name.strip_prefix(LOCAL) {
                name = rest;
                local = true;
                continue;
            }
        }
        break;
    }

    (name, enabled, local)
}

/// Headers, query parameters and url-encoded form fields
pub(crate) fn to_name_values(pairs: &[Pair]) -> Vec<NameValue> {
    pairs
        .iter()
        .map(|p| {
            let (name, enabled) = split_disabled(&p.key);
            NameValue {
                name: name.to_string(),
                value: p.value.clone(),
                enabled,
            }
        })
        .collect()
}

pub(crate) fn to_vars(pairs: &[Pair]) -> Vec<Var> {
    pairs
        .iter()
        .map(|p| {
            let (name, enabled, local) = split_var(&p.key);
            Var {
                name: name.to_string(),
                value: p.value.clone(),
                enabled,
                local,
            }
        })
        .collect()
}

/// Assertions keep their names untouched
pub(crate) fn to_assertions(pairs: &[Pair]) -> Vec<Assertion> {
    pairs
        .iter()
        .map(|p| Assertion {
            name: p.key.clone(),
            value: p.value.clone(),
        })
        .collect()
}
