//! Folding document fragments together
//!
//! Scalars are last-wins, sequences concatenate in block order, and nested
//! records merge field by field with the same two rules.

use crate::bru::ast::{Auth, Body, Document, GraphQl, Http, Record, Script, Vars};

fn last_wins<T>(slot: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *slot = incoming;
    }
}

fn concat<T>(slot: &mut Option<Vec<T>>, incoming: Option<Vec<T>>) {
    match (slot.as_mut(), incoming) {
        (Some(existing), Some(more)) => existing.extend(more),
        (None, Some(more)) => *slot = Some(more),
        (_, None) => {}
    }
}

fn nested<T: Default>(slot: &mut Option<T>, incoming: Option<T>, merge: impl FnOnce(&mut T, T)) {
    if let Some(incoming) = incoming {
        merge(slot.get_or_insert_with(T::default), incoming);
    }
}

fn merge_record(into: &mut Record, from: Record) {
    into.extend(from);
}

fn merge_http(into: &mut Http, from: Http) {
    last_wins(&mut into.method, from.method);
    into.fields.extend(from.fields);
}

fn merge_auth(into: &mut Auth, from: Auth) {
    last_wins(&mut into.awsv4, from.awsv4);
    last_wins(&mut into.basic, from.basic);
    last_wins(&mut into.bearer, from.bearer);
    last_wins(&mut into.digest, from.digest);
    last_wins(&mut into.oauth2, from.oauth2);
}

fn merge_graphql(into: &mut GraphQl, from: GraphQl) {
    last_wins(&mut into.query, from.query);
    last_wins(&mut into.variables, from.variables);
}

fn merge_body(into: &mut Body, from: Body) {
    last_wins(&mut into.json, from.json);
    last_wins(&mut into.text, from.text);
    last_wins(&mut into.xml, from.xml);
    last_wins(&mut into.sparql, from.sparql);
    nested(&mut into.graphql, from.graphql, merge_graphql);
    concat(&mut into.form_url_encoded, from.form_url_encoded);
    concat(&mut into.multipart_form, from.multipart_form);
}

fn merge_script(into: &mut Script, from: Script) {
    last_wins(&mut into.req, from.req);
    last_wins(&mut into.res, from.res);
}

fn merge_vars(into: &mut Vars, from: Vars) {
    concat(&mut into.req, from.req);
    concat(&mut into.res, from.res);
}

impl Document {
    /// Fold a later fragment into this document
    pub fn merge(&mut self, other: Document) {
        log::trace!("merging fragment into document");
        nested(&mut self.meta, other.meta, merge_record);
        nested(&mut self.http, other.http, merge_http);
        concat(&mut self.headers, other.headers);
        concat(&mut self.query, other.query);
        nested(&mut self.auth, other.auth, merge_auth);
        nested(&mut self.body, other.body, merge_body);
        nested(&mut self.script, other.script, merge_script);
        last_wins(&mut self.tests, other.tests);
        last_wins(&mut self.docs, other.docs);
        nested(&mut self.vars, other.vars, merge_vars);
        concat(&mut self.assertions, other.assertions);
    }
}
