//! Authentication blocks
//!
//! Every scheme reads a fixed set of field names. Missing fields become empty
//! strings and fields the scheme does not know are dropped.

use super::pairs::{find, lookup};
use crate::bru::ast::{
    Auth, AuthorizationCodeGrant, AwsV4Auth, BasicAuth, BearerAuth, ClientCredentialsGrant,
    DigestAuth, EmptyGrant, ErrorKind, OAuth2, PasswordGrant,
};
use crate::bru::grammar::{AuthScheme, Pair};

pub(crate) fn map_auth(scheme: AuthScheme, pairs: &[Pair]) -> Auth {
    let mut auth = Auth::default();
    match scheme {
        AuthScheme::AwsV4 => auth.awsv4 = Some(awsv4(pairs)),
        AuthScheme::Basic => {
            auth.basic = Some(BasicAuth {
                username: lookup(pairs, "username").to_string(),
                password: lookup(pairs, "password").to_string(),
            })
        }
        AuthScheme::Bearer => {
            auth.bearer = Some(BearerAuth {
                token: lookup(pairs, "token").to_string(),
            })
        }
        AuthScheme::Digest => {
            auth.digest = Some(DigestAuth {
                username: lookup(pairs, "username").to_string(),
                password: lookup(pairs, "password").to_string(),
            })
        }
        AuthScheme::OAuth2 => auth.oauth2 = Some(oauth2(pairs)),
    }
    auth
}

fn awsv4(pairs: &[Pair]) -> AwsV4Auth {
    AwsV4Auth {
        access_key_id: lookup(pairs, "accessKeyId").to_string(),
        secret_access_key: lookup(pairs, "secretAccessKey").to_string(),
        session_token: lookup(pairs, "sessionToken").to_string(),
        service: lookup(pairs, "service").to_string(),
        region: lookup(pairs, "region").to_string(),
        profile_name: lookup(pairs, "profileName").to_string(),
    }
}

/// The populated fields depend on `grant_type`
fn oauth2(pairs: &[Pair]) -> OAuth2 {
    let field = |key: &str| lookup(pairs, key).to_string();

    match lookup(pairs, "grant_type") {
        "password" => OAuth2::Password(PasswordGrant {
            grant_type: field("grant_type"),
            access_token_url: field("access_token_url"),
            username: field("username"),
            password: field("password"),
            client_id: field("client_id"),
            client_secret: field("client_secret"),
            scope: field("scope"),
        }),
        "authorization_code" => OAuth2::AuthorizationCode(AuthorizationCodeGrant {
            grant_type: field("grant_type"),
            callback_url: field("callback_url"),
            authorization_url: field("authorization_url"),
            access_token_url: field("access_token_url"),
            client_id: field("client_id"),
            client_secret: field("client_secret"),
            scope: field("scope"),
            pkce: pkce(find(pairs, "pkce")),
        }),
        "client_credentials" => OAuth2::ClientCredentials(ClientCredentialsGrant {
            grant_type: field("grant_type"),
            access_token_url: field("access_token_url"),
            client_id: field("client_id"),
            client_secret: field("client_secret"),
            scope: field("scope"),
        }),
        other => {
            if !other.is_empty() {
                log::debug!("oauth2 grant type `{}` is not supported", other);
            }
            OAuth2::Unsupported(EmptyGrant {})
        }
    }
}

/// `pkce` is a JSON boolean. Anything unreadable is logged and read as false.
fn pkce(raw: Option<&str>) -> bool {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return false,
    };
    match serde_json::from_str::<bool>(raw) {
        Ok(value) => value,
        Err(_) => {
            log::warn!(
                "{}: pkce value `{}` is not `true` or `false`, using false",
                ErrorKind::InvalidBoolean,
                raw
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pairs(entries: &[(&str, &str)]) -> Vec<Pair> {
        entries.iter().map(|(k, v)| Pair::new(*k, *v)).collect()
    }

    #[test]
    fn test_basic_defaults_and_drops_extras() {
        let auth = map_auth(AuthScheme::Basic, &pairs(&[("username", "u"), ("realm", "x")]));
        assert_eq!(
            auth.basic,
            Some(BasicAuth {
                username: "u".to_string(),
                password: String::new(),
            })
        );
        assert!(auth.bearer.is_none());
    }

    #[test]
    fn test_awsv4_fields() {
        let auth = map_auth(
            AuthScheme::AwsV4,
            &pairs(&[("accessKeyId", "AK"), ("region", "eu-west-1")]),
        );
        let aws = auth.awsv4.unwrap();
        assert_eq!(aws.access_key_id, "AK");
        assert_eq!(aws.region, "eu-west-1");
        assert_eq!(aws.profile_name, "");
    }

    #[test]
    fn test_oauth2_password() {
        let grant = oauth2(&pairs(&[
            ("grant_type", "password"),
            ("username", "u"),
            ("callback_url", "ignored"),
        ]));
        match grant {
            OAuth2::Password(g) => {
                assert_eq!(g.username, "u");
                assert_eq!(g.access_token_url, "");
            }
            other => panic!("expected password grant, got {:?}", other),
        }
    }

    #[test]
    fn test_oauth2_client_credentials() {
        let grant = oauth2(&pairs(&[("grant_type", "client_credentials"), ("scope", "read")]));
        assert_eq!(grant.grant_type(), Some("client_credentials"));
        assert!(matches!(grant, OAuth2::ClientCredentials(ref g) if g.scope == "read"));
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    #[case(Some(""), false)]
    #[case(Some("yes"), false)]
    fn test_pkce(#[case] raw: Option<&str>, #[case] expected: bool) {
        assert_eq!(pkce(raw), expected);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[("grant_type", "implicit")])]
    #[case(&[("grant_type", "")])]
    fn test_oauth2_unsupported(#[case] entries: &[(&str, &str)]) {
        assert_eq!(oauth2(&pairs(entries)), OAuth2::Unsupported(EmptyGrant {}));
    }
}
