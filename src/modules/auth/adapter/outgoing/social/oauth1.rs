//! OAuth 1.0a request signing (HMAC-SHA1, RFC 5849 section 3.4).

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use rand::{distributions::Alphanumeric, Rng};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

pub(super) struct OAuth1Credentials<'a> {
    pub consumer_key: &'a str,
    pub consumer_secret: &'a str,
    pub token: &'a str,
    pub token_secret: &'a str,
}

fn encode(value: &str) -> String {
    // urlencoding leaves exactly the RFC 3986 unreserved set alone
    urlencoding::encode(value).into_owned()
}

pub(super) fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

fn oauth_params(
    credentials: &OAuth1Credentials<'_>,
    nonce: &str,
    timestamp: i64,
) -> Vec<(String, String)> {
    vec![
        (
            "oauth_consumer_key".to_string(),
            credentials.consumer_key.to_string(),
        ),
        ("oauth_nonce".to_string(), nonce.to_string()),
        (
            "oauth_signature_method".to_string(),
            "HMAC-SHA1".to_string(),
        ),
        ("oauth_timestamp".to_string(), timestamp.to_string()),
        ("oauth_token".to_string(), credentials.token.to_string()),
        ("oauth_version".to_string(), "1.0".to_string()),
    ]
}

/// `base_url` must not carry a query string; request parameters go in `params`.
pub(super) fn sign(
    method: &str,
    base_url: &str,
    params: &[(&str, &str)],
    credentials: &OAuth1Credentials<'_>,
    nonce: &str,
    timestamp: i64,
) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .chain(
            oauth_params(credentials, nonce, timestamp)
                .into_iter()
                .map(|(k, v)| (encode(&k), encode(&v))),
        )
        .collect();
    pairs.sort();

    let parameter_string = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(base_url),
        encode(&parameter_string)
    );

    let signing_key = format!(
        "{}&{}",
        encode(credentials.consumer_secret),
        encode(credentials.token_secret)
    );

    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(base_string.as_bytes());

    BASE64.encode(mac.finalize().into_bytes())
}

/// Builds the `Authorization: OAuth ...` header value for one request.
pub(super) fn authorization_header(
    method: &str,
    base_url: &str,
    params: &[(&str, &str)],
    credentials: &OAuth1Credentials<'_>,
    nonce: &str,
    timestamp: i64,
) -> String {
    let signature = sign(method, base_url, params, credentials, nonce, timestamp);

    let mut header_params = oauth_params(credentials, nonce, timestamp);
    header_params.push(("oauth_signature".to_string(), signature));
    header_params.sort();

    let fields = header_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {}", fields)
}
