//! `bce-auth-v1` request signing

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha2::Sha256;

use crate::config::Credentials;

use super::error::BceError;

type HmacSha256 = Hmac<Sha256>;

/// Seconds a signature stays valid
pub const EXPIRATION_SECONDS: u32 = 1800;

/// Everything except `A-Z a-z 0-9 - _ . ~`
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Same as [`UNRESERVED`] but keeps path separators
const PATH: &AsciiSet = &UNRESERVED.remove(b'/');

const SIGNED_HEADERS: &str = "host;x-bce-date";

/// RFC 3986 encoding with upper-case escapes
pub fn uri_encode(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// [`uri_encode`] keeping `/`
pub fn path_encode(path: &str) -> String {
    utf8_percent_encode(path, PATH).to_string()
}

/// `x-bce-date` header value
pub fn bce_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Sorted `k=v` pairs joined with `&`. Keys without a value keep the `=`.
pub fn canonical_query(params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .filter(|(k, _)| !k.eq_ignore_ascii_case("authorization"))
        .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
        .collect();
    pairs.sort();
    pairs.join("&")
}

/// Signs requests for one access key pair
#[derive(Clone)]
pub struct BceSigner {
    access_key: String,
    secret_key: String,
}

impl BceSigner {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            access_key: credentials.access_key.clone(),
            secret_key: credentials.secret_key.clone(),
        }
    }

    /// `Authorization` header value for one request.
    ///
    /// `path` is the unencoded request path.
    pub fn authorization(
        &self,
        method: &str,
        path: &str,
        query: &[(&str, &str)],
        host: &str,
        at: DateTime<Utc>,
    ) -> Result<String, BceError> {
        let timestamp = bce_timestamp(at);
        let prefix = format!(
            "bce-auth-v1/{}/{}/{}",
            self.access_key, timestamp, EXPIRATION_SECONDS
        );
        let signing_key = hmac_hex(self.secret_key.as_bytes(), &prefix)?;

        let canonical = canonical_request(method, path, query, host, &timestamp);
        let signature = hmac_hex(signing_key.as_bytes(), &canonical)?;

        Ok(format!("{}/{}/{}", prefix, SIGNED_HEADERS, signature))
    }
}

fn canonical_request(
    method: &str,
    path: &str,
    query: &[(&str, &str)],
    host: &str,
    timestamp: &str,
) -> String {
    let mut headers = [
        format!("host:{}", uri_encode(host.trim())),
        format!("x-bce-date:{}", uri_encode(timestamp.trim())),
    ];
    headers.sort();

    format!(
        "{}\n{}\n{}\n{}",
        method.to_ascii_uppercase(),
        path_encode(path),
        canonical_query(query),
        headers.join("\n")
    )
}

fn hmac_hex(key: &[u8], data: &str) -> Result<String, BceError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| BceError::Signing(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
