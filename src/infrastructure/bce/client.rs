//! Signed HTTP client for BCE services

use std::time::Duration;

use chrono::Utc;
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::Credentials;

use super::error::BceError;
use super::signer::{bce_timestamp, canonical_query, path_encode, BceSigner};

/// One BCE service endpoint
pub struct BceClient {
    http: Client,
    base_url: String,
    host: String,
    signer: BceSigner,
}

/// Scheme-qualified base URL and `Host` value for an endpoint.
///
/// Bare hosts are reached over HTTPS.
pub fn parse_endpoint(endpoint: &str) -> Result<(String, String), BceError> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    let (scheme, host) = match trimmed.split_once("://") {
        Some((scheme, host)) => (scheme.to_ascii_lowercase(), host),
        None => ("https".to_string(), trimmed),
    };

    if host.is_empty() || host.contains('/') || !matches!(scheme.as_str(), "http" | "https") {
        return Err(BceError::InvalidEndpoint(endpoint.to_string()));
    }

    Ok((format!("{}://{}", scheme, host), host.to_string()))
}

impl BceClient {
    pub fn new(endpoint: &str, credentials: &Credentials) -> Result<Self, BceError> {
        let (base_url, host) = parse_endpoint(endpoint)?;
        let http = Client::builder().timeout(None::<Duration>).build()?;

        Ok(Self {
            http,
            base_url,
            host,
            signer: BceSigner::new(credentials),
        })
    }

    /// Signed GET, decoding the JSON body
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BceError> {
        let response = self.send(Method::GET, path, query)?;
        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| BceError::Decode(e.to_string()))
    }

    /// Signed DELETE; the body is ignored on success
    pub fn delete(&self, path: &str) -> Result<(), BceError> {
        self.send(Method::DELETE, path, &[])?;
        Ok(())
    }

    fn send(&self, method: Method, path: &str, query: &[(&str, &str)]) -> Result<Response, BceError> {
        let now = Utc::now();
        let authorization =
            self.signer
                .authorization(method.as_str(), path, query, &self.host, now)?;

        let mut url = format!("{}{}", self.base_url, path_encode(path));
        let query_string = canonical_query(query);
        if !query_string.is_empty() {
            url.push('?');
            url.push_str(&query_string);
        }

        let response = self
            .http
            .request(method, url)
            .header("x-bce-date", bce_timestamp(now))
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .send()?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(BceError::from_response(
            status.as_u16(),
            status.canonical_reason(),
            &body,
        ))
    }
}
