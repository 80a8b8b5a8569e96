//! CDN domain binding source

use serde::Deserialize;

use crate::domain::ports::{BindingSource, ProviderError, ProviderResult};

use super::client::BceClient;

const DOMAIN_PATH: &str = "/v2/domain";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ListDomainsResponse {
    pub domains: Vec<DomainEntry>,
    pub is_truncated: bool,
    pub next_marker: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DomainEntry {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DomainHttpsResponse {
    pub https: Option<HttpsConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct HttpsConfig {
    pub cert_id: String,
}

impl DomainHttpsResponse {
    fn certificate_id(self) -> Option<String> {
        self.https
            .map(|https| https.cert_id)
            .filter(|id| !id.is_empty())
    }
}

/// [`BindingSource`] backed by the BCE CDN service
pub struct BceCdnBindingSource {
    client: BceClient,
}

impl BceCdnBindingSource {
    pub fn new(client: BceClient) -> Self {
        Self { client }
    }
}

impl BindingSource for BceCdnBindingSource {
    fn list_domains(&self) -> ProviderResult<Vec<String>> {
        let mut domains = Vec::new();
        let mut marker = String::new();

        loop {
            let page: ListDomainsResponse = self
                .client
                .get_json(DOMAIN_PATH, &[("marker", marker.as_str())])?;
            domains.extend(page.domains.into_iter().map(|d| d.name));

            if !page.is_truncated {
                break;
            }
            if page.next_marker.is_empty() || page.next_marker == marker {
                return Err(ProviderError::Decode(format!(
                    "domain listing truncated without a new marker after {:?}",
                    marker
                )));
            }
            marker = page.next_marker;
        }

        Ok(domains)
    }

    fn binding_for_domain(&self, domain: &str) -> ProviderResult<Option<String>> {
        let path = format!("{}/{}/config", DOMAIN_PATH, domain);
        let response: DomainHttpsResponse = self.client.get_json(&path, &[("https", "")])?;
        Ok(response.certificate_id())
    }
}
