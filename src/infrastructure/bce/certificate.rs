//! Certificate service repository

use serde::Deserialize;

use crate::domain::entities::CertificateRecord;
use crate::domain::ports::{CertificateRepository, ProviderResult};

use super::client::BceClient;

const CERTIFICATE_PATH: &str = "/v1/certificate";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ListCertificatesResponse {
    pub certs: Vec<CertificateMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CertificateMeta {
    pub cert_id: String,
    pub cert_name: String,
    pub cert_common_name: String,
    pub cert_start_time: String,
    pub cert_stop_time: String,
}

impl From<CertificateMeta> for CertificateRecord {
    fn from(meta: CertificateMeta) -> Self {
        CertificateRecord {
            id: meta.cert_id,
            name: meta.cert_name,
            common_name: meta.cert_common_name,
            start_time: meta.cert_start_time,
            stop_time: meta.cert_stop_time,
        }
    }
}

/// [`CertificateRepository`] backed by the BCE certificate service
pub struct BceCertificateRepository {
    client: BceClient,
}

impl BceCertificateRepository {
    pub fn new(client: BceClient) -> Self {
        Self { client }
    }
}

impl CertificateRepository for BceCertificateRepository {
    fn list_certificates(&self) -> ProviderResult<Vec<CertificateRecord>> {
        let response: ListCertificatesResponse = self.client.get_json(CERTIFICATE_PATH, &[])?;
        Ok(response.certs.into_iter().map(CertificateRecord::from).collect())
    }

    fn delete_certificate(&self, id: &str) -> ProviderResult<()> {
        self.client
            .delete(&format!("{}/{}", CERTIFICATE_PATH, id))?;
        Ok(())
    }
}
