//! Binding Source Port
//!
//! Reads which certificate each CDN domain serves.

use super::certificate_repository::ProviderResult;

/// CDN operations needed to decide certificate usage
pub trait BindingSource {
    /// Every CDN domain name on the account, in service order
    fn list_domains(&self) -> ProviderResult<Vec<String>>;

    /// Certificate id bound to `domain`; `None` when HTTPS has no certificate
    fn binding_for_domain(&self, domain: &str) -> ProviderResult<Option<String>>;
}

impl<T: BindingSource + ?Sized> BindingSource for &T {
    fn list_domains(&self) -> ProviderResult<Vec<String>> {
        (**self).list_domains()
    }

    fn binding_for_domain(&self, domain: &str) -> ProviderResult<Option<String>> {
        (**self).binding_for_domain(domain)
    }
}
