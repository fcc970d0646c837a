//! DNS pre-filter probe

use crate::error::Result;
use crate::probe::DnsProbe;
use async_trait::async_trait;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// DNS probe backed by the system-independent trust-dns resolver.
pub struct ResolverProbe {
    resolver: TokioAsyncResolver,
}

impl ResolverProbe {
    /// Create a probe with default resolver configuration.
    pub fn new() -> Self {
        let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());
        Self { resolver }
    }
}

impl Default for ResolverProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsProbe for ResolverProbe {
    async fn lookup(&self, fqdn: &str) -> Result<bool> {
        match self.resolver.lookup_ip(fqdn).await {
            Ok(response) => {
                let resolved = response.iter().next().is_some();
                tracing::debug!(domain = %fqdn, resolved, "DNS lookup completed");
                // A name with addresses is registered.
                Ok(!resolved)
            }
            Err(e) => {
                // NXDOMAIN and every other resolution failure fold into the
                // same tentatively-available signal; stage 2 corrects the
                // false positives.
                tracing::debug!(domain = %fqdn, error = %e, "DNS lookup failed");
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolver_probe_creation() {
        let _probe = ResolverProbe::new();
    }
}
