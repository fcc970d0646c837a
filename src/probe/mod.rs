//! Availability probes
//!
//! Two layered signals: a cheap DNS pre-filter and an authoritative-ish
//! WHOIS text lookup. Both are behind traits so the verification pipeline
//! can be driven by fakes in tests.

pub mod dns;
pub mod whois;

// Re-export main functionality
pub use dns::ResolverProbe;
pub use whois::WhoisCommand;

use crate::error::Result;
use crate::types::ProbeStatus;
use async_trait::async_trait;

/// Stage-1 probe: name resolution as a weak availability signal.
#[async_trait]
pub trait DnsProbe: Send + Sync {
    /// Returns `true` when the name looks unregistered (did not resolve).
    ///
    /// A `true` here is only a candidate for further checking, never a
    /// final answer: a registered domain can still resolve to nothing.
    async fn lookup(&self, fqdn: &str) -> Result<bool>;
}

/// Stage-2 probe: registry text lookup for DNS survivors.
#[async_trait]
pub trait WhoisProbe: Send + Sync {
    /// Classify the registry's answer for `fqdn`.
    async fn lookup(&self, fqdn: &str) -> Result<ProbeStatus>;
}
