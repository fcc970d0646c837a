//! WHOIS confirmation probe
//!
//! Invokes the system `whois` command and classifies its raw text output.
//! Registrars disagree wildly on wording, so classification is a phrase
//! scan over the lower-cased body with a strict precedence order.

use crate::error::Result;
use crate::probe::WhoisProbe;
use crate::types::ProbeStatus;
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Phrases indicating the registry has no record for the name.
///
/// Checked first: some registries print a "registrar" banner even on
/// not-found responses, so these take precedence.
const NOT_FOUND_PATTERNS: &[&str] = &[
    "no match",
    "not found",
    "no entries found",
    "no data found",
    "domain not found",
    "no matching record",
    "available for registration",
];

/// Phrases indicating an existing registration.
const REGISTERED_PATTERNS: &[&str] = &[
    "creation date",
    "created",
    "registrar",
    "expiration date",
    "expires",
    "name server",
    "nameserver",
];

/// Classify a raw WHOIS response body.
///
/// Ambiguous text defaults to `Available`: surfacing a candidate that turns
/// out to be taken is recoverable, silently hiding an open one is not.
pub fn classify(output: &str) -> ProbeStatus {
    let body = output.to_lowercase();

    if NOT_FOUND_PATTERNS.iter().any(|p| body.contains(p)) {
        return ProbeStatus::Available;
    }

    if REGISTERED_PATTERNS.iter().any(|p| body.contains(p)) {
        return ProbeStatus::Taken;
    }

    ProbeStatus::Available
}

/// WHOIS probe that shells out to the system `whois` binary.
pub struct WhoisCommand {
    timeout: Duration,
}

impl WhoisCommand {
    /// Create a probe with the given per-query timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl WhoisProbe for WhoisCommand {
    async fn lookup(&self, fqdn: &str) -> Result<ProbeStatus> {
        let query = Command::new("whois")
            .arg(fqdn)
            .kill_on_drop(true)
            .output();

        let output = match timeout(self.timeout, query).await {
            Err(_) => {
                tracing::debug!(domain = %fqdn, timeout_secs = self.timeout.as_secs(), "WHOIS query timed out");
                return Ok(ProbeStatus::Unclear);
            }
            Ok(Err(e)) => {
                tracing::warn!(domain = %fqdn, error = %e, "WHOIS command failed to run");
                return Ok(ProbeStatus::Unclear);
            }
            Ok(Ok(output)) => output,
        };

        // Unregistered domains often make the tool exit non-zero; treat
        // that the way registrars do, as "no record found".
        if !output.status.success() {
            tracing::debug!(domain = %fqdn, code = ?output.status.code(), "WHOIS exited non-zero");
            return Ok(ProbeStatus::Available);
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let status = classify(&text);
        tracing::debug!(domain = %fqdn, status = %status, "WHOIS query completed");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        assert_eq!(classify("No match for domain FOO.COM"), ProbeStatus::Available);
        assert_eq!(classify("NOT FOUND"), ProbeStatus::Available);
        assert_eq!(classify("No entries found for the selected source(s)."), ProbeStatus::Available);
        assert_eq!(classify("This domain is available for registration"), ProbeStatus::Available);
    }

    #[test]
    fn test_classify_registered() {
        assert_eq!(
            classify("Creation Date: 2020-01-01T00:00:00Z\nRegistrar: Example Inc."),
            ProbeStatus::Taken
        );
        assert_eq!(classify("Name Server: NS1.EXAMPLE.COM"), ProbeStatus::Taken);
        assert_eq!(classify("expires: 2030-06-01"), ProbeStatus::Taken);
    }

    #[test]
    fn test_classify_precedence() {
        // A not-found phrase wins even when registrar wording is present.
        let body = "No match for domain FOO.COM\n>>> Registrar: whois.verisign-grs.com";
        assert_eq!(classify(body), ProbeStatus::Available);
    }

    #[test]
    fn test_classify_defaults_open() {
        assert_eq!(classify(""), ProbeStatus::Available);
        assert_eq!(classify("% quota exceeded, try again later"), ProbeStatus::Available);
    }
}
