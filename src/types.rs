//! Core types and structures for domain-scout

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Outcome of a single registry probe.
///
/// WHOIS output is free text and does not always yield a confident answer,
/// so this is a tri-state rather than a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Available,
    Taken,
    Unclear,
}

impl ProbeStatus {
    /// Definite availability verdict, if this status carries one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ProbeStatus::Available => Some(true),
            ProbeStatus::Taken => Some(false),
            ProbeStatus::Unclear => None,
        }
    }
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeStatus::Available => write!(f, "available"),
            ProbeStatus::Taken => write!(f, "taken"),
            ProbeStatus::Unclear => write!(f, "unclear"),
        }
    }
}

/// Which verification stages actually ran for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    DnsOnly,
    DnsWhois,
    DnsWhoisUnclear,
}

impl std::fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationMethod::DnsOnly => write!(f, "DNS only"),
            VerificationMethod::DnsWhois => write!(f, "DNS + WHOIS"),
            VerificationMethod::DnsWhoisUnclear => write!(f, "DNS + WHOIS (timeout-or-error)"),
        }
    }
}

/// Per-candidate verification result.
///
/// Created at stage 1 with the DNS signal, updated at most once by stage 2,
/// then frozen in the returned batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Bare candidate name, no suffix.
    pub domain: String,
    /// Candidate plus suffix, display form.
    pub full_domain: String,
    /// Stage-1 signal: `true` means the name did not resolve.
    pub dns_available: bool,
    /// Stage-2 signal; populated only for candidates with `dns_available`.
    pub whois_status: Option<ProbeStatus>,
    /// Authoritative merged verdict.
    pub available: bool,
    pub method: VerificationMethod,
    pub checked_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Registrar search URL for manual follow-up.
    pub fn registrar_search_url(&self) -> String {
        format!(
            "https://www.godaddy.com/domainsearch/find?domainToCheck={}",
            self.full_domain
        )
    }
}

/// Configuration for the verification pipeline.
///
/// The delays are the throttling policy toward the shared lookup services;
/// they are part of the contract, not a tuning knob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Suffix appended to every candidate (without the leading dot).
    pub tld: String,
    /// Pause between successive DNS probes.
    pub dns_delay: Duration,
    /// Pause between successive WHOIS probes.
    pub whois_delay: Duration,
    /// Upper bound on a single WHOIS query.
    pub whois_timeout: Duration,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            tld: "com".to_string(),
            dns_delay: Duration::from_millis(100),
            whois_delay: Duration::from_millis(500),
            whois_timeout: Duration::from_secs(10),
        }
    }
}

impl VerifyConfig {
    /// Zero-delay policy for deterministic tests with fake probes.
    pub fn no_throttle() -> Self {
        Self {
            dns_delay: Duration::ZERO,
            whois_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Configuration for the word-combination generator.
///
/// An immutable value passed into the generation function; there is no
/// mutable word-list state behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Category table names to draw words from.
    pub categories: Vec<String>,
    /// Extra user-supplied words, already lower-cased.
    pub custom_words: Vec<String>,
    /// Maximum words composed into one name (2 or 3).
    pub words_per_name: usize,
    /// Also attach numbers to sampled words.
    pub include_numbers: bool,
    /// Upper bound on the candidate set handed to verification.
    pub max_candidates: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            categories: vec!["tech".to_string(), "business".to_string()],
            custom_words: Vec::new(),
            words_per_name: 2,
            include_numbers: false,
            max_candidates: 50,
        }
    }
}

/// Configuration for the AI suggestion client.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub description: String,
    pub count: usize,
    pub temperature: f32,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4.1-mini".to_string(),
            api_key: String::new(),
            base_url: None,
            description: String::new(),
            count: 20,
            temperature: 0.7,
        }
    }
}

/// Probe counters for one pipeline instance.
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    dns_probes: AtomicU64,
    whois_probes: AtomicU64,
    unclear_results: AtomicU64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_dns_probe(&self) {
        self.dns_probes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_whois_probe(&self) {
        self.whois_probes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unclear(&self) {
        self.unclear_results.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            dns_probes: self.dns_probes.load(Ordering::Relaxed),
            whois_probes: self.whois_probes.load(Ordering::Relaxed),
            unclear_results: self.unclear_results.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the pipeline counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub dns_probes: u64,
    pub whois_probes: u64,
    pub unclear_results: u64,
}
