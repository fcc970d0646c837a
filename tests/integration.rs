//! Integration tests for domain-scout

use async_trait::async_trait;
use domain_scout::{
    error::{DomainScoutError, Result},
    probe::{DnsProbe, WhoisProbe},
    suggest::parse_suggestions,
    types::{GeneratorConfig, ProbeStatus, VerificationMethod, VerifyConfig},
    verify::{VerificationPipeline, VerifyStage},
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Scripted DNS probe: names in `taken` resolve, everything else does not.
struct ScriptedDns {
    taken: Vec<String>,
}

#[async_trait]
impl DnsProbe for ScriptedDns {
    async fn lookup(&self, fqdn: &str) -> Result<bool> {
        Ok(!self.taken.iter().any(|t| fqdn == t))
    }
}

/// Scripted WHOIS probe returning a fixed status and counting calls.
struct ScriptedWhois {
    status: ProbeStatus,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl WhoisProbe for ScriptedWhois {
    async fn lookup(&self, _fqdn: &str) -> Result<ProbeStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.status)
    }
}

fn scripted_pipeline(
    taken: &[&str],
    whois_status: ProbeStatus,
) -> (VerificationPipeline, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline = VerificationPipeline::with_probes(
        Box::new(ScriptedDns {
            taken: taken.iter().map(|s| s.to_string()).collect(),
        }),
        Box::new(ScriptedWhois {
            status: whois_status,
            calls: Arc::clone(&calls),
        }),
        VerifyConfig::no_throttle(),
    );
    (pipeline, calls)
}

#[tokio::test]
async fn test_pipeline_creation() {
    let _pipeline = VerificationPipeline::new(VerifyConfig::default());
}

#[tokio::test]
async fn test_two_stage_survivor_selection() {
    let (pipeline, whois_calls) =
        scripted_pipeline(&["takenexample.com"], ProbeStatus::Available);
    let candidates = vec!["takenexample".to_string(), "freebie123xyz".to_string()];

    let records = pipeline.verify(&candidates).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].domain, "takenexample");
    assert_eq!(records[0].full_domain, "takenexample.com");
    assert!(!records[0].dns_available);
    assert_eq!(records[0].whois_status, None);
    assert_eq!(records[0].method, VerificationMethod::DnsOnly);

    assert!(records[1].dns_available);
    assert!(records[1].available);
    assert_eq!(records[1].method, VerificationMethod::DnsWhois);

    // Only freebie123xyz entered stage 2.
    assert_eq!(whois_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unclear_whois_keeps_stage_one_verdict() {
    let (pipeline, _) = scripted_pipeline(&[], ProbeStatus::Unclear);
    let records = pipeline.verify(&["slowpoke".to_string()]).await;

    assert!(records[0].available);
    assert_eq!(records[0].whois_status, Some(ProbeStatus::Unclear));
    assert_eq!(records[0].method, VerificationMethod::DnsWhoisUnclear);
}

#[tokio::test]
async fn test_empty_batch_runs_no_probes() {
    let (pipeline, whois_calls) = scripted_pipeline(&[], ProbeStatus::Available);
    let records = pipeline.verify(&[]).await;

    assert!(records.is_empty());
    assert_eq!(whois_calls.load(Ordering::SeqCst), 0);
    assert_eq!(pipeline.metrics().snapshot().dns_probes, 0);
}

#[tokio::test]
async fn test_progress_events_cover_both_stages() {
    let (pipeline, _) = scripted_pipeline(&["busy.com"], ProbeStatus::Taken);
    let candidates = vec!["busy".to_string(), "open".to_string()];

    let dns_events = Arc::new(AtomicUsize::new(0));
    let whois_events = Arc::new(AtomicUsize::new(0));
    let (d, w) = (Arc::clone(&dns_events), Arc::clone(&whois_events));

    pipeline
        .verify_with_progress(&candidates, |p| {
            match p.stage {
                VerifyStage::Dns => d.fetch_add(1, Ordering::SeqCst),
                VerifyStage::Whois => w.fetch_add(1, Ordering::SeqCst),
            };
        })
        .await;

    assert_eq!(dns_events.load(Ordering::SeqCst), 2);
    assert_eq!(whois_events.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_custom_tld_suffix() {
    let mut config = VerifyConfig::no_throttle();
    config.tld = "io".to_string();
    let pipeline = VerificationPipeline::with_probes(
        Box::new(ScriptedDns { taken: Vec::new() }),
        Box::new(ScriptedWhois {
            status: ProbeStatus::Available,
            calls: Arc::new(AtomicUsize::new(0)),
        }),
        config,
    );

    let records = pipeline.verify(&["tool".to_string()]).await;
    assert_eq!(records[0].full_domain, "tool.io");
}

#[test]
fn test_generator_config_defaults() {
    let config = GeneratorConfig::default();
    assert_eq!(config.words_per_name, 2);
    assert!(!config.include_numbers);
    assert_eq!(config.max_candidates, 50);
    assert!(config.categories.contains(&"tech".to_string()));
}

#[test]
fn test_verify_config_timeout_default() {
    let config = VerifyConfig::default();
    assert_eq!(config.whois_timeout, Duration::from_secs(10));
}

#[test]
fn test_suggestion_parsing_contract() {
    let content = "nimbuscart\nswift-pay\nio\n";
    let names = parse_suggestions(content).expect("static pattern");
    assert_eq!(names, vec!["nimbuscart", "swiftpay"]);
}

#[test]
fn test_error_handling() {
    let error = DomainScoutError::validation("test error".to_string());
    assert!(error.to_string().contains("test error"));

    let error = DomainScoutError::config("config error".to_string());
    assert!(error.to_string().contains("config error"));

    let error = DomainScoutError::probe("foo.com", "unreachable", Some("dns".to_string()));
    assert!(error.to_string().contains("foo.com"));
}

#[test]
fn test_library_initialization() {
    let result = domain_scout::init();
    assert!(result.is_ok());
}

#[test]
fn test_help_output() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::cargo_bin("domain-scout")
        .expect("binary builds")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));
}
