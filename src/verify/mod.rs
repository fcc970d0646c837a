//! Two-stage verification pipeline
//!
//! Stage 1 triages the whole candidate batch with cheap DNS lookups; only
//! the survivors reach the expensive, rate-limited WHOIS stage. The pauses
//! between probe calls are rate-limit courtesy toward the shared lookup
//! services and must not be removed even though they change no data.

use crate::probe::{DnsProbe, ResolverProbe, WhoisCommand, WhoisProbe};
use crate::types::{PipelineMetrics, ProbeStatus, VerificationMethod, VerificationRecord, VerifyConfig};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Which stage a progress event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStage {
    Dns,
    Whois,
}

/// Progress event emitted once per probed candidate.
#[derive(Debug, Clone)]
pub struct VerifyProgress {
    pub stage: VerifyStage,
    pub current: usize,
    pub total: usize,
}

/// Orchestrates the DNS and WHOIS probes over a candidate batch.
pub struct VerificationPipeline {
    dns: Box<dyn DnsProbe>,
    whois: Box<dyn WhoisProbe>,
    config: VerifyConfig,
    cancelled: Arc<AtomicBool>,
    metrics: Arc<PipelineMetrics>,
}

impl VerificationPipeline {
    /// Create a pipeline with the production probes.
    pub fn new(config: VerifyConfig) -> Self {
        let whois_timeout = config.whois_timeout;
        Self::with_probes(
            Box::new(ResolverProbe::new()),
            Box::new(WhoisCommand::new(whois_timeout)),
            config,
        )
    }

    /// Create a pipeline with injected probes (used by tests with fakes).
    pub fn with_probes(
        dns: Box<dyn DnsProbe>,
        whois: Box<dyn WhoisProbe>,
        config: VerifyConfig,
    ) -> Self {
        Self {
            dns,
            whois,
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(PipelineMetrics::new()),
        }
    }

    /// Flag that aborts the batch between candidates when set.
    ///
    /// Records produced before the abort point are returned unchanged.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Probe counters for this pipeline instance.
    pub fn metrics(&self) -> Arc<PipelineMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Verify a batch of bare candidate names, preserving input order.
    pub async fn verify(&self, candidates: &[String]) -> Vec<VerificationRecord> {
        self.verify_with_progress(candidates, |_| {}).await
    }

    /// Verify a batch, reporting per-candidate progress to `on_progress`.
    pub async fn verify_with_progress<F>(
        &self,
        candidates: &[String],
        on_progress: F,
    ) -> Vec<VerificationRecord>
    where
        F: Fn(&VerifyProgress),
    {
        let mut records: Vec<VerificationRecord> = Vec::with_capacity(candidates.len());
        let mut survivors: Vec<usize> = Vec::new();

        // Stage 1: DNS triage over the whole batch.
        for (i, candidate) in candidates.iter().enumerate() {
            if self.cancelled.load(Ordering::Relaxed) {
                tracing::info!(produced = records.len(), "verification cancelled during DNS stage");
                return records;
            }
            if i > 0 && !self.config.dns_delay.is_zero() {
                tokio::time::sleep(self.config.dns_delay).await;
            }

            let full_domain = format!("{}.{}", candidate, self.config.tld);
            self.metrics.record_dns_probe();
            let dns_available = match self.dns.lookup(&full_domain).await {
                Ok(v) => v,
                Err(e) => {
                    // One bad candidate never loses the batch; a failed
                    // probe keeps the available bias and moves on.
                    tracing::warn!(domain = %full_domain, error = %e, "DNS probe error, treating as available");
                    true
                }
            };

            if dns_available {
                survivors.push(i);
            }

            records.push(VerificationRecord {
                domain: candidate.clone(),
                full_domain,
                dns_available,
                whois_status: None,
                available: dns_available,
                method: VerificationMethod::DnsOnly,
                checked_at: Utc::now(),
            });

            on_progress(&VerifyProgress {
                stage: VerifyStage::Dns,
                current: i + 1,
                total: candidates.len(),
            });
        }

        // Stage 2: WHOIS confirmation for DNS survivors only.
        let survivor_total = survivors.len();
        for (pos, &i) in survivors.iter().enumerate() {
            if self.cancelled.load(Ordering::Relaxed) {
                tracing::info!(produced = records.len(), "verification cancelled during WHOIS stage");
                return records;
            }
            if pos > 0 && !self.config.whois_delay.is_zero() {
                tokio::time::sleep(self.config.whois_delay).await;
            }

            self.metrics.record_whois_probe();
            let status = match self.whois.lookup(&records[i].full_domain).await {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(domain = %records[i].full_domain, error = %e, "WHOIS probe error, result unclear");
                    ProbeStatus::Unclear
                }
            };

            let record = &mut records[i];
            record.whois_status = Some(status);
            record.checked_at = Utc::now();
            match status.as_bool() {
                Some(available) => {
                    record.available = available;
                    record.method = VerificationMethod::DnsWhois;
                }
                None => {
                    // Keep the stage-1 verdict but flag that it is a guess.
                    self.metrics.record_unclear();
                    record.method = VerificationMethod::DnsWhoisUnclear;
                }
            }

            on_progress(&VerifyProgress {
                stage: VerifyStage::Whois,
                current: pos + 1,
                total: survivor_total,
            });
        }

        let available = records.iter().filter(|r| r.available).count();
        tracing::info!(
            candidates = candidates.len(),
            survivors = survivor_total,
            available,
            "verification batch completed"
        );

        records
    }
}
