//! Domain Scout - domain name brainstorming and availability verification
//!
//! Generates candidate names from combinable word lists and verifies them
//! with a two-stage pipeline: a cheap DNS pre-filter followed by a WHOIS
//! confirmation pass over the survivors.

pub mod error;
pub mod generate;
pub mod probe;
pub mod suggest;
pub mod types;
pub mod verify;

// Re-export commonly used types
pub use error::{DomainScoutError, Result};
pub use types::{
    GeneratorConfig, MetricsSnapshot, PipelineMetrics, ProbeStatus, SuggestConfig,
    VerificationMethod, VerificationRecord, VerifyConfig,
};

// Re-export main functionality
pub use suggest::SuggestionClient;
pub use verify::{VerificationPipeline, VerifyProgress, VerifyStage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
