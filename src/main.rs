//! Domain Scout - domain name brainstorming and availability verification
//!
//! Interactive CLI: pick word categories, generate candidate names, then
//! verify them with the two-stage DNS + WHOIS pipeline.

use domain_scout::{
    generate::{self, words},
    suggest::SuggestionClient,
    types::{GeneratorConfig, VerificationRecord, VerifyConfig},
    verify::{VerificationPipeline, VerifyStage},
    Result,
};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, CustomType, MultiSelect, Select, Text};
use std::process;
use std::sync::atomic::Ordering;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = domain_scout::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    if let Err(e) = run_domain_scout().await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Main domain scout workflow
async fn run_domain_scout() -> Result<()> {
    println!("🌐 Domain Scout - name brainstorming and availability checking");
    println!("══════════════════════════════════════════════════════════════");
    println!();

    let config = prompt_generator_config()?;
    let mut rng = rand::thread_rng();

    println!(
        "🔧 Generating up to {} candidates from {} categories...",
        config.max_candidates,
        config.categories.len()
    );
    let mut candidates = generate::combine(&config, &mut rng);

    // Optionally blend in AI suggestions when a credential is configured.
    if let Some(client) = maybe_suggestion_client(&config)? {
        println!("🤖 Fetching AI suggestions...");
        let suggestions = client.suggest().await;
        if suggestions.is_empty() {
            println!("   (no AI suggestions, continuing with word combinations)");
        } else {
            println!("   {} AI suggestions blended in", suggestions.len());
            candidates.extend(suggestions);
            candidates.sort();
            candidates.dedup();
        }
    }

    let candidates = generate::sample(candidates, config.max_candidates, &mut rng);
    if candidates.is_empty() {
        println!("❌ No candidates generated. Select at least one category or add custom words.");
        return Ok(());
    }

    println!("✅ Generated {} unique candidates", candidates.len());
    println!();
    println!("📝 Sample candidates:");
    for candidate in candidates.iter().take(5) {
        println!("  • {}.com", candidate);
    }
    println!();

    let check = Confirm::new(&format!(
        "Check availability for all {} candidates?",
        candidates.len()
    ))
    .with_default(true)
    .prompt()?;

    if !check {
        println!();
        println!("📋 Generated candidates (first 20):");
        for candidate in candidates.iter().take(20) {
            println!("  • {}.com", candidate);
        }
        if candidates.len() > 20 {
            println!("  ... and {} more", candidates.len() - 20);
        }
        return Ok(());
    }

    let records = run_verification(&candidates).await;
    render_results(&records)?;

    println!();
    println!("✨ Domain scouting complete!");
    Ok(())
}

/// Collect generation settings interactively.
fn prompt_generator_config() -> Result<GeneratorConfig> {
    let categories = MultiSelect::new(
        "Select word categories:",
        words::CATEGORY_NAMES.iter().map(|s| s.to_string()).collect(),
    )
    .with_default(&[1, 2])
    .prompt()?;

    let custom_input = Text::new("Add custom words (comma-separated, optional):")
        .with_default("")
        .prompt()?;
    let custom_words = generate::parse_custom_words(&custom_input);

    let words_per_name: usize = Select::new("Maximum words per name:", vec![2, 3]).prompt()?;

    let include_numbers = Confirm::new("Include numbers in names?")
        .with_default(false)
        .prompt()?;

    let max_candidates = CustomType::<usize>::new("Maximum candidates to generate:")
        .with_default(50)
        .prompt()?
        .clamp(10, 500);

    let categories = if categories.is_empty() {
        GeneratorConfig::default().categories
    } else {
        categories
    };

    Ok(GeneratorConfig {
        categories,
        custom_words,
        words_per_name,
        include_numbers,
        max_candidates,
    })
}

/// Build the suggestion client when a credential is configured and the
/// user wants it.
fn maybe_suggestion_client(config: &GeneratorConfig) -> Result<Option<SuggestionClient>> {
    if std::env::var("OPENAI_API_KEY").is_err() {
        return Ok(None);
    }

    let wanted = Confirm::new("Blend in AI name suggestions?")
        .with_default(false)
        .prompt()?;
    if !wanted {
        return Ok(None);
    }

    let description = format!("a project themed around: {}", config.categories.join(", "));
    Ok(SuggestionClient::from_env(&description, 20))
}

/// Run the two-stage pipeline with a progress bar and ctrl-c cancellation.
async fn run_verification(candidates: &[String]) -> Vec<VerificationRecord> {
    println!();
    println!("🔍 Checking domain availability...");

    let pipeline = VerificationPipeline::new(VerifyConfig::default());

    let cancel = pipeline.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.store(true, Ordering::Relaxed);
        }
    });

    let bar = ProgressBar::new(candidates.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{msg:12} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("DNS check");

    let records = pipeline
        .verify_with_progress(candidates, |progress| {
            bar.set_length(progress.total as u64);
            bar.set_position(progress.current as u64);
            bar.set_message(match progress.stage {
                VerifyStage::Dns => "DNS check",
                VerifyStage::Whois => "WHOIS check",
            });
        })
        .await;
    bar.finish_and_clear();

    if records.len() < candidates.len() {
        println!(
            "⚠️  Interrupted: {} of {} candidates checked",
            records.len(),
            candidates.len()
        );
    }

    records
}

/// Render the verdict summary and per-domain detail.
fn render_results(records: &[VerificationRecord]) -> Result<()> {
    let available: Vec<&VerificationRecord> = records.iter().filter(|r| r.available).collect();
    let taken: Vec<&VerificationRecord> = records.iter().filter(|r| !r.available).collect();

    println!();
    println!("📊 Results Summary:");
    println!("  • Total checked: {}", records.len());
    println!("  • Available: {}", available.len());
    println!("  • Taken: {}", taken.len());

    if !available.is_empty() {
        println!();
        println!("🎉 Available domains ({}):", available.len());
        for record in available.iter().take(20) {
            println!("  ✅ {}", record.full_domain);
            println!("     🔗 GoDaddy: {}", record.registrar_search_url());
            println!("     📋 Verified with: {}", record.method);
        }
        if available.len() > 20 {
            println!("  ... and {} more", available.len() - 20);
        }
    }

    if !taken.is_empty() {
        let show_taken = Confirm::new("Show taken domains?")
            .with_default(false)
            .prompt()?;
        if show_taken {
            println!();
            println!("❌ Taken domains (first 10):");
            for record in taken.iter().take(10) {
                println!("  ❌ {}", record.full_domain);
                println!("     🔗 GoDaddy: {}", record.registrar_search_url());
            }
        }
    }

    Ok(())
}

/// Print help information
fn print_help() {
    println!("🌐 Domain Scout - name brainstorming and availability checking");
    println!("══════════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-scout            # Interactive session");
    println!();
    println!("The interactive session walks through:");
    println!("    • Word category selection and custom words");
    println!("    • Combination settings (words per name, numbers, count)");
    println!("    • Two-stage availability checking (DNS pre-filter + WHOIS)");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    OPENAI_API_KEY     Enables optional AI name suggestions");
    println!("    OPENAI_BASE_URL    OpenAI-compatible endpoint override");
    println!("    OPENAI_MODEL       Suggestion model (default: gpt-4.1-mini)");
    println!();
    println!("NOTES:");
    println!("    • WHOIS checking uses the system `whois` command");
    println!("    • Probes are rate-limited on purpose; large batches take time");
    println!("    • Ctrl-C stops a batch and keeps the results so far");
}
