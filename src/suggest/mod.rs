//! AI candidate suggestions
//!
//! Optional collaborator: one chat-completion call against an
//! OpenAI-compatible endpoint, parsed as newline-delimited bare names.
//! Every failure mode yields an empty suggestion set; the rest of the
//! program never depends on this succeeding.

use crate::error::{DomainScoutError, Result};
use crate::types::SuggestConfig;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::time::Duration;

/// Client for the suggestion endpoint.
pub struct SuggestionClient {
    client: Client,
    config: SuggestConfig,
}

impl SuggestionClient {
    pub fn new(config: SuggestConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(DomainScoutError::config("API key is required for AI suggestions"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DomainScoutError::network(e.to_string(), None, None))?;

        Ok(Self { client, config })
    }

    /// Build a client from `OPENAI_API_KEY` / `OPENAI_BASE_URL` /
    /// `OPENAI_MODEL`, or `None` when no credential is set.
    pub fn from_env(description: &str, count: usize) -> Option<Self> {
        let api_key = env::var("OPENAI_API_KEY").ok()?;
        let config = SuggestConfig {
            api_key,
            base_url: env::var("OPENAI_BASE_URL").ok(),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string()),
            description: description.to_string(),
            count,
            ..SuggestConfig::default()
        };
        Self::new(config).ok()
    }

    /// Fetch suggestions; failures degrade to an empty set.
    pub async fn suggest(&self) -> Vec<String> {
        match self.request().await {
            Ok(names) => {
                tracing::info!(count = names.len(), "AI suggestions received");
                names
            }
            Err(e) => {
                tracing::warn!(error = %e, "AI suggestion call failed, continuing without");
                Vec::new()
            }
        }
    }

    async fn request(&self) -> Result<Vec<String>> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You suggest short brandable business names. Reply with one bare name per line, lowercase, no dots, no numbering, no commentary.".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!(
                        "Suggest {} domain name candidates (without any suffix) for: {}",
                        self.config.count, self.config.description
                    ),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: 1000,
        };

        let url = self.build_url("/chat/completions");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainScoutError::network(
                    format!("Failed to connect to API: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(DomainScoutError::network(
                format!("Suggestion request failed ({})", status),
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainScoutError::parse(e.to_string(), None))?;

        let content = chat_response
            .choices
            .first()
            .ok_or_else(|| DomainScoutError::internal("No choices in suggestion response"))?
            .message
            .content
            .clone();

        parse_suggestions(&content)
    }

    /// Intelligently constructs the full API URL
    fn build_url(&self, endpoint: &str) -> String {
        let base_url = self
            .config
            .base_url
            .as_deref()
            .unwrap_or("https://api.openai.com/v1")
            .trim_end_matches('/');
        if base_url.ends_with("/v1") {
            format!("{}{}", base_url, endpoint)
        } else {
            format!("{}/v1{}", base_url, endpoint)
        }
    }
}

/// Parse newline-delimited candidate names from free-text output.
///
/// Non-alphanumeric characters are stripped; entries shorter than 3
/// characters are discarded; order is preserved, duplicates dropped.
pub fn parse_suggestions(content: &str) -> Result<Vec<String>> {
    let cleaner = Regex::new(r"[^a-z0-9]")
        .map_err(|e| DomainScoutError::internal(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for line in content.lines() {
        let cleaned = cleaner.replace_all(&line.to_lowercase(), "").into_owned();
        if cleaned.len() >= 3 && seen.insert(cleaned.clone()) {
            names.push(cleaned);
        }
    }
    Ok(names)
}

// Chat-completion wire format
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_and_lowercases() {
        let names = parse_suggestions("1. Blue-Wave\n2. SkyForge!\n").unwrap();
        // Digits are alphanumerics, so list numbering survives the strip.
        assert_eq!(names, vec!["1bluewave", "2skyforge"]);
    }

    #[test]
    fn test_parse_discards_short_entries() {
        let names = parse_suggestions("ab\nxyz\n- -\n").unwrap();
        assert_eq!(names, vec!["xyz"]);
    }

    #[test]
    fn test_parse_dedups_preserving_order() {
        let names = parse_suggestions("foo1\nbar2\nFOO1\n").unwrap();
        assert_eq!(names, vec!["foo1", "bar2"]);
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_suggestions("").unwrap().is_empty());
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = SuggestConfig::default();
        assert!(SuggestionClient::new(config).is_err());
    }
}
