//! Candidate name generation
//!
//! Combines category word tables into bare candidate names. Generation is a
//! pure function of the passed-in config and RNG; there is no word-list
//! state to mutate between calls.

pub mod words;

use crate::types::GeneratorConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Sample sizes bounding the quadratic/cubic combination steps.
const THREE_WORD_SAMPLE: usize = 20;
const SUFFIX_SAMPLE: usize = 10;
const NUMBER_SAMPLE: usize = 15;

/// Union of the selected category tables and any custom words, deduplicated.
pub fn word_list(config: &GeneratorConfig) -> Vec<String> {
    let mut set = BTreeSet::new();

    for category in &config.categories {
        if let Some(table) = words::category_words(category) {
            set.extend(table.iter().map(|w| w.to_string()));
        }
    }
    set.extend(config.custom_words.iter().cloned());

    set.into_iter().collect()
}

/// Parse a comma-separated custom word string into clean lowercase words.
pub fn parse_custom_words(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Generate candidate combinations from the configured word lists.
///
/// The two-word pass is exhaustive; the three-word, suffix and number
/// passes work over bounded random samples so the output stays usable.
pub fn combine<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<String> {
    let word_list = word_list(config);
    let mut names: BTreeSet<String> = BTreeSet::new();

    // Two-word combinations
    if config.words_per_name >= 2 {
        for (i, first) in word_list.iter().enumerate() {
            for second in word_list.iter().skip(i + 1) {
                names.insert(format!("{}{}", first, second));
            }
        }
    }

    // Three-word combinations with connectors, over a sample
    if config.words_per_name >= 3 {
        let sample: Vec<&String> = word_list
            .choose_multiple(rng, THREE_WORD_SAMPLE.min(word_list.len()))
            .collect();
        for first in &sample {
            for connector in &words::CONNECTORS[..3] {
                for second in &sample {
                    if first != second {
                        names.insert(format!("{}{}{}", first, connector, second));
                    }
                }
            }
        }
    }

    // Suffix attachment over a sample
    let suffix_base: Vec<&String> = word_list
        .choose_multiple(rng, SUFFIX_SAMPLE.min(word_list.len()))
        .collect();
    for word in &suffix_base {
        for suffix in words::SUFFIXES {
            names.insert(format!("{}{}", word, suffix));
        }
    }

    // Number attachment when requested
    if config.include_numbers {
        let number_base: Vec<&String> = word_list
            .choose_multiple(rng, NUMBER_SAMPLE.min(word_list.len()))
            .collect();
        for word in &number_base {
            for number in words::NUMBERS {
                names.insert(format!("{}{}", word, number));
                names.insert(format!("{}{}", number, word));
            }
        }
    }

    names.into_iter().collect()
}

/// Pick at most `max` candidates from the generated set, uniformly.
pub fn sample<R: Rng>(candidates: Vec<String>, max: usize, rng: &mut R) -> Vec<String> {
    if candidates.len() <= max {
        return candidates;
    }
    candidates
        .choose_multiple(rng, max)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(categories: &[&str]) -> GeneratorConfig {
        GeneratorConfig {
            categories: categories.iter().map(|s| s.to_string()).collect(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_word_list_unions_and_dedups() {
        // "tech" appears in both tables; the union must hold it once.
        let list = word_list(&config(&["tech", "data"]));
        assert_eq!(list.iter().filter(|w| w.as_str() == "tech").count(), 1);
        assert!(list.contains(&"analytics".to_string()));
        assert!(list.contains(&"software".to_string()));
    }

    #[test]
    fn test_custom_words_included() {
        let mut cfg = config(&["tech"]);
        cfg.custom_words = vec!["zorblex".to_string()];
        let list = word_list(&cfg);
        assert!(list.contains(&"zorblex".to_string()));
    }

    #[test]
    fn test_parse_custom_words() {
        let words = parse_custom_words("  Foo, bar ,,BAZ ");
        assert_eq!(words, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_two_word_combinations_present() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cfg = config(&[]);
        cfg.custom_words = vec!["alpha".to_string(), "beta".to_string()];
        let names = combine(&cfg, &mut rng);

        // Exactly one ordering of each unordered pair, plus suffix variants.
        assert!(names.contains(&"alphabeta".to_string()));
        assert!(!names.is_empty());
        assert!(names.iter().any(|n| n.starts_with("alpha") && n.len() > "alpha".len()));
    }

    #[test]
    fn test_three_word_connectors() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cfg = config(&[]);
        cfg.custom_words = vec!["sun".to_string(), "moon".to_string()];
        cfg.words_per_name = 3;
        let names = combine(&cfg, &mut rng);

        assert!(names.contains(&"sunandmoon".to_string()) || names.contains(&"moonandsun".to_string()));
    }

    #[test]
    fn test_numbers_only_when_enabled() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cfg = config(&[]);
        cfg.custom_words = vec!["pay".to_string()];

        let without = combine(&cfg, &mut rng);
        assert!(!without.iter().any(|n| n.contains("360")));

        cfg.include_numbers = true;
        let with = combine(&cfg, &mut rng);
        assert!(with.contains(&"pay360".to_string()));
        assert!(with.contains(&"360pay".to_string()));
    }

    #[test]
    fn test_sample_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates: Vec<String> = (0..100).map(|i| format!("name{}", i)).collect();

        let picked = sample(candidates.clone(), 10, &mut rng);
        assert_eq!(picked.len(), 10);
        assert!(picked.iter().all(|p| candidates.contains(p)));

        let all = sample(candidates.clone(), 500, &mut rng);
        assert_eq!(all.len(), 100);
    }

    #[test]
    fn test_unknown_category_ignored() {
        let names = word_list(&config(&["nonsense"]));
        assert!(names.is_empty());
    }
}
