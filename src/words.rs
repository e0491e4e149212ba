use crate::ir::{Word, WordList};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’-][\p{L}\p{N}]+)*").expect("valid word regex"));

const DEFAULT_STOP_WORDS: [&str; 32] = [
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had", "has", "he",
    "her", "his", "i", "in", "is", "it", "its", "of", "on", "or", "she", "that", "the", "this",
    "to", "was", "with", "you",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordOrder {
    /// Heaviest first; equal weights keep first-seen order.
    Frequency,
    /// Seeded shuffle.
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordOptions {
    /// Tokenize and normalize instead of taking each line verbatim.
    pub validate: bool,
    pub order: WordOrder,
    pub seed: u64,
    pub min_length: usize,
    pub stop_words: Vec<String>,
    pub max_words: Option<usize>,
}

impl Default for WordOptions {
    fn default() -> Self {
        Self {
            validate: false,
            order: WordOrder::Frequency,
            seed: 0,
            min_length: 3,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            max_words: None,
        }
    }
}

pub fn read_words(path: &Path, options: &WordOptions) -> Result<Vec<Word>> {
    if path.as_os_str().is_empty() {
        return Err(anyhow::anyhow!("Word file name can not be empty"));
    }
    if !path.exists() {
        return Err(anyhow::anyhow!("Word file {} does not exist", path.display()));
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word file {}", path.display()))?;
    Ok(collect_words(&contents, options))
}

/// Counts word frequencies in `text` and orders them for packing.
pub fn collect_words(text: &str, options: &WordOptions) -> Vec<Word> {
    let mut list = WordList::new();
    if options.validate {
        for token in WORD_RE.find_iter(text) {
            let word = token.as_str().to_lowercase();
            if word.chars().count() < options.min_length
                || options.stop_words.iter().any(|stop| *stop == word)
            {
                continue;
            }
            list.add_occurrence(&word);
        }
    } else {
        for line in text.lines() {
            let word = line.trim();
            if !word.is_empty() {
                list.add_occurrence(word);
            }
        }
    }

    let mut words = list.into_words();
    match options.order {
        WordOrder::Frequency => words.sort_by(|a, b| b.weight.cmp(&a.weight)),
        WordOrder::Random => {
            let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
            words.shuffle(&mut rng);
        }
    }
    if let Some(max) = options.max_words {
        words.truncate(max);
    }
    tracing::debug!(distinct = words.len(), order = ?options.order, "collected words");
    words
}
