use std::collections::HashMap;

use serde::Serialize;

/// One distinct word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub text: String,
    pub weight: u32,
}

impl Word {
    pub fn new(text: impl Into<String>, weight: u32) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// Frequency table that remembers first-seen order.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: HashMap<String, usize>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_occurrence(&mut self, text: &str) {
        if let Some(&idx) = self.index.get(text) {
            self.words[idx].weight += 1;
            return;
        }
        self.index.insert(text.to_string(), self.words.len());
        self.words.push(Word::new(text, 1));
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_words_once() {
        let mut list = WordList::new();
        for text in ["rust", "cloud", "rust", "tag", "rust", "cloud"] {
            list.add_occurrence(text);
        }
        assert_eq!(
            list.into_words(),
            vec![Word::new("rust", 3), Word::new("cloud", 2), Word::new("tag", 1)]
        );
    }
}
