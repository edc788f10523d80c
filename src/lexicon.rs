// Charged-word lexicons — the matching sets for jaundice scoring.
//
// A lexicon is loaded once at startup from a newline-delimited UTF-8 word
// list and shared read-only across every concurrent task in a batch.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// An immutable set of normalized charged words.
///
/// Keeps both the file order (for display and reload fidelity) and a hash
/// set index for O(1) membership checks during scoring.
pub struct Lexicon {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from an iterator of words. Blank entries are
    /// skipped; a duplicate keeps its first position.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut index = HashSet::new();
        for word in words {
            let word = word.into();
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            if index.insert(word.to_string()) {
                ordered.push(word.to_string());
            }
        }
        Self {
            words: ordered,
            index,
        }
    }

    /// Load a lexicon from a newline-delimited UTF-8 word list.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        Ok(Self::from_words(raw.lines()))
    }

    /// Exact-equality membership test against the charged set.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// The words in their original file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The positive and negative lexicons for one run, loaded together before
/// any task starts and never mutated afterward.
pub struct Lexicons {
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl Lexicons {
    pub fn load(positive_path: &Path, negative_path: &Path) -> Result<Self> {
        let positive = Lexicon::load(positive_path)?;
        let negative = Lexicon::load(negative_path)?;
        info!(
            positive = positive.len(),
            negative = negative.len(),
            "Loaded charged-word lexicons"
        );
        Ok(Self { positive, negative })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_file_order() {
        let lexicon = Lexicon::from_words(["слово2", "слово1", "слово3"]);
        assert_eq!(lexicon.words(), ["слово2", "слово1", "слово3"]);
    }

    #[test]
    fn skips_blank_lines_and_duplicates() {
        let lexicon = Lexicon::from_words(["беда", "", "  ", "беда", "крах"]);
        assert_eq!(lexicon.words(), ["беда", "крах"]);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn membership_is_exact() {
        let lexicon = Lexicon::from_words(["беда"]);
        assert!(lexicon.contains("беда"));
        assert!(!lexicon.contains("бед"));
        assert!(!lexicon.contains("Беда"));
    }
}
