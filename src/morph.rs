// Morphological normalization — maps inflected forms to dictionary form.
//
// The pipeline treats normalization as a pluggable collaborator with the
// contract "given a cleaned token, return its normal form". The default
// implementation is a lemma-dictionary lookup; unknown forms fall back to
// their lowercased surface form.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Normalizes one token to its dictionary (normal) form.
pub trait Morph: Send + Sync {
    fn normal_form(&self, token: &str) -> String;
}

/// Lemma-dictionary normalizer.
///
/// The file format is one `form<TAB>lemma` pair per line; lookups are
/// case-insensitive on the form side. The empty dictionary is a valid
/// normalizer that only lowercases.
pub struct DictionaryMorph {
    lemmas: HashMap<String, String>,
}

impl DictionaryMorph {
    pub fn empty() -> Self {
        Self {
            lemmas: HashMap::new(),
        }
    }

    /// Build from in-memory pairs. Used by tests to inject exact mappings.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let lemmas = pairs
            .into_iter()
            .map(|(form, lemma)| (form.into().to_lowercase(), lemma.into()))
            .collect();
        Self { lemmas }
    }

    /// Load a lemma dictionary from a tab-separated file. Lines without a
    /// tab are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lemma dictionary {}", path.display()))?;

        let mut lemmas = HashMap::new();
        for line in raw.lines() {
            if let Some((form, lemma)) = line.split_once('\t') {
                let form = form.trim().to_lowercase();
                let lemma = lemma.trim();
                if !form.is_empty() && !lemma.is_empty() {
                    lemmas.insert(form, lemma.to_string());
                }
            }
        }

        info!(forms = lemmas.len(), "Loaded lemma dictionary");
        Ok(Self { lemmas })
    }
}

impl Morph for DictionaryMorph {
    fn normal_form(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        self.lemmas.get(&lower).cloned().unwrap_or(lower)
    }
}
