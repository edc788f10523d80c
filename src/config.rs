use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Per-article deadline applied when JAUNDICE_TIMEOUT_SECS is unset.
const DEFAULT_TIMEOUT_SECS: f64 = 3.0;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// field has a default, so the CLI works out of the repository checkout
/// with no environment at all.
pub struct Config {
    /// Newline-delimited word list of positive charged words.
    pub positive_words_path: PathBuf,
    /// Newline-delimited word list of negative charged words.
    pub negative_words_path: PathBuf,
    /// Optional `form<TAB>lemma` dictionary for the morphological
    /// normalizer. When unset, normalization degrades to lowercasing.
    pub lemma_dict_path: Option<PathBuf>,
    /// Wall-clock budget for one article's fetch-through-score pipeline.
    pub process_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let process_timeout = match env::var("JAUNDICE_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: f64 = raw
                    .parse()
                    .with_context(|| format!("Invalid JAUNDICE_TIMEOUT_SECS value: {raw}"))?;
                Duration::from_secs_f64(secs)
            }
            Err(_) => Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            positive_words_path: env::var("JAUNDICE_POSITIVE_WORDS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./lexicons/positive_words.txt")),
            negative_words_path: env::var("JAUNDICE_NEGATIVE_WORDS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./lexicons/negative_words.txt")),
            lemma_dict_path: env::var("JAUNDICE_LEMMA_DICT").ok().map(PathBuf::from),
            process_timeout,
        })
    }
}
