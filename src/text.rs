// Text pipeline — tokenization, normalization filtering, jaundice scoring.
//
// Split on whitespace, strip punctuation, reduce each token to dictionary
// form, drop short function words (keeping the negation particle), then
// score the share of charged words among what survived.

use crate::lexicon::Lexicon;
use crate::morph::Morph;

/// Punctuation and filler sequences removed from every raw token before
/// the residual leading/trailing punctuation trim.
const FILLER_SEQUENCES: &[&str] = &[
    "«", "»", ".", ",", " - ", "!", "?", "(", ")", "[", "]", "\"", "'", ":", ";", "…", "...",
];

/// Two characters long but semantically load-bearing, so it survives the
/// short-token filter that drops prepositions and particles.
const NEGATION_PARTICLE: &str = "не";

/// Tokens processed between scheduler yield points. A long article would
/// otherwise hold the worker through the whole normalization pass, starving
/// sibling tasks and keeping the per-task deadline from firing.
const YIELD_INTERVAL: usize = 64;

fn clean_token(raw: &str) -> String {
    let mut token = raw.to_string();
    for seq in FILLER_SEQUENCES {
        token = token.replace(seq, "");
    }
    token
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

/// Split raw article text into normalized words.
///
/// Input order and duplicates are preserved. A word survives the filter
/// when its normal form is longer than two characters or equals the
/// negation particle.
pub async fn split_into_words(morph: &dyn Morph, text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for (i, raw) in text.split_whitespace().enumerate() {
        let cleaned = clean_token(raw);
        if !cleaned.is_empty() {
            let normal = morph.normal_form(&cleaned);
            if normal.chars().count() > 2 || normal == NEGATION_PARTICLE {
                words.push(normal);
            }
        }
        if (i + 1) % YIELD_INTERVAL == 0 {
            tokio::task::yield_now().await;
        }
    }
    words
}

/// Percentage of `words` found in the charged lexicon, rounded to two
/// decimal places. An empty word list scores 0.0 outright rather than
/// dividing by zero.
pub fn jaundice_rate(words: &[String], charged: &Lexicon) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let found = words.iter().filter(|word| charged.contains(word)).count();
    round2(found as f64 / words.len() as f64 * 100.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
