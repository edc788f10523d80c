// Unit tests for the text pipeline and lexicon loading.
//
// Covers the scorer's boundary behavior, the short-token retention rule,
// and word-list round-trips through the filesystem loader.

use std::fs;

use jaundice::lexicon::Lexicon;
use jaundice::morph::DictionaryMorph;
use jaundice::text::{jaundice_rate, split_into_words};

// ============================================================
// Scorer — boundaries and correctness
// ============================================================

#[test]
fn empty_words_score_zero_for_any_lexicon() {
    assert_eq!(jaundice_rate(&[], &Lexicon::from_words(["беда"])), 0.0);
    assert_eq!(jaundice_rate(&[], &Lexicon::from_words(Vec::<String>::new())), 0.0);
}

#[test]
fn half_matches_score_fifty() {
    let words: Vec<String> = ["a", "b", "a", "c"].iter().map(|w| w.to_string()).collect();
    assert_eq!(jaundice_rate(&words, &Lexicon::from_words(["a"])), 50.0);
}

#[test]
fn no_matches_score_zero() {
    let words: Vec<String> = ["мир", "дом"].iter().map(|w| w.to_string()).collect();
    assert_eq!(jaundice_rate(&words, &Lexicon::from_words(["беда"])), 0.0);
}

#[test]
fn all_matches_score_hundred() {
    let words: Vec<String> = ["беда", "беда"].iter().map(|w| w.to_string()).collect();
    assert_eq!(jaundice_rate(&words, &Lexicon::from_words(["беда"])), 100.0);
}

#[test]
fn scorer_has_no_hidden_state() {
    let words: Vec<String> = ["беда", "мир", "крах"].iter().map(|w| w.to_string()).collect();
    let charged = Lexicon::from_words(["беда", "крах"]);
    assert_eq!(jaundice_rate(&words, &charged), jaundice_rate(&words, &charged));
}

// ============================================================
// Tokenizer — retention rule
// ============================================================

#[tokio::test]
async fn negation_particle_is_retained() {
    let morph = DictionaryMorph::empty();
    let words = split_into_words(&morph, "не хочу").await;
    assert_eq!(words, ["не", "хочу"]);
}

#[tokio::test]
async fn other_short_tokens_are_dropped() {
    let morph = DictionaryMorph::empty();
    let words = split_into_words(&morph, "он из во на по мир").await;
    assert_eq!(words, ["мир"]);
}

#[tokio::test]
async fn retention_applies_to_the_normal_form() {
    // The surface form is long enough, but its lemma is a short
    // preposition-like word and must be dropped.
    let morph = DictionaryMorph::from_pairs([("изо", "из")]);
    let words = split_into_words(&morph, "изо всех").await;
    assert_eq!(words, ["всех"]);
}

// ============================================================
// Lexicon — file round-trip
// ============================================================

#[test]
fn word_list_survives_a_filesystem_round_trip() {
    let path = std::env::temp_dir().join(format!("jaundice_words_{}.txt", std::process::id()));
    fs::write(&path, "слово1\nслово2\n").unwrap();

    let lexicon = Lexicon::load(&path).unwrap();
    assert_eq!(lexicon.words(), ["слово1", "слово2"]);
    assert_eq!(lexicon.len(), 2);
    assert!(lexicon.contains("слово1"));
    assert!(lexicon.contains("слово2"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_word_list_is_an_error() {
    let path = std::env::temp_dir().join("jaundice_words_definitely_missing.txt");
    assert!(Lexicon::load(&path).is_err());
}
