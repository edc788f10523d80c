// Jaundice: charged-vocabulary scoring for news articles.
//
// This is the library root. Each module is one stage of the article
// processing pipeline or one of its collaborators.

pub mod config;
pub mod fetch;
pub mod lexicon;
pub mod morph;
pub mod output;
pub mod pipeline;
pub mod sanitize;
pub mod text;
pub mod web;
