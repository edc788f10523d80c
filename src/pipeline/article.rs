// Per-article pipeline — fetch, sanitize, normalize, score, classify.
//
// Every invocation produces exactly one AnalysisResult. Failures never
// escape: each one folds into the result's terminal status, so a bad
// article cannot take its batch down with it.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::fetch::ArticleFetcher;
use crate::lexicon::Lexicons;
use crate::morph::Morph;
use crate::sanitize::{ArticleNotFound, Sanitizer};
use crate::text;

/// Terminal classification for one processed article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProcessingStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FETCH_ERROR")]
    FetchError,
    #[serde(rename = "PARSING_ERROR")]
    ParsingError,
    #[serde(rename = "TIMEOUT")]
    Timeout,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Ok => "OK",
            ProcessingStatus::FetchError => "FETCH_ERROR",
            ProcessingStatus::ParsingError => "PARSING_ERROR",
            ProcessingStatus::Timeout => "TIMEOUT",
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why one article's pipeline stopped short of a score. The deadline is
/// handled by the timeout wrapper around the pipeline, not listed here.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error(transparent)]
    Parsing(#[from] ArticleNotFound),
}

impl From<&ProcessError> for ProcessingStatus {
    fn from(error: &ProcessError) -> Self {
        match error {
            ProcessError::Fetch(_) => ProcessingStatus::FetchError,
            ProcessError::Parsing(_) => ProcessingStatus::ParsingError,
        }
    }
}

/// One entry of a batch response, produced for every requested URL
/// regardless of outcome. Built once at the end of a task and never
/// mutated afterward.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub address: String,
    pub words_count: usize,
    pub pos_rate: Option<f64>,
    pub neg_rate: Option<f64>,
    pub status: ProcessingStatus,
    /// Elapsed seconds across the successful path, rounded to two
    /// decimals; 0 when processing did not complete.
    pub time: f64,
}

impl AnalysisResult {
    fn failed(address: &str, status: ProcessingStatus) -> Self {
        Self {
            address: address.to_string(),
            words_count: 0,
            pos_rate: None,
            neg_rate: None,
            status,
            time: 0.0,
        }
    }
}

/// Run the full pipeline for a single URL under a deadline.
///
/// The deadline clock starts here, independent of sibling tasks and of
/// when the batch was submitted. Expiry abandons only this article's
/// remaining work.
pub async fn process_article(
    fetcher: &ArticleFetcher,
    sanitizer: &dyn Sanitizer,
    morph: &dyn Morph,
    lexicons: &Lexicons,
    url: &str,
    deadline: Duration,
) -> AnalysisResult {
    match tokio::time::timeout(deadline, analyze(fetcher, sanitizer, morph, lexicons, url)).await {
        Ok(Ok(result)) => result,
        Ok(Err(error)) => {
            debug!(%url, %error, "Article processing failed");
            AnalysisResult::failed(url, (&error).into())
        }
        Err(_) => {
            debug!(%url, ?deadline, "Article processing hit its deadline");
            AnalysisResult::failed(url, ProcessingStatus::Timeout)
        }
    }
}

/// The success path: everything from the HTTP GET to the final rates.
async fn analyze(
    fetcher: &ArticleFetcher,
    sanitizer: &dyn Sanitizer,
    morph: &dyn Morph,
    lexicons: &Lexicons,
    url: &str,
) -> Result<AnalysisResult, ProcessError> {
    let started = Instant::now();

    let html = fetcher.fetch(url).await?;
    let body = sanitizer.sanitize(&html)?;
    let words = text::split_into_words(morph, &body).await;
    let pos_rate = text::jaundice_rate(&words, &lexicons.positive);
    let neg_rate = text::jaundice_rate(&words, &lexicons.negative);
    let time = text::round2(started.elapsed().as_secs_f64());

    info!(%url, words = words.len(), pos_rate, neg_rate, "Scored article");

    Ok(AnalysisResult {
        address: url.to_string(),
        words_count: words.len(),
        pos_rate: Some(pos_rate),
        neg_rate: Some(neg_rate),
        status: ProcessingStatus::Ok,
        time,
    })
}
