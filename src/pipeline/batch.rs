// Batch orchestration — one concurrent task per URL, fan-in by completion.
//
// Results arrive in completion order, not request order: each article runs
// on its own clock, and the batch only guarantees that every requested URL
// has contributed exactly one result by the time it returns.

use std::time::Duration;

use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::info;

use crate::fetch::ArticleFetcher;
use crate::lexicon::Lexicons;
use crate::morph::Morph;
use crate::pipeline::article::{self, AnalysisResult};
use crate::sanitize::Sanitizer;

/// Process every URL in the batch concurrently and collect all results.
///
/// The HTTP client is built here and shared by all tasks for the life of
/// the batch; it is released when the last task finishes, on every exit
/// path. One article failing or timing out never cancels a sibling, and
/// no task's error propagates out of the batch.
pub async fn process_batch(
    sanitizer: &dyn Sanitizer,
    morph: &dyn Morph,
    lexicons: &Lexicons,
    urls: &[String],
    deadline: Duration,
) -> Result<Vec<AnalysisResult>> {
    let fetcher = ArticleFetcher::new().context("Failed to build HTTP client")?;

    let mut tasks: FuturesUnordered<_> = urls
        .iter()
        .map(|url| article::process_article(&fetcher, sanitizer, morph, lexicons, url, deadline))
        .collect();

    let mut results = Vec::with_capacity(urls.len());
    while let Some(result) = tasks.next().await {
        results.push(result);
    }

    info!(requested = urls.len(), "Batch complete");
    Ok(results)
}
