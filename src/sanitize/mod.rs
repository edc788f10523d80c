// Article sanitizers — extract plain body text from raw site HTML.
//
// Each supported site gets its own adapter. An adapter either returns the
// article body as plain text or reports that the page does not look like
// an article it recognizes (wrong section, removed article, landing page).

use thiserror::Error;

pub mod inosmi;

/// The page does not match the article layout the adapter expects.
#[derive(Debug, Error)]
#[error("no recognizable article content on the page")]
pub struct ArticleNotFound;

/// Site-specific HTML-to-text extraction.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> Result<String, ArticleNotFound>;
}
