// HTTP fetcher — one shared client per batch, one attempt per article.
//
// A thin reqwest wrapper. Non-success statuses and transport failures
// (DNS, refused connections, TLS) all surface as `reqwest::Error`, which
// the pipeline classifies as a fetch failure.

use tracing::debug;

pub struct ArticleFetcher {
    client: reqwest::Client,
}

impl ArticleFetcher {
    /// Build the client shared by every task in a batch. The client is
    /// safe for concurrent use; tasks borrow it without locking.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("jaundice/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the raw page body for a URL. A single attempt, no retries.
    pub async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        debug!(%url, "GET article");
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.text().await
    }
}
