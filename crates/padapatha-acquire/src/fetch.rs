use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};

/// Result of fetching one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// HTTP 200 with the body decoded as UTF-8.
    Page(String),
    /// Any other status. Treated as end of data by the driver.
    Missing(StatusCode),
}

pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent("padapatha/0.1 (rigveda page collector)")
        .build()
        .context("Failed to build HTTP client")
}

/// GET `url` and return its body, or the status if it wasn't 200.
///
/// The body is always decoded as UTF-8 whatever charset the server
/// declares; invalid sequences are replaced rather than rejected.
/// Transport failures (DNS, refused connection, timeout, truncated body)
/// come back as `Err`.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchOutcome> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {url}"))?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!(url = %url, status = status.as_u16(), "Failed to retrieve page");
        return Ok(FetchOutcome::Missing(status));
    }

    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read response body from {url}"))?;
    tracing::debug!(url = %url, bytes = bytes.len(), "Received HTML");

    Ok(FetchOutcome::Page(String::from_utf8_lossy(&bytes).into_owned()))
}
