use crate::utils::error::Result;
use async_trait::async_trait;

/// Upstream source of the raw ATIS status page.
///
/// Returns the page body on HTTP 200, `AtisError::UpstreamUnavailable`
/// on any other status, and `AtisError::NetworkFailure` when the request
/// itself fails.
#[async_trait]
pub trait AtisSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;
}
