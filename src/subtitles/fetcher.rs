// Content fetcher - retrieves the chosen track over HTTP

use std::time::Duration;

use crate::subtitles::errors::SubtitleError;

/// Thin HTTP fetcher for subtitle payloads.
///
/// One attempt per track, redirects followed, strict UTF-8 decoding.
/// Track URLs are time-limited, so a failure here usually means the
/// catalog went stale rather than a broken network.
pub struct SubtitleFetcher {
    client: reqwest::Client,
}

impl SubtitleFetcher {
    pub fn new(timeout_seconds: u32, proxy: Option<&str>) -> Result<Self, SubtitleError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(timeout_seconds as u64));

        if let Some(proxy_url) = proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                SubtitleError::Fetch(format!("invalid proxy URL '{}': {}", proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| SubtitleError::Fetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch the raw subtitle payload and decode it as UTF-8 text
    pub async fn fetch(&self, location: &str) -> Result<String, SubtitleError> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| SubtitleError::Fetch(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubtitleError::Fetch(format!(
                "server responded with {} (the track URL may have expired)",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SubtitleError::Fetch(format!("failed to read response body: {}", e)))?;

        String::from_utf8(bytes.to_vec())
            .map_err(|e| SubtitleError::Fetch(format!("response is not valid UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_an_unparseable_proxy_url() {
        let result = SubtitleFetcher::new(10, Some("not a proxy url"));
        assert!(matches!(result, Err(SubtitleError::Fetch(_))));
    }

    #[test]
    fn builds_without_a_proxy() {
        assert!(SubtitleFetcher::new(10, None).is_ok());
    }
}
