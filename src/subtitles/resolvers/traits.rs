// SubtitleResolver trait, configuration, and the shared yt-dlp adapter

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::subtitles::errors::SubtitleError;
use crate::subtitles::models::{TrackCatalog, TrackEntry};

/// Resolution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverMode {
    /// Python module yt_dlp (better for YouTube, avoids bot detection)
    Python,
    /// CLI binary yt-dlp (faster, no Python dependency)
    Cli,
    /// Auto-select: Python -> CLI fallback
    #[default]
    Auto,
}

impl fmt::Display for ResolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Cli => write!(f, "cli"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Configuration for catalog resolution
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Resolution mode (Python, CLI, or Auto)
    pub mode: ResolverMode,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
    /// Path to a cookies.txt file
    pub cookies_path: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
    /// YouTube player client override (android, web, tv)
    pub player_client: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: ResolverMode::Auto,
            proxy: None,
            cookies_path: None,
            timeout_seconds: 30,
            player_client: None,
        }
    }
}

impl ResolverConfig {
    pub fn with_mode(mut self, mode: ResolverMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_cookies_path(mut self, path: Option<String>) -> Self {
        self.cookies_path = path;
        self
    }

    pub fn with_timeout(mut self, seconds: u32) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_player_client(mut self, client: Option<String>) -> Self {
        self.player_client = client;
        self
    }
}

/// Trait for catalog resolvers
#[async_trait]
pub trait SubtitleResolver: Send + Sync {
    /// Name of the resolver (for logging)
    fn name(&self) -> &'static str;

    /// Check if this resolver is usable on this system
    fn is_available(&self) -> bool;

    /// Resolve the full subtitle catalog for a video URL
    async fn resolve(
        &self,
        url: &str,
        config: &ResolverConfig,
    ) -> Result<TrackCatalog, SubtitleError>;
}

/// Parse `yt-dlp --dump-json` output into a TrackCatalog.
///
/// The only place yt-dlp field names appear; everything downstream works
/// on the catalog model. Entry order within a language is kept exactly as
/// reported (the selector's tie-break depends on it).
pub(super) fn parse_catalog(stdout: &[u8]) -> Result<TrackCatalog, SubtitleError> {
    let json_str = String::from_utf8_lossy(stdout);
    let json: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| SubtitleError::Resolution(format!("invalid JSON from yt-dlp: {}", e)))?;

    Ok(TrackCatalog {
        manual: parse_track_map(&json["subtitles"]),
        automatic: parse_track_map(&json["automatic_captions"]),
    })
}

fn parse_track_map(value: &serde_json::Value) -> HashMap<String, Vec<TrackEntry>> {
    let mut tracks = HashMap::new();

    if let Some(map) = value.as_object() {
        for (lang, entries) in map {
            let mut parsed = Vec::new();
            if let Some(list) = entries.as_array() {
                for e in list {
                    // An entry without a fetch URL is undeliverable
                    if let Some(url) = e["url"].as_str() {
                        parsed.push(TrackEntry {
                            format: e["ext"].as_str().unwrap_or("unknown").to_string(),
                            location: url.to_string(),
                        });
                    }
                }
            }
            tracks.insert(lang.clone(), parsed);
        }
    }

    tracks
}
