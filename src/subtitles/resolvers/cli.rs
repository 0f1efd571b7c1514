// CLI resolver - uses the native `yt-dlp` binary
//
// Faster than the Python module and needs no interpreter, but more
// likely to trigger YouTube bot detection, so it retries across
// player clients.

use async_trait::async_trait;
use std::process::Command as StdCommand;

use super::traits::{parse_catalog, ResolverConfig, SubtitleResolver};
use crate::subtitles::errors::SubtitleError;
use crate::subtitles::models::TrackCatalog;
use crate::subtitles::utils::run_output_with_timeout;

/// Resolver backed by the yt-dlp binary
pub struct CliResolver {
    ytdlp_path: String,
}

impl CliResolver {
    pub fn new() -> Self {
        Self {
            ytdlp_path: Self::find_ytdlp(),
        }
    }

    /// Find the yt-dlp binary
    fn find_ytdlp() -> String {
        let common_paths = [
            "/opt/homebrew/bin/yt-dlp", // Homebrew on Apple Silicon
            "/usr/local/bin/yt-dlp",    // Homebrew on Intel Mac
            "/usr/bin/yt-dlp",          // System installation
        ];

        for path in common_paths {
            if std::path::Path::new(path).exists() {
                return path.to_string();
            }
        }

        if let Ok(output) = StdCommand::new("which").arg("yt-dlp").output() {
            if output.status.success() {
                if let Ok(path) = String::from_utf8(output.stdout) {
                    let trimmed = path.trim();
                    if !trimmed.is_empty() {
                        return trimmed.to_string();
                    }
                }
            }
        }

        "yt-dlp".to_string()
    }

    fn has_ytdlp_binary(&self) -> bool {
        match StdCommand::new(&self.ytdlp_path).arg("--version").output() {
            Ok(out) => out.status.success(),
            Err(_) => false,
        }
    }

    /// Build command arguments for one player client attempt
    fn build_args(&self, url: &str, config: &ResolverConfig, client: &str) -> Vec<String> {
        let mut args = vec![
            "--dump-json".to_string(),
            "--skip-download".to_string(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
            "--socket-timeout".to_string(),
            config.timeout_seconds.to_string(),
            "--retries".to_string(),
            "2".to_string(),
            "--extractor-args".to_string(),
            format!("youtube:player_client={}", client),
        ];

        if let Some(path) = &config.cookies_path {
            args.push("--cookies".to_string());
            args.push(path.clone());
        }

        if let Some(proxy) = &config.proxy {
            args.push("--proxy".to_string());
            args.push(proxy.clone());
        }

        args.push(url.to_string());
        args
    }

    /// Try resolution with multiple player clients
    async fn try_with_clients(
        &self,
        url: &str,
        config: &ResolverConfig,
        clients: &[&str],
    ) -> Result<TrackCatalog, SubtitleError> {
        let mut last_error = SubtitleError::Resolution("no player clients to try".to_string());

        for client in clients {
            let args = self.build_args(url, config, client);

            let output =
                run_output_with_timeout(&self.ytdlp_path, args, config.timeout_seconds as u64)
                    .await;

            match output {
                Ok(out) if out.status.success() => {
                    eprintln!("[CliResolver] Success with client '{}'", client);
                    return parse_catalog(&out.stdout);
                }
                Ok(out) => {
                    let stderr = String::from_utf8_lossy(&out.stderr);
                    eprintln!("[CliResolver] Client '{}' failed: {}", client, stderr.trim());
                    last_error = SubtitleError::from(stderr.to_string());
                }
                Err(e) => {
                    eprintln!("[CliResolver] Client '{}' error: {}", client, e);
                    last_error = SubtitleError::Resolution(e);
                }
            }
        }

        Err(last_error)
    }
}

impl Default for CliResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubtitleResolver for CliResolver {
    fn name(&self) -> &'static str {
        "cli-yt-dlp"
    }

    fn is_available(&self) -> bool {
        self.has_ytdlp_binary()
    }

    async fn resolve(
        &self,
        url: &str,
        config: &ResolverConfig,
    ) -> Result<TrackCatalog, SubtitleError> {
        if !self.is_available() {
            return Err(SubtitleError::ToolNotFound(
                "yt-dlp binary not found".to_string(),
            ));
        }

        // An explicit player client skips the retry ladder
        if let Some(client) = &config.player_client {
            return self.try_with_clients(url, config, &[client.as_str()]).await;
        }

        // android is less likely to be blocked; web works better with cookies
        let clients: Vec<&str> = if config.cookies_path.is_some() {
            vec!["web", "android"]
        } else {
            vec!["android", "tv", "web"]
        };

        self.try_with_clients(url, config, &clients).await
    }
}
