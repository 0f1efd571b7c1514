// Python resolver - uses `python3 -m yt_dlp`
//
// Slower to start than the native binary, but noticeably better at
// getting past YouTube bot detection, which matters for caption
// metadata on throttled networks.

use async_trait::async_trait;
use std::process::Command as StdCommand;

use super::traits::{parse_catalog, ResolverConfig, SubtitleResolver};
use crate::subtitles::errors::SubtitleError;
use crate::subtitles::models::TrackCatalog;
use crate::subtitles::utils::run_output_with_timeout;

/// Resolver backed by the yt_dlp Python module
pub struct PythonResolver {
    python_cmd: String,
}

impl PythonResolver {
    pub fn new() -> Self {
        Self {
            python_cmd: Self::find_python(),
        }
    }

    /// Find a Python interpreter, honoring the YTDLP_PYTHON override
    fn find_python() -> String {
        if let Ok(custom) = std::env::var("YTDLP_PYTHON") {
            return custom;
        }

        let candidates = [
            "python3",
            "/opt/homebrew/bin/python3",
            "/usr/local/bin/python3",
        ];

        for cmd in candidates {
            if let Ok(output) = StdCommand::new(cmd).arg("--version").output() {
                if output.status.success() {
                    return cmd.to_string();
                }
            }
        }

        "python3".to_string()
    }

    fn has_ytdlp_module(&self) -> bool {
        let code = "import yt_dlp; print('ok')";
        match StdCommand::new(&self.python_cmd).args(["-c", code]).output() {
            Ok(out) => out.status.success(),
            Err(_) => false,
        }
    }

    fn build_args(&self, url: &str, config: &ResolverConfig) -> Vec<String> {
        let mut args = vec![
            "-m".to_string(),
            "yt_dlp".to_string(),
            "--dump-json".to_string(),
            "--skip-download".to_string(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
            "--socket-timeout".to_string(),
            config.timeout_seconds.to_string(),
            "--retries".to_string(),
            "2".to_string(),
        ];

        // Web client is the reliable default in Python mode
        let client = config.player_client.as_deref().unwrap_or("web");
        args.push("--extractor-args".to_string());
        args.push(format!("youtube:player_client={}", client));

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
}

impl Default for PythonResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubtitleResolver for PythonResolver {
    fn name(&self) -> &'static str {
        "python-yt-dlp"
    }

    fn is_available(&self) -> bool {
        self.has_ytdlp_module()
    }

    async fn resolve(
        &self,
        url: &str,
        config: &ResolverConfig,
    ) -> Result<TrackCatalog, SubtitleError> {
        if !self.is_available() {
            return Err(SubtitleError::ToolNotFound(
                "Python yt_dlp module not installed".to_string(),
            ));
        }

        let args = self.build_args(url, config);

        let output = run_output_with_timeout(&self.python_cmd, args, config.timeout_seconds as u64)
            .await
            .map_err(|e| SubtitleError::Resolution(format!("Python yt-dlp error: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SubtitleError::from(stderr.to_string()));
        }

        parse_catalog(&output.stdout)
    }
}
