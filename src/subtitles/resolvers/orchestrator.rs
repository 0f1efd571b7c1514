// Resolver orchestrator - mode selection and fallback
//
// Strategy:
// 1. Python mode preferred (better anti-bot behavior on YouTube)
// 2. Auto-fallback to the CLI binary when Python fails or is missing
// 3. Explicit modes never fall back

use super::cli::CliResolver;
use super::python::PythonResolver;
use super::traits::{ResolverConfig, ResolverMode, SubtitleResolver};
use crate::subtitles::errors::SubtitleError;
use crate::subtitles::models::TrackCatalog;

/// Orchestrator that manages the Python and CLI resolvers
pub struct ResolverOrchestrator {
    python: PythonResolver,
    cli: CliResolver,
}

impl ResolverOrchestrator {
    pub fn new() -> Self {
        Self {
            python: PythonResolver::new(),
            cli: CliResolver::new(),
        }
    }

    /// Resolve the subtitle catalog according to the configured mode
    pub async fn resolve(
        &self,
        url: &str,
        config: &ResolverConfig,
    ) -> Result<TrackCatalog, SubtitleError> {
        match config.mode {
            ResolverMode::Python => self.resolve_with(&self.python, url, config).await,
            ResolverMode::Cli => self.resolve_with(&self.cli, url, config).await,
            ResolverMode::Auto => self.resolve_auto(url, config).await,
        }
    }

    async fn resolve_with(
        &self,
        resolver: &dyn SubtitleResolver,
        url: &str,
        config: &ResolverConfig,
    ) -> Result<TrackCatalog, SubtitleError> {
        eprintln!("[Orchestrator] Resolving with {}", resolver.name());
        resolver.resolve(url, config).await
    }

    async fn resolve_auto(
        &self,
        url: &str,
        config: &ResolverConfig,
    ) -> Result<TrackCatalog, SubtitleError> {
        let mut primary_error = None;

        if self.python.is_available() {
            eprintln!("[Orchestrator] Trying primary resolver: {}", self.python.name());
            match self.python.resolve(url, config).await {
                Ok(catalog) => return Ok(catalog),
                Err(e) => {
                    eprintln!("[Orchestrator] {} failed: {}", self.python.name(), e);
                    primary_error = Some(e);
                }
            }
        }

        if self.cli.is_available() {
            eprintln!("[Orchestrator] Trying fallback resolver: {}", self.cli.name());
            return self.cli.resolve(url, config).await;
        }

        // No fallback to run: surface the primary failure if there was one
        match primary_error {
            Some(e) => Err(e),
            None => Err(SubtitleError::ToolNotFound(
                "neither the Python yt_dlp module nor the yt-dlp binary is available \
                 (install one: pip3 install yt-dlp, or brew install yt-dlp)"
                    .to_string(),
            )),
        }
    }
}

impl Default for ResolverOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
