// Sequential pipeline: resolve -> select -> fetch
//
// Each stage's output is the next stage's sole input; nothing here is
// cached or shared between invocations.

use super::errors::SubtitleError;
use super::fetcher::SubtitleFetcher;
use super::models::TrackCatalog;
use super::resolvers::{ResolverConfig, ResolverOrchestrator};
use super::selector::{SelectionOutcome, TrackSelector};

/// Download subtitles for a video into memory.
///
/// Returns `(raw_text, format)` where format is the chosen track's format
/// code (e.g. "vtt" or "srt"). Fails with `LanguageUnavailable` when the
/// video offers no track for the requested language.
pub async fn fetch_subtitles(
    url: &str,
    lang: &str,
    config: &ResolverConfig,
) -> Result<(String, String), SubtitleError> {
    let catalog = ResolverOrchestrator::new().resolve(url, config).await?;

    match TrackSelector::select(&catalog, lang) {
        SelectionOutcome::Selected(selection) => {
            eprintln!(
                "[Pipeline] Selected '{}' track for language '{}'",
                selection.format, lang
            );
            let fetcher = SubtitleFetcher::new(config.timeout_seconds, config.proxy.as_deref())?;
            let raw_text = fetcher.fetch(&selection.location).await?;
            Ok((raw_text, selection.format))
        }
        SelectionOutcome::Unavailable { requested, .. } => {
            Err(SubtitleError::LanguageUnavailable {
                requested,
                manual: catalog.manual_languages(),
                automatic: catalog.automatic_languages(),
            })
        }
    }
}

/// Resolve the catalog only, without selecting or fetching anything.
/// Backs `--list-langs`.
pub async fn resolve_catalog(
    url: &str,
    config: &ResolverConfig,
) -> Result<TrackCatalog, SubtitleError> {
    ResolverOrchestrator::new().resolve(url, config).await
}
