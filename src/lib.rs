pub mod clean;
pub mod subtitles;
pub mod urls;

pub use clean::clean_subtitle_text;
pub use subtitles::{
    fetch_subtitles, resolve_catalog, ResolverConfig, ResolverMode, Selection, SelectionOutcome,
    SubtitleError, TrackCatalog, TrackEntry, TrackSelector,
};
pub use urls::is_valid_youtube_url;
