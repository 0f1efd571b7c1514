// Data model for per-video subtitle catalogs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One deliverable subtitle resource.
///
/// The format code is an open string tag exactly as the source reports it
/// ("vtt", "srt", "json3", ...); the location is a time-limited fetch URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    pub format: String,
    pub location: String,
}

impl TrackEntry {
    pub fn new(format: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            location: location.into(),
        }
    }
}

/// Immutable snapshot of every subtitle offering for one video.
///
/// Manual tracks and automatic captions live in separate maps keyed by
/// language code; the union of both key sets is what the video offers.
/// Entry vectors preserve the order the resolver reported them in, which
/// later serves as the selector's tie-break.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackCatalog {
    pub manual: HashMap<String, Vec<TrackEntry>>,
    pub automatic: HashMap<String, Vec<TrackEntry>>,
}

impl TrackCatalog {
    /// Language codes with at least a manual key, sorted.
    pub fn manual_languages(&self) -> Vec<String> {
        let mut langs: Vec<String> = self.manual.keys().cloned().collect();
        langs.sort();
        langs
    }

    /// Language codes with at least an automatic key, sorted.
    pub fn automatic_languages(&self) -> Vec<String> {
        let mut langs: Vec<String> = self.automatic.keys().cloned().collect();
        langs.sort();
        langs
    }

    /// Sorted, deduplicated union of both key sets.
    pub fn available_languages(&self) -> Vec<String> {
        let mut langs: Vec<String> = self
            .manual
            .keys()
            .chain(self.automatic.keys())
            .cloned()
            .collect();
        langs.sort();
        langs.dedup();
        langs
    }

    pub fn is_empty(&self) -> bool {
        self.manual.is_empty() && self.automatic.is_empty()
    }
}

/// Winning track chosen by the selector. Fetching happens downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub format: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_languages_unions_both_maps() {
        let mut catalog = TrackCatalog::default();
        catalog
            .manual
            .insert("fr".to_string(), vec![TrackEntry::new("vtt", "u1")]);
        catalog
            .automatic
            .insert("de".to_string(), vec![TrackEntry::new("vtt", "u2")]);
        catalog
            .automatic
            .insert("fr".to_string(), vec![TrackEntry::new("vtt", "u3")]);

        assert_eq!(catalog.available_languages(), vec!["de", "fr"]);
        assert_eq!(catalog.manual_languages(), vec!["fr"]);
        assert_eq!(catalog.automatic_languages(), vec!["de", "fr"]);
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let catalog = TrackCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.available_languages().is_empty());
    }
}
