// TrackSelector - deterministic track and format selection
//
// Decision order:
// - Manual tracks beat automatic captions for the same language,
//   never merged, never compared by quality
// - Preferred formats checked in a fixed sequence: vtt, then srt
// - Within one format, the first entry in source order wins
// - No preferred format on offer: first entry overall, its own
//   format code passed through unchanged

use std::collections::HashMap;

use super::models::{Selection, TrackCatalog, TrackEntry};

/// Formats tried in order before falling back to whatever the source offers.
/// Matching is a case-sensitive exact comparison on the stored format code.
const PREFERRED_FORMATS: [&str; 2] = ["vtt", "srt"];

/// Outcome of one selection pass over a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A track was chosen; fetch its location downstream.
    Selected(Selection),
    /// Neither manual nor automatic tracks exist for the language.
    /// Carries the sorted union of every language the catalog offers.
    Unavailable {
        requested: String,
        available: Vec<String>,
    },
}

/// Pure selection logic over a resolved catalog. No I/O, no state.
pub struct TrackSelector;

impl TrackSelector {
    pub fn select(catalog: &TrackCatalog, lang: &str) -> SelectionOutcome {
        let entries = match Self::candidate_set(catalog, lang) {
            Some(entries) => entries,
            None => {
                return SelectionOutcome::Unavailable {
                    requested: lang.to_string(),
                    available: catalog.available_languages(),
                }
            }
        };

        // First occurrence per format code; later duplicates never win.
        let mut by_format: HashMap<&str, &TrackEntry> = HashMap::new();
        for entry in entries {
            by_format.entry(entry.format.as_str()).or_insert(entry);
        }

        for fmt in PREFERRED_FORMATS {
            if let Some(entry) = by_format.get(fmt) {
                return SelectionOutcome::Selected(Selection {
                    format: fmt.to_string(),
                    location: entry.location.clone(),
                });
            }
        }

        // No preferred format matched: fall back to source order.
        let first = &entries[0];
        SelectionOutcome::Selected(Selection {
            format: first.format.clone(),
            location: first.location.clone(),
        })
    }

    /// Manual wins over automatic. A language key mapped to an empty entry
    /// list counts as absent.
    fn candidate_set<'a>(catalog: &'a TrackCatalog, lang: &str) -> Option<&'a [TrackEntry]> {
        for tracks in [&catalog.manual, &catalog.automatic] {
            if let Some(entries) = tracks.get(lang) {
                if !entries.is_empty() {
                    return Some(entries);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(format: &str, location: &str) -> TrackEntry {
        TrackEntry::new(format, location)
    }

    fn catalog(
        manual: &[(&str, Vec<TrackEntry>)],
        automatic: &[(&str, Vec<TrackEntry>)],
    ) -> TrackCatalog {
        let mut c = TrackCatalog::default();
        for (lang, entries) in manual {
            c.manual.insert(lang.to_string(), entries.clone());
        }
        for (lang, entries) in automatic {
            c.automatic.insert(lang.to_string(), entries.clone());
        }
        c
    }

    fn expect_selected(outcome: SelectionOutcome) -> Selection {
        match outcome {
            SelectionOutcome::Selected(s) => s,
            other => panic!("expected a selection, got {:?}", other),
        }
    }

    #[test]
    fn automatic_only_language_is_usable() {
        // Scenario A
        let c = catalog(&[], &[("en", vec![entry("vtt", "u1")])]);
        let s = expect_selected(TrackSelector::select(&c, "en"));
        assert_eq!(s.format, "vtt");
        assert_eq!(s.location, "u1");
    }

    #[test]
    fn manual_wins_despite_automatic_having_preferred_format() {
        // Scenario B
        let c = catalog(
            &[("en", vec![entry("srt", "u1")])],
            &[("en", vec![entry("vtt", "u2")])],
        );
        let s = expect_selected(TrackSelector::select(&c, "en"));
        assert_eq!(s.format, "srt");
        assert_eq!(s.location, "u1");
    }

    #[test]
    fn missing_language_reports_union_of_both_maps() {
        // Scenario C
        let c = catalog(
            &[("fr", vec![entry("vtt", "u1")])],
            &[("de", vec![entry("vtt", "u2")])],
        );
        assert_eq!(
            TrackSelector::select(&c, "en"),
            SelectionOutcome::Unavailable {
                requested: "en".to_string(),
                available: vec!["de".to_string(), "fr".to_string()],
            }
        );
    }

    #[test]
    fn empty_catalog_is_unavailable_not_a_panic() {
        // Scenario D
        let c = TrackCatalog::default();
        assert_eq!(
            TrackSelector::select(&c, "en"),
            SelectionOutcome::Unavailable {
                requested: "en".to_string(),
                available: vec![],
            }
        );
    }

    #[test]
    fn first_entry_wins_among_same_format_duplicates() {
        // Scenario E
        let c = catalog(
            &[("en", vec![entry("vtt", "first"), entry("vtt", "second")])],
            &[],
        );
        let s = expect_selected(TrackSelector::select(&c, "en"));
        assert_eq!(s.location, "first");
    }

    #[test]
    fn vtt_beats_srt_regardless_of_order() {
        let c = catalog(
            &[(
                "en",
                vec![entry("ttml", "u1"), entry("srt", "u2"), entry("vtt", "u3")],
            )],
            &[],
        );
        let s = expect_selected(TrackSelector::select(&c, "en"));
        assert_eq!(s.format, "vtt");
        assert_eq!(s.location, "u3");
    }

    #[test]
    fn srt_wins_when_no_vtt_exists() {
        let c = catalog(&[("en", vec![entry("ttml", "u1"), entry("srt", "u2")])], &[]);
        let s = expect_selected(TrackSelector::select(&c, "en"));
        assert_eq!(s.format, "srt");
        assert_eq!(s.location, "u2");
    }

    #[test]
    fn unlisted_format_passes_through_unchanged() {
        let c = catalog(&[("en", vec![entry("ttml", "u1")])], &[]);
        let s = expect_selected(TrackSelector::select(&c, "en"));
        assert_eq!(s.format, "ttml");
        assert_eq!(s.location, "u1");
    }

    #[test]
    fn format_match_is_case_sensitive() {
        let c = catalog(
            &[("en", vec![entry("VTT", "upper"), entry("srt", "lower")])],
            &[],
        );
        let s = expect_selected(TrackSelector::select(&c, "en"));
        assert_eq!(s.format, "srt");
        assert_eq!(s.location, "lower");
    }

    #[test]
    fn language_key_with_empty_entry_list_counts_as_absent() {
        let c = catalog(&[("en", vec![])], &[("en", vec![entry("vtt", "u1")])]);
        let s = expect_selected(TrackSelector::select(&c, "en"));
        assert_eq!(s.location, "u1");

        // Empty in both maps falls through to Unavailable, but the key
        // still shows up in the availability listing.
        let c = catalog(&[("en", vec![])], &[("en", vec![])]);
        assert_eq!(
            TrackSelector::select(&c, "en"),
            SelectionOutcome::Unavailable {
                requested: "en".to_string(),
                available: vec!["en".to_string()],
            }
        );
    }

    #[test]
    fn selection_is_idempotent() {
        let c = catalog(
            &[("en", vec![entry("srt", "u1"), entry("vtt", "u2")])],
            &[("en", vec![entry("vtt", "u3")])],
        );
        let first = TrackSelector::select(&c, "en");
        let second = TrackSelector::select(&c, "en");
        assert_eq!(first, second);
    }
}
