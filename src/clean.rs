// Subtitle text normalization
//
// Turns timed vtt/srt payloads into plain dialogue lines: headers, cue
// timing, counters, and inline markup go away, rolling-caption duplicate
// lines collapse to one. Formats this module does not understand pass
// through with line endings normalized and nothing else touched.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "00:00:01.000 --> 00:00:04.000" (vtt) / "00:00:01,000 --> 00:00:04,000" (srt),
    // with or without an hour field and trailing cue settings
    static ref TIMING_RE: Regex =
        Regex::new(r"^\s*(\d{1,2}:)?\d{2}:\d{2}[.,]\d{1,3}\s*-->").unwrap();
    // Inline markup: <c>, <i>, </c>, word-level <00:00:01.000> stamps, {\an8}
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>|\{\\an\d+\}").unwrap();
    // Bare SRT cue counters
    static ref COUNTER_RE: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Normalize a fetched subtitle payload according to its format code
pub fn clean_subtitle_text(raw: &str, format: &str) -> String {
    match format {
        "vtt" | "srt" => clean_timed(raw),
        _ => raw.replace("\r\n", "\n"),
    }
}

fn clean_timed(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut in_block_comment = false;

    for line in raw.replace("\r\n", "\n").lines() {
        let trimmed = line.trim();

        // NOTE/STYLE/REGION blocks run until the next blank line
        if in_block_comment {
            if trimmed.is_empty() {
                in_block_comment = false;
            }
            continue;
        }
        if trimmed.starts_with("NOTE") || trimmed == "STYLE" || trimmed == "REGION" {
            in_block_comment = true;
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "WEBVTT" || trimmed.starts_with("WEBVTT ") {
            continue;
        }
        // vtt header metadata ("Kind: captions", "Language: en")
        if trimmed.starts_with("Kind:") || trimmed.starts_with("Language:") {
            continue;
        }
        if TIMING_RE.is_match(trimmed) || COUNTER_RE.is_match(trimmed) {
            continue;
        }

        let text = decode_entities(TAG_RE.replace_all(trimmed, "").trim());
        if text.is_empty() {
            continue;
        }

        // Rolling captions repeat the previous line in each new cue
        if lines.last().map(|l| l.as_str()) == Some(text.as_str()) {
            continue;
        }

        lines.push(text);
    }

    lines.join("\n")
}

/// Decode the handful of HTML entities yt-dlp leaves in caption text.
/// `&amp;` goes last so already-escaped entities are not decoded twice.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_a_vtt_payload_to_dialogue_lines() {
        let raw = "WEBVTT\n\
                   Kind: captions\n\
                   Language: en\n\
                   \n\
                   00:00:01.000 --> 00:00:04.000 align:start position:0%\n\
                   Hello <c>world</c>\n\
                   \n\
                   00:00:04.000 --> 00:00:07.000\n\
                   Hello world\n\
                   Second line\n";
        assert_eq!(clean_subtitle_text(raw, "vtt"), "Hello world\nSecond line");
    }

    #[test]
    fn cleans_an_srt_payload_with_counters() {
        let raw = "1\n\
                   00:00:01,000 --> 00:00:04,000\n\
                   First cue\n\
                   \n\
                   2\n\
                   00:00:04,000 --> 00:00:07,000\n\
                   {\\an8}Second cue\n";
        assert_eq!(clean_subtitle_text(raw, "srt"), "First cue\nSecond cue");
    }

    #[test]
    fn skips_note_blocks_entirely() {
        let raw = "WEBVTT\n\
                   \n\
                   NOTE this block\n\
                   spans two lines\n\
                   \n\
                   00:00:01.000 --> 00:00:02.000\n\
                   Dialogue\n";
        assert_eq!(clean_subtitle_text(raw, "vtt"), "Dialogue");
    }

    #[test]
    fn strips_word_level_timestamps_and_entities() {
        let raw = "WEBVTT\n\
                   \n\
                   00:00:01.000 --> 00:00:02.000\n\
                   it<00:00:01.500><c>&#39;s Tom &amp; Jerry</c>\n";
        assert_eq!(clean_subtitle_text(raw, "vtt"), "it's Tom & Jerry");
    }

    #[test]
    fn unknown_formats_pass_through_untouched() {
        let raw = "{\"events\": [1, 2, 3]}\r\nsecond line";
        assert_eq!(
            clean_subtitle_text(raw, "json3"),
            "{\"events\": [1, 2, 3]}\nsecond line"
        );
    }

    #[test]
    fn double_escaped_ampersand_decodes_once() {
        assert_eq!(decode_entities("a &amp;lt; b"), "a &lt; b");
    }
}
