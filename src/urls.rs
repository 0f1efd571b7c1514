// YouTube URL validation
//
// Three accepted shapes: standard watch page, youtu.be short link, and
// shorts path. Anything else must never reach the resolver.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WATCH_RE: Regex =
        Regex::new(r"^https?://(www\.)?youtube\.com/watch\?v=[\w-]+").unwrap();
    static ref SHORT_RE: Regex = Regex::new(r"^https?://youtu\.be/[\w-]+").unwrap();
    static ref SHORTS_RE: Regex =
        Regex::new(r"^https?://(www\.)?youtube\.com/shorts/[\w-]+").unwrap();
}

/// Syntactic check for the three supported YouTube URL shapes
pub fn is_valid_youtube_url(url: &str) -> bool {
    WATCH_RE.is_match(url) || SHORT_RE.is_match(url) || SHORTS_RE.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_supported_shapes() {
        assert!(is_valid_youtube_url(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        ));
        assert!(is_valid_youtube_url("https://youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_valid_youtube_url("http://youtu.be/dQw4w9WgXcQ"));
        assert!(is_valid_youtube_url(
            "https://www.youtube.com/shorts/dQw4w9WgXcQ"
        ));
    }

    #[test]
    fn rejects_lookalikes_and_other_pages() {
        assert!(!is_valid_youtube_url("https://vimeo.com/watch?v=abc"));
        assert!(!is_valid_youtube_url("https://www.youtube.com/watch"));
        assert!(!is_valid_youtube_url("https://www.youtube.com/playlist?list=PL123"));
        assert!(!is_valid_youtube_url("https://notyoutube.com/watch?v=abc"));
        assert!(!is_valid_youtube_url("youtube.com/watch?v=abc"));
        assert!(!is_valid_youtube_url("not a url"));
    }
}
