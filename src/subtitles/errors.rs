// Error types for subtitle retrieval

use std::fmt;

#[derive(Debug, Clone)]
pub enum SubtitleError {
    /// URL failed the syntactic YouTube check; never reaches the resolver
    InvalidUrl(String),

    /// Neither yt-dlp mode is usable on this system
    ToolNotFound(String),

    /// yt-dlp could not produce a catalog (network, platform block, video missing)
    Resolution(String),

    /// Video resolved fine, but no track exists for the requested language
    LanguageUnavailable {
        requested: String,
        manual: Vec<String>,
        automatic: Vec<String>,
    },

    /// Chosen track could not be retrieved or decoded
    Fetch(String),
}

impl SubtitleError {
    /// Sorted, deduplicated union of both language listings.
    /// Empty for every variant except `LanguageUnavailable`.
    pub fn available_languages(&self) -> Vec<String> {
        match self {
            Self::LanguageUnavailable {
                manual, automatic, ..
            } => {
                let mut langs: Vec<String> = manual.iter().chain(automatic).cloned().collect();
                langs.sort();
                langs.dedup();
                langs
            }
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for SubtitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => {
                write!(f, "'{}' does not look like a valid YouTube URL", url)
            }
            Self::ToolNotFound(msg) => write!(f, "tool not found: {}", msg),
            Self::Resolution(msg) => write!(f, "could not resolve video: {}", msg),
            Self::LanguageUnavailable {
                requested,
                manual,
                automatic,
            } => {
                write!(f, "No subtitles found for language '{}'", requested)?;
                if manual.is_empty() && automatic.is_empty() {
                    write!(f, " (the video reports no subtitle tracks at all)")
                } else {
                    if !manual.is_empty() {
                        write!(f, "; manual subtitles: {}", manual.join(", "))?;
                    }
                    if !automatic.is_empty() {
                        write!(f, "; automatic captions: {}", automatic.join(", "))?;
                    }
                    Ok(())
                }
            }
            Self::Fetch(msg) => write!(f, "could not fetch subtitle track: {}", msg),
        }
    }
}

impl std::error::Error for SubtitleError {}

// Classify raw yt-dlp stderr into a resolution failure
impl From<String> for SubtitleError {
    fn from(s: String) -> Self {
        // Soft IP blocks show up as timeouts against youtube.com
        if (s.contains("timeout") || s.contains("timed out")) && s.contains("youtube.com") {
            return Self::Resolution(
                "YouTube is throttling requests from this address; \
                 wait and retry later, or pass --proxy"
                    .to_string(),
            );
        }

        if s.contains("timeout") || s.contains("timed out") {
            return Self::Resolution(format!("network timeout: {}", s.trim()));
        }

        // Explicit blocks
        if s.contains("429") || s.contains("bot") || s.contains("blocked") {
            return Self::Resolution(
                "YouTube is throttling requests from this address; \
                 wait and retry later, or pass --proxy"
                    .to_string(),
            );
        }

        if s.contains("not found") || s.contains("No such file") || s.contains("command not found")
        {
            return Self::ToolNotFound(s.trim().to_string());
        }

        Self::Resolution(s.trim().to_string())
    }
}
