// Command-line entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use subtitle_downloader::clean::clean_subtitle_text;
use subtitle_downloader::subtitles::pipeline::{fetch_subtitles, resolve_catalog};
use subtitle_downloader::subtitles::resolvers::{ResolverConfig, ResolverMode};
use subtitle_downloader::subtitles::SubtitleError;
use subtitle_downloader::urls::is_valid_youtube_url;

/// CLI wrapper for ResolverMode to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliResolverMode {
    Python,
    Cli,
    Auto,
}

impl From<CliResolverMode> for ResolverMode {
    fn from(mode: CliResolverMode) -> Self {
        match mode {
            CliResolverMode::Python => ResolverMode::Python,
            CliResolverMode::Cli => ResolverMode::Cli,
            CliResolverMode::Auto => ResolverMode::Auto,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "subtitle-downloader",
    about = "Download and format subtitles from a YouTube video",
    after_help = "examples:\n  \
        subtitle-downloader https://www.youtube.com/watch?v=dQw4w9WgXcQ\n  \
        subtitle-downloader https://youtu.be/dQw4w9WgXcQ --lang ru\n  \
        subtitle-downloader https://youtu.be/dQw4w9WgXcQ --output subtitles.txt\n  \
        subtitle-downloader https://youtu.be/dQw4w9WgXcQ --list-langs"
)]
struct Cli {
    /// YouTube video URL
    #[arg(value_name = "URL")]
    url: String,

    /// Subtitle language code
    #[arg(long, value_name = "LANG", default_value = "en")]
    lang: String,

    /// Save output to a file instead of printing to stdout
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// List available subtitle languages and exit
    #[arg(long)]
    list_langs: bool,

    /// Skip text normalization and emit the raw subtitle payload
    #[arg(long)]
    no_clean: bool,

    /// Proxy URL for yt-dlp and subtitle fetching (e.g. socks5://127.0.0.1:1080)
    #[arg(long, value_name = "URL")]
    proxy: Option<String>,

    /// Path to a cookies.txt file passed through to yt-dlp
    #[arg(long, value_name = "FILE")]
    cookies: Option<String>,

    /// Network timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    timeout: u32,

    /// How to invoke yt-dlp
    #[arg(long, value_enum, default_value = "auto")]
    resolver: CliResolverMode,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if !is_valid_youtube_url(&cli.url) {
        eprintln!("error: {}", SubtitleError::InvalidUrl(cli.url));
        return ExitCode::from(1);
    }

    let config = ResolverConfig::default()
        .with_mode(cli.resolver.into())
        .with_proxy(cli.proxy.clone())
        .with_cookies_path(cli.cookies.clone())
        .with_timeout(cli.timeout);

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli, config: &ResolverConfig) -> Result<(), String> {
    if cli.list_langs {
        let catalog = resolve_catalog(&cli.url, config)
            .await
            .map_err(|e| e.to_string())?;
        print_language_listing(&catalog.manual_languages(), &catalog.automatic_languages());
        return Ok(());
    }

    let (raw_text, format) = fetch_subtitles(&cli.url, &cli.lang, config)
        .await
        .map_err(|e| e.to_string())?;

    let text = if cli.no_clean {
        raw_text
    } else {
        clean_subtitle_text(&raw_text, &format)
    };

    match &cli.output {
        Some(path) => std::fs::write(path, &text)
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))?,
        None => println!("{}", text),
    }

    Ok(())
}

fn print_language_listing(manual: &[String], automatic: &[String]) {
    let render = |langs: &[String]| {
        if langs.is_empty() {
            "(none)".to_string()
        } else {
            langs.join(", ")
        }
    };

    println!("Manual subtitles:   {}", render(manual));
    println!("Automatic captions: {}", render(automatic));
}
