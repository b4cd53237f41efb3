use clap::{ArgGroup, Parser};
use std::io::IsTerminal;
use std::num::NonZeroUsize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use yt_stats::StatsError;
use yt_stats::channel_search::search_channels;
use yt_stats::config::{Config, load_environment};
use yt_stats::report::channel_duration_report;
use yt_stats::table::{search_results_table, summary_table, video_preview_table};
use yt_stats::uploads::DEFAULT_MAX_PAGES;
use yt_stats::youtube_api::YouTubeClient;

/// Channel search and upload duration statistics from the YouTube Data API.
///
/// Needs a Google API key in GOOGLE_API_KEY (a `.env` file in the working directory is read too).
#[derive(Debug, Parser)]
#[command(version, about)]
#[command(group(
    ArgGroup::new("command")
        .args(["search", "channel_all_videos_duration"])
        .required(true)
        .multiple(true)
))]
struct Cli {
    /// Search channels by keyword and list their ids
    #[arg(short = 's', long, value_name = "KEYWORD")]
    search: Option<String>,

    /// Channel to report on
    #[arg(short = 'c', long, visible_alias = "chid", env = "CHANNEL_ID")]
    channel_id: Option<String>,

    /// Sum up the duration of every video the channel has uploaded
    #[arg(short = 'd', long, visible_alias = "chavd")]
    channel_all_videos_duration: bool,

    /// Give up on the uploads playlist after this many pages
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES, value_name = "PAGES")]
    max_pages: NonZeroUsize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    // before parsing, so CHANNEL_ID can come from .env as well
    load_environment();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let yt = YouTubeClient::new(config.api_key, reqwest::Client::new())
        .with_base_url(config.base_url);

    if let Some(keyword) = &cli.search {
        let matches = search_channels(&yt, keyword).await?;
        if matches.is_empty() {
            println!("No channels found for {keyword:?}");
        } else {
            println!("{}", search_results_table(&matches));
        }
    }

    if cli.channel_all_videos_duration {
        let channel_id = cli
            .channel_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(StatsError::MissingChannelId)?;

        let report = channel_duration_report(&yt, channel_id.trim(), cli.max_pages).await?;
        println!("{}", video_preview_table(&report.videos));
        println!("{}", summary_table(&report.summary));
    }

    Ok(())
}
