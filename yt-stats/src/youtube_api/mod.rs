//! YouTube Data API v3 client library.
//!
//! Covers the read-only, key-authenticated endpoints needed to walk a channel's uploads and
//! look up video lengths:
//!
//! - `channels.list` to find a channel's uploads playlist ([`channels`])
//! - `playlistItems.list` to page through that playlist ([`playlist_items`])
//! - `videos.list` for titles and durations, up to 50 ids per request ([`videos`])
//! - `search.list` restricted to channels ([`search`])
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use yt_stats::youtube_api::{ApiKey, YouTubeClient};
//!
//! # async fn example() -> eyre::Result<()> {
//! let client = YouTubeClient::new(ApiKey::new("AIza..."), reqwest::Client::new());
//! let hits = client.search_channels_by_keyword("rust", 10).await?;
//! for hit in hits {
//!     println!("{} ({})", hit.snippet.title, hit.snippet.channel_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod playlist_items;
pub mod search;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::{ApiKey, DEFAULT_BASE_URL, YouTubeClient};
pub use types::{Page, PageInfo, PagedStream};

pub use channels::{Channel, ChannelContentDetails, RelatedPlaylists};
pub use playlist_items::PlaylistItem;
pub use search::SearchResult;
pub use videos::{Video, VideoContentDetails, VideoSnippet};
