//! Domain errors surfaced by the stats pipeline.
//!
//! Everything fallible returns [`eyre::Result`]; these variants ride inside the report so
//! callers can still tell the failure kinds apart with
//! [`eyre::Report::downcast_ref`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    /// No API key could be found in the environment.
    #[error("API key not found. Please set the {0} environment variable")]
    MissingCredential(&'static str),

    /// The duration report was requested without a channel id.
    #[error("a channel id is required (pass --channel-id or set CHANNEL_ID)")]
    MissingChannelId,

    #[error("channel not found: {0}")]
    ChannelNotFound(String),

    /// Transport failure, non-success status, or an undecodable response body.
    #[error("YouTube API request failed: {0}")]
    ApiRequestFailure(String),

    #[error("channel has no videos to aggregate")]
    EmptyChannel,

    /// The platform kept handing out continuation tokens past the page limit.
    #[error("playlist still reported more results after {pages} pages; aborting")]
    InfiniteLoopSuspected { pages: usize },

    #[error("invalid video duration {0:?}")]
    InvalidDuration(String),
}
