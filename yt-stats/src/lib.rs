//! Channel statistics on top of the YouTube Data API v3.
//!
//! Two things are on offer: a keyword search over channels ([`channel_search`]) and a report
//! on how long all of a channel's uploads run ([`report`]). The latter walks the channel's
//! uploads playlist page by page ([`uploads`]), looks the videos up 50 at a time
//! ([`details`]) and sums their durations ([`summary`]).
//!
//! All platform access goes through the [`VideoPlatform`] trait, which
//! [`youtube_api::YouTubeClient`] implements.

pub mod channel_search;
pub mod config;
pub mod details;
pub mod duration;
pub mod error;
pub mod platform;
pub mod report;
pub mod summary;
pub mod table;
pub mod uploads;
pub mod youtube_api;

pub use error::StatsError;
pub use platform::VideoPlatform;
