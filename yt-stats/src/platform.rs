//! The seam between the stats pipeline and the video platform.
//!
//! [`crate::youtube_api::YouTubeClient`] is the production implementation. Tests drive the
//! pipeline through an in-memory fake instead.

use crate::youtube_api::{Page, PlaylistItem, SearchResult, Video};
use std::collections::VecDeque;
use std::future::Future;

/// Read-only capabilities the pipeline needs from the video platform.
///
/// Every call is a single request; pagination and batching are left to the caller.
pub trait VideoPlatform: Sync {
    /// Resolves the id of the playlist holding every upload of `channel_id`.
    ///
    /// Returns `Ok(None)` when the platform knows no such channel.
    fn channel_uploads_playlist(
        &self,
        channel_id: &str,
    ) -> impl Future<Output = eyre::Result<Option<String>>> + Send;

    /// Fetches one page of `playlist_id`, starting at `page_token` (or the start when `None`).
    fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> impl Future<Output = eyre::Result<Page<PlaylistItem>>> + Send;

    /// Fetches title and content details for all of `video_ids` in a single request.
    fn list_video_details(
        &self,
        video_ids: &[String],
    ) -> impl Future<Output = eyre::Result<VecDeque<Video>>> + Send;

    /// Runs a channel-only search for `keyword`, returning at most `max_results` hits.
    fn search_channels(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> impl Future<Output = eyre::Result<VecDeque<SearchResult>>> + Send;
}
