//! Walks a channel's uploads playlist.

use crate::error::StatsError;
use crate::platform::VideoPlatform;
use crate::youtube_api::PagedStream;
use eyre::WrapErr;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use tokio_stream::StreamExt;
use tracing::instrument;

/// Default bound on how many playlist pages we are willing to walk.
///
/// At 50 items per page this is far beyond what the platform keeps in an uploads playlist.
pub const DEFAULT_MAX_PAGES: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

/// Returns the ids of every video `channel_id` has uploaded, in upload-playlist order.
///
/// Fails with [`StatsError::ChannelNotFound`] if the platform knows no such channel, and with
/// [`StatsError::InfiniteLoopSuspected`] if the playlist still has more pages after
/// `max_pages`. Should the platform report the same video twice, only the first occurrence is
/// kept.
#[instrument(skip(api))]
pub async fn list_channel_video_ids<P: VideoPlatform>(
    api: &P,
    channel_id: &str,
    max_pages: NonZeroUsize,
) -> eyre::Result<Vec<String>> {
    let playlist_id = api
        .channel_uploads_playlist(channel_id)
        .await
        .wrap_err_with(|| format!("look up uploads playlist of channel {channel_id}"))?
        .ok_or_else(|| StatsError::ChannelNotFound(channel_id.to_string()))?;

    tracing::debug!(channel_id, playlist_id = %playlist_id, "resolved uploads playlist");

    let playlist = playlist_id.as_str();
    let mut items = PagedStream::new(move |page_token| async move {
        api.list_playlist_items(playlist, page_token).await
    })
    .with_max_pages(max_pages);

    let mut seen = HashSet::new();
    let mut video_ids = Vec::new();
    while let Some(item) = items.next().await {
        let item = item.wrap_err_with(|| format!("list items of playlist {playlist_id}"))?;
        let video_id = item.video_id();
        if seen.insert(video_id.to_string()) {
            video_ids.push(video_id.to_string());
        } else {
            tracing::warn!(video_id, "playlist reported the same video twice, skipping");
        }
    }

    tracing::info!(
        channel_id,
        videos = video_ids.len(),
        pages = items.pages_fetched(),
        "enumerated channel uploads"
    );

    Ok(video_ids)
}
