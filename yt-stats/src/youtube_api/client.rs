//! Core YouTube API client functionality.

use crate::error::StatsError;
use crate::platform::VideoPlatform;
use crate::youtube_api::{
    channels::ChannelListResponse,
    playlist_items::{PlaylistItem, PlaylistItemListResponse},
    search::{SearchListResponse, SearchResult},
    types::Page,
    videos::{Video, VideoListResponse},
};
use eyre::WrapErr;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::fmt;
use tracing::instrument;

/// Where the YouTube Data API v3 lives.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Largest page the list endpoints will hand out.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// A Google API key with access to the YouTube Data API.
///
/// The key never shows up in `Debug` output, so clients can be logged freely.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Error envelope returned alongside non-2xx responses.
///
/// See: <https://developers.google.com/youtube/v3/docs/errors>
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for the public, key-authenticated parts of the YouTube Data API v3.
///
/// Every call is a single `GET` with the key passed as the `key` query parameter.
/// Pagination and batching are left to the caller (see [`crate::uploads`] and
/// [`crate::details`]).
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    api_key: ApiKey,
    /// API root, without a trailing slash
    base_url: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client talking to [`DEFAULT_BASE_URL`].
    pub fn new(api_key: ApiKey, client: reqwest::Client) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Points the client at a different API root, such as a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Makes a `GET` request to `endpoint` and decodes the JSON response.
    ///
    /// Transport errors, non-success statuses and undecodable bodies all surface as
    /// [`StatsError::ApiRequestFailure`]. For non-success statuses the message from the API's
    /// error envelope is used when there is one.
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);

        // reqwest puts the full URL, key included, into its errors unless told otherwise
        let response = self
            .client
            .get(&url)
            .query(query_params)
            .query(&[("key", self.api_key.secret())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .wrap_err_with(|| StatsError::ApiRequestFailure(format!("send GET request to {url}")))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(StatsError::ApiRequestFailure(format!(
                "{endpoint} returned status {status_code}: {message}"
            ))
            .into());
        }

        response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .wrap_err_with(|| {
                StatsError::ApiRequestFailure(format!("parse {endpoint} response as JSON"))
            })
    }

    /// Looks up a channel's `contentDetails` to find its uploads playlist.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self), ret)]
    pub async fn get_uploads_playlist_id(&self, channel_id: &str) -> eyre::Result<Option<String>> {
        let channels: ChannelListResponse = self
            .get_json("channels", &[("part", "contentDetails"), ("id", channel_id)])
            .await?;

        tracing::debug!(
            channel_id,
            total_results = channels.page_info.total_results,
            "fetched channel content details"
        );

        Ok(channels
            .items
            .into_iter()
            .next()
            .and_then(|channel| channel.content_details)
            .map(|details| details.related_playlists.uploads))
    }

    /// Internal method to call the `playlistItems.list` API for a single page.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - The playlist to list
    /// * `max_results` - Maximum number of items to return (1-50)
    /// * `page_token` - Optional page token for pagination
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    async fn list_playlist_items_internal(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<String>,
    ) -> eyre::Result<PlaylistItemListResponse> {
        let max_results_string = max_results.to_string();
        let mut query_params = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results_string.as_str()),
        ];

        // Add pageToken if provided
        if let Some(ref token) = page_token {
            query_params.push(("pageToken", token.as_str()));
        }

        let items: PlaylistItemListResponse = self.get_json("playlistItems", &query_params).await?;

        tracing::debug!(
            playlist_id,
            total_results = items.page_info.total_results,
            returned_items = items.items.len(),
            has_next_page = items.next_page_token.is_some(),
            "fetched playlist items"
        );

        Ok(items)
    }

    /// Gets title and content details for up to 50 videos in one request.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, video_ids), fields(requested = video_ids.len()))]
    pub async fn get_videos(&self, video_ids: &[String]) -> eyre::Result<VecDeque<Video>> {
        let ids = video_ids.join(",");
        let videos: VideoListResponse = self
            .get_json("videos", &[("part", "snippet,contentDetails"), ("id", ids.as_str())])
            .await?;

        tracing::debug!(
            requested = video_ids.len(),
            returned_items = videos.items.len(),
            "fetched video details"
        );

        Ok(videos.items)
    }

    /// Searches for channels matching `keyword`, in relevance order.
    ///
    /// Only the first page is requested.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    pub async fn search_channels_by_keyword(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> eyre::Result<VecDeque<SearchResult>> {
        let max_results_string = max_results.to_string();
        let results: SearchListResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "channel"),
                    ("q", keyword),
                    ("maxResults", max_results_string.as_str()),
                ],
            )
            .await?;

        tracing::debug!(
            total_results = results.page_info.total_results,
            returned_items = results.items.len(),
            "fetched channel search results"
        );

        Ok(results.items)
    }
}

impl VideoPlatform for YouTubeClient {
    async fn channel_uploads_playlist(&self, channel_id: &str) -> eyre::Result<Option<String>> {
        self.get_uploads_playlist_id(channel_id).await
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> eyre::Result<Page<PlaylistItem>> {
        let response = self
            .list_playlist_items_internal(playlist_id, MAX_RESULTS_PER_PAGE, page_token)
            .await?;
        Ok(Page {
            items: response.items,
            next_page_token: response.next_page_token,
        })
    }

    async fn list_video_details(&self, video_ids: &[String]) -> eyre::Result<VecDeque<Video>> {
        self.get_videos(video_ids).await
    }

    async fn search_channels(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> eyre::Result<VecDeque<SearchResult>> {
        self.search_channels_by_keyword(keyword, max_results).await
    }
}
