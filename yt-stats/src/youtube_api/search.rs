//! YouTube Search API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `search.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#searchListResponse`.
    pub kind: String,
    #[serde(default)]
    pub items: VecDeque<SearchResult>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A search result points at a video, channel, or playlist matching the query.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: SearchResultSnippet,
}

/// Identifies the resource that matched.
///
/// Only the id matching `kind` is set.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultId {
    /// `youtube#channel`, `youtube#video` or `youtube#playlist`.
    pub kind: String,
    #[serde(rename = "channelId", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

/// See: <https://developers.google.com/youtube/v3/docs/search#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultSnippet {
    /// The channel that published the resource; for channel results, the channel itself.
    #[serde(rename = "channelId")]
    pub channel_id: String,
    /// The title of the search result.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
