//! YouTube PlaylistItems API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `playlistItems.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#playlistItemListResponse`.
    pub kind: String,
    #[serde(default)]
    pub items: VecDeque<PlaylistItem>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `playlistItem` resource identifies a video included in a playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// The ID of the playlist item itself, not of the video it refers to.
    pub id: String,
    pub snippet: PlaylistItemSnippet,
}

impl PlaylistItem {
    /// The ID of the video this item points at.
    pub fn video_id(&self) -> &str {
        &self.snippet.resource_id.video_id
    }
}

/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemSnippet {
    /// The item's title.
    #[serde(default)]
    pub title: String,
    /// The order in which the item appears in the playlist, starting at zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Identifies the resource that was added to the playlist.
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

/// Reference to the video a playlist item points at.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceId {
    /// The kind of the referred resource, `youtube#video` for uploads.
    pub kind: String,
    #[serde(rename = "videoId")]
    pub video_id: String,
}
