//! Drives the real client against a mock YouTube Data API.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yt_stats::StatsError;
use yt_stats::channel_search::search_channels;
use yt_stats::report::channel_duration_report;
use yt_stats::uploads::{DEFAULT_MAX_PAGES, list_channel_video_ids};
use yt_stats::youtube_api::{ApiKey, YouTubeClient};

const KEY: &str = "test-key";

fn client(server: &MockServer) -> YouTubeClient {
    YouTubeClient::new(ApiKey::new(KEY), reqwest::Client::new()).with_base_url(server.uri())
}

fn stats_error(err: &eyre::Report) -> &StatsError {
    err.downcast_ref::<StatsError>()
        .unwrap_or_else(|| panic!("not a StatsError: {err:?}"))
}

async fn mount_channel(server: &MockServer, channel_id: &str, uploads: &str) {
    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("part", "contentDetails"))
        .and(query_param("id", channel_id))
        .and(query_param("key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#channelListResponse",
            "pageInfo": { "totalResults": 1, "resultsPerPage": 5 },
            "items": [{
                "kind": "youtube#channel",
                "id": channel_id,
                "contentDetails": { "relatedPlaylists": { "likes": "", "uploads": uploads } }
            }]
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn playlist_page(video_ids: &[&str], next_page_token: Option<&str>) -> serde_json::Value {
    let items: Vec<_> = video_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            json!({
                "kind": "youtube#playlistItem",
                "id": format!("item-{id}"),
                "snippet": {
                    "title": format!("Video {id}"),
                    "position": i,
                    "resourceId": { "kind": "youtube#video", "videoId": id }
                }
            })
        })
        .collect();
    let mut page = json!({
        "kind": "youtube#playlistItemListResponse",
        "pageInfo": { "totalResults": 3, "resultsPerPage": 50 },
        "items": items,
    });
    if let Some(token) = next_page_token {
        page["nextPageToken"] = json!(token);
    }
    page
}

#[tokio::test]
async fn test_walks_playlist_pages() {
    let server = MockServer::start().await;
    mount_channel(&server, "UC1", "UU1").await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("pageToken", "PAGE2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(&["c"], None)))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "UU1"))
        .and(query_param("maxResults", "50"))
        .and(query_param("part", "snippet"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(playlist_page(&["a", "b"], Some("PAGE2"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ids = list_channel_video_ids(&client(&server), "UC1", DEFAULT_MAX_PAGES)
        .await
        .unwrap();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_unknown_channel_has_no_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#channelListResponse",
            "pageInfo": { "totalResults": 0, "resultsPerPage": 5 }
        })))
        .mount(&server)
        .await;

    let err = list_channel_video_ids(&client(&server), "UCmissing", DEFAULT_MAX_PAGES)
        .await
        .unwrap_err();
    assert!(
        matches!(stats_error(&err), StatsError::ChannelNotFound(id) if id == "UCmissing"),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_duration_report_end_to_end() {
    let server = MockServer::start().await;
    mount_channel(&server, "UC1", "UU1").await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(&["a", "b", "c"], None)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "snippet,contentDetails"))
        .and(query_param("id", "a,b,c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#videoListResponse",
            "pageInfo": { "totalResults": 3, "resultsPerPage": 3 },
            "items": [
                { "id": "a", "snippet": { "title": "First" }, "contentDetails": { "duration": "PT1H2M3S" } },
                { "id": "b", "snippet": { "title": "Second" }, "contentDetails": { "duration": "PT45M" } },
                { "id": "c", "snippet": { "title": "Third" }, "contentDetails": { "duration": "PT0S" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = channel_duration_report(&client(&server), "UC1", DEFAULT_MAX_PAGES)
        .await
        .unwrap();
    assert_eq!(
        report
            .videos
            .iter()
            .map(|v| (v.id.as_str(), v.title.as_str(), v.duration_seconds))
            .collect::<Vec<_>>(),
        vec![("a", "First", 3723), ("b", "Second", 2700), ("c", "Third", 0)]
    );
    assert_eq!(report.summary.total_duration_seconds, 6423);
    assert_eq!(report.summary.average_duration_seconds, 2141);
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{ "reason": "quotaExceeded", "domain": "youtube.quota" }]
            }
        })))
        .mount(&server)
        .await;

    let err = search_channels(&client(&server), "rust").await.unwrap_err();
    let StatsError::ApiRequestFailure(message) = stats_error(&err) else {
        panic!("unexpected error: {err:?}");
    };
    assert!(message.contains("403"), "{message}");
    assert!(message.contains("exceeded your quota"), "{message}");
    assert!(!format!("{err:?}").contains(KEY), "{err:?}");
}

#[tokio::test]
async fn test_search_response_without_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#searchListResponse",
            "regionCode": "US",
            "pageInfo": { "totalResults": 0, "resultsPerPage": 0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let matches = search_channels(&client(&server), "zzzz").await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_search_without_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("type", "channel"))
        .and(query_param("maxResults", "10"))
        .and(query_param("q", "nothing matches this"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#searchListResponse",
            "regionCode": "US",
            "pageInfo": { "totalResults": 0, "resultsPerPage": 0 },
            "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let matches = search_channels(&client(&server), "nothing matches this")
        .await
        .unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_search_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#searchListResponse",
            "pageInfo": { "totalResults": 2, "resultsPerPage": 10 },
            "items": [
                {
                    "kind": "youtube#searchResult",
                    "id": { "kind": "youtube#channel", "channelId": "UCa" },
                    "snippet": { "channelId": "UCa", "title": "Alpha", "description": "first" }
                },
                {
                    "kind": "youtube#searchResult",
                    "id": { "kind": "youtube#channel", "channelId": "UCb" },
                    "snippet": { "channelId": "UCb", "title": "Beta" }
                }
            ]
        })))
        .mount(&server)
        .await;

    let matches = search_channels(&client(&server), "a").await.unwrap();
    assert_eq!(
        matches
            .iter()
            .map(|m| (m.title.as_str(), m.channel_id.as_str()))
            .collect::<Vec<_>>(),
        vec![("Alpha", "UCa"), ("Beta", "UCb")]
    );
}

#[tokio::test]
async fn test_malformed_body_is_a_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = yt_stats::details::fetch_video_details(&client(&server), &["a".to_string()])
        .await
        .unwrap_err();
    assert!(
        matches!(stats_error(&err), StatsError::ApiRequestFailure(_)),
        "{err:?}"
    );
}
