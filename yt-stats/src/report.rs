//! The channel duration report: enumerate uploads, fetch their details, aggregate.

use crate::details::{VideoRecord, fetch_video_details};
use crate::platform::VideoPlatform;
use crate::summary::ChannelSummary;
use crate::uploads::list_channel_video_ids;
use eyre::WrapErr;
use std::num::NonZeroUsize;
use tracing::instrument;

/// Every upload of a channel along with their combined length.
#[derive(Debug, Clone)]
pub struct ChannelReport {
    /// In batch order, see [`fetch_video_details`].
    pub videos: Vec<VideoRecord>,
    pub summary: ChannelSummary,
}

/// Builds the duration report for `channel_id`.
///
/// Both stages must succeed before anything is aggregated, so a caller never sees a
/// summary of a partial upload list.
#[instrument(skip(api))]
pub async fn channel_duration_report<P: VideoPlatform>(
    api: &P,
    channel_id: &str,
    max_pages: NonZeroUsize,
) -> eyre::Result<ChannelReport> {
    let video_ids = list_channel_video_ids(api, channel_id, max_pages).await?;
    let videos = fetch_video_details(api, &video_ids)
        .await
        .wrap_err_with(|| format!("fetch video details for channel {channel_id}"))?;
    let summary = ChannelSummary::from_records(&videos)?;

    tracing::info!(
        channel_id,
        videos = summary.video_count,
        total_seconds = summary.total_duration_seconds,
        "aggregated channel durations"
    );

    Ok(ChannelReport { videos, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use crate::platform::fake::FakePlatform;
    use crate::uploads::DEFAULT_MAX_PAGES;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_full_pipeline() {
        // durations are 1..=120 seconds
        let api = FakePlatform::with_uploads(120, 50);
        let report = channel_duration_report(&api, "UCfake", DEFAULT_MAX_PAGES)
            .await
            .unwrap();

        assert_eq!(report.videos.len(), 120);
        assert_eq!(report.summary.total_duration_seconds, 120 * 121 / 2);
        assert_eq!(report.summary.average_duration_seconds, 60);
        assert_eq!(api.page_requests().len(), 3);
        assert_eq!(api.detail_requests().len(), 3);
    }

    #[tokio::test]
    async fn test_channel_without_uploads() {
        let api = FakePlatform::with_uploads(0, 50);
        let err = channel_duration_report(&api, "UCfake", DEFAULT_MAX_PAGES)
            .await
            .unwrap_err();
        assert!(
            matches!(err.downcast_ref::<StatsError>(), Some(StatsError::EmptyChannel)),
            "{err:?}"
        );
        assert!(api.detail_requests().is_empty());
    }

    #[tokio::test]
    async fn test_detail_failure_yields_no_report() {
        let api = FakePlatform {
            fail_detail_request: Some(0),
            ..FakePlatform::with_uploads(10, 50)
        };
        let result = channel_duration_report(&api, "UCfake", DEFAULT_MAX_PAGES).await;
        assert!(result.is_err(), "{result:?}");
    }
}
