//! Batched video detail lookups.

use crate::duration::parse_duration_seconds;
use crate::platform::VideoPlatform;
use crate::youtube_api::Video;
use eyre::WrapErr;
use tracing::instrument;

/// Most ids `videos.list` accepts in one request.
pub const MAX_IDS_PER_REQUEST: usize = 50;

/// A single upload and its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub duration_seconds: u64,
}

impl TryFrom<Video> for VideoRecord {
    type Error = eyre::Report;

    fn try_from(video: Video) -> eyre::Result<Self> {
        let duration_seconds = parse_duration_seconds(&video.content_details.duration)
            .wrap_err_with(|| format!("decode duration of video {}", video.id))?;
        Ok(Self {
            id: video.id,
            title: video.snippet.title,
            duration_seconds,
        })
    }
}

/// Fetches title and length for every id in `video_ids`.
///
/// Issues one request per [`MAX_IDS_PER_REQUEST`] ids. Results come back in batch order; within
/// a batch they follow whatever order the platform responds in. Any failed batch aborts the
/// whole fetch. Videos the platform leaves out of a response (deleted, private) are skipped.
#[instrument(skip_all, fields(videos = video_ids.len()))]
pub async fn fetch_video_details<P: VideoPlatform>(
    api: &P,
    video_ids: &[String],
) -> eyre::Result<Vec<VideoRecord>> {
    let mut records = Vec::with_capacity(video_ids.len());

    for (batch_index, batch) in video_ids.chunks(MAX_IDS_PER_REQUEST).enumerate() {
        let videos = api.list_video_details(batch).await.wrap_err_with(|| {
            format!(
                "fetch details for batch {} ({} videos)",
                batch_index + 1,
                batch.len()
            )
        })?;

        if videos.len() != batch.len() {
            tracing::debug!(
                batch = batch_index + 1,
                requested = batch.len(),
                returned = videos.len(),
                "platform omitted some videos from the batch"
            );
        }

        for video in videos {
            records.push(VideoRecord::try_from(video)?);
        }
    }

    Ok(records)
}
