//! Duration totals over a channel's uploads.

use crate::details::VideoRecord;
use crate::error::StatsError;

/// Total and average length of a channel's videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSummary {
    pub video_count: usize,
    pub total_duration_seconds: u64,
    /// Rounded down to whole seconds.
    pub average_duration_seconds: u64,
}

impl ChannelSummary {
    /// Sums and averages the durations of `records`.
    ///
    /// An empty list has no average, so it fails with [`StatsError::EmptyChannel`].
    pub fn from_records(records: &[VideoRecord]) -> Result<Self, StatsError> {
        if records.is_empty() {
            return Err(StatsError::EmptyChannel);
        }

        let total_duration_seconds = records.iter().map(|r| r.duration_seconds).sum::<u64>();
        let video_count = records.len();
        Ok(Self {
            video_count,
            total_duration_seconds,
            average_duration_seconds: total_duration_seconds / video_count as u64,
        })
    }
}
