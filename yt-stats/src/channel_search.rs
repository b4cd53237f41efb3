//! Keyword search over channels.

use crate::platform::VideoPlatform;
use eyre::WrapErr;
use tracing::instrument;

/// Most hits a search returns; only the first page is ever requested.
pub const MAX_SEARCH_RESULTS: u32 = 10;

/// A channel returned by [`search_channels`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMatch {
    pub title: String,
    pub channel_id: String,
}

/// Finds up to [`MAX_SEARCH_RESULTS`] channels matching `keyword`, most relevant first.
///
/// No matches is an empty list, not an error.
#[instrument(skip(api))]
pub async fn search_channels<P: VideoPlatform>(
    api: &P,
    keyword: &str,
) -> eyre::Result<Vec<ChannelMatch>> {
    let results = api
        .search_channels(keyword, MAX_SEARCH_RESULTS)
        .await
        .wrap_err_with(|| format!("search channels matching {keyword:?}"))?;

    Ok(results
        .into_iter()
        .take(MAX_SEARCH_RESULTS as usize)
        .map(|result| ChannelMatch {
            title: result.snippet.title,
            channel_id: result.snippet.channel_id,
        })
        .collect())
}
