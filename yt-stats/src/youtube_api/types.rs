//! Shared types and streaming infrastructure for the YouTube API client.

use crate::error::StatsError;
use std::collections::VecDeque;
use std::future::Future;
use std::num::NonZeroUsize;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio_stream::Stream;

type OneFuturePage<'a, F, T> =
    Pin<Box<dyn Future<Output = eyre::Result<(F, Page<T>)>> + 'a + Send>>;

/// One page of results from a YouTube API list endpoint.
#[derive(Debug)]
pub struct Page<T> {
    pub items: VecDeque<T>,
    /// Continuation token for the following page, `None` on the last page.
    pub next_page_token: Option<String>,
}

/// A paginated stream that automatically fetches subsequent pages from a YouTube API list endpoint.
///
/// This stream yields items one by one, automatically fetching the next page when the current
/// page is exhausted. Only supports forward pagination (no previous page support).
///
/// The stream stops as soon as a page comes back without a continuation token. Since that is
/// entirely up to the server, [`PagedStream::with_max_pages`] bounds the walk: once that many
/// pages have been fetched and the server still offers another one, the stream yields
/// [`StatsError::InfiniteLoopSuspected`] and ends.
pub struct PagedStream<'a, T, F> {
    /// Current batch of items from the most recent API response
    current_items: VecDeque<T>,
    /// Future representing the currently pending API request, if any
    pending_request: Option<OneFuturePage<'a, F, T>>,
    /// Number of pages received so far
    pages_fetched: usize,
    /// Upper bound on the number of pages to fetch
    max_pages: usize,
    /// Whether we've reached the end of all available data
    is_done: bool,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    /// Create a new PagedStream that starts by fetching the first page.
    pub fn new<Fut>(fetcher: F) -> Self
    where
        F: Fn(Option<String>) -> Fut,
        F: Send + 'a,
        Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
    {
        let first_page = async move {
            let page = fetcher(None).await?;
            Ok((fetcher, page))
        };
        Self {
            pending_request: Some(Box::pin(first_page)),
            current_items: VecDeque::new(),
            pages_fetched: 0,
            max_pages: usize::MAX,
            is_done: false,
        }
    }

    /// Fail instead of requesting page number `max_pages + 1`.
    pub fn with_max_pages(mut self, max_pages: NonZeroUsize) -> Self {
        self.max_pages = max_pages.get();
        self
    }

    /// Number of pages received so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}

impl<'a, T: Unpin, F> Unpin for PagedStream<'a, T, F> {}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut,
    F: Send + 'a,
    Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
{
    type Item = eyre::Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            // If we have items in the current batch, return the next one
            if let Some(item) = self.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            // If we're done (no more pages), return None
            if self.is_done {
                return Poll::Ready(None);
            }

            // If we have a pending request, poll it
            if let Some(pending) = self.pending_request.as_mut() {
                match pending.as_mut().poll(cx) {
                    Poll::Ready(Ok((fetcher, page))) => {
                        self.pages_fetched += 1;
                        self.pending_request = None;

                        match page.next_page_token {
                            Some(_) if self.pages_fetched >= self.max_pages => {
                                let pages = self.pages_fetched;
                                tracing::error!(pages, "page limit reached with more pages pending");
                                self.current_items.clear();
                                self.is_done = true;
                                return Poll::Ready(Some(Err(
                                    StatsError::InfiniteLoopSuspected { pages }.into()
                                )));
                            }
                            Some(next_token) => {
                                // Set up the future for the next page
                                // (but don't poll it yet)
                                self.pending_request = Some(Box::pin(async move {
                                    let page = fetcher(Some(next_token)).await?;
                                    Ok((fetcher, page))
                                }));
                            }
                            None => {
                                // If no next token, we're done
                                self.is_done = true;
                            }
                        }

                        self.current_items.extend(page.items);

                        // Continue the loop to try yielding an item
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        // Error fetching next page
                        self.pending_request = None;
                        self.is_done = true;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        // Still waiting for the response
                        return Poll::Pending;
                    }
                }
            } else {
                // No pending request and no next page token means we're done
                self.is_done = true;
                return Poll::Ready(None);
            }
        }
    }
}

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}
