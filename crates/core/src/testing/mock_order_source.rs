//! Mock order source for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::fetcher::{FetchError, OrderSource};
use crate::orders::OrdersPage;

/// Mock implementation of the OrderSource trait.
///
/// Serves pages from memory in the order they were configured (page 1 is the
/// first page pushed). Requests past the configured pages get an empty page.
///
/// # Example
///
/// ```rust,ignore
/// use orderfill_core::testing::{fixtures, MockOrderSource};
///
/// let source = MockOrderSource::with_pages(vec![
///     fixtures::page(10, vec![fixtures::order(1, false, &[("Cookie", 3)])]),
/// ]);
/// source.fail_at_page(2, FetchError::Timeout).await;
///
/// let result = fetch_all_orders(&source, None).await;
/// assert_eq!(source.requested_pages().await, vec![1, 2]);
/// ```
#[derive(Debug, Default)]
pub struct MockOrderSource {
    /// Configured pages, page 1 first.
    pages: Arc<RwLock<Vec<OrdersPage>>>,
    /// Page numbers requested so far.
    requests: Arc<RwLock<Vec<u32>>>,
    /// If set, fetching this page fails with the error (once).
    failure: Arc<RwLock<Option<(u32, FetchError)>>>,
}

impl MockOrderSource {
    /// Create a new mock source with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source serving the given pages.
    pub fn with_pages(pages: Vec<OrdersPage>) -> Self {
        Self {
            pages: Arc::new(RwLock::new(pages)),
            ..Self::default()
        }
    }

    /// Append a page after the configured ones.
    pub async fn push_page(&self, page: OrdersPage) {
        self.pages.write().await.push(page);
    }

    /// Make the request for `page` fail with `error`.
    pub async fn fail_at_page(&self, page: u32, error: FetchError) {
        *self.failure.write().await = Some((page, error));
    }

    /// Page numbers requested so far, in request order.
    pub async fn requested_pages(&self) -> Vec<u32> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl OrderSource for MockOrderSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_page(&self, page: u32) -> Result<OrdersPage, FetchError> {
        self.requests.write().await.push(page);

        {
            let mut failure = self.failure.write().await;
            if failure.as_ref().is_some_and(|(at, _)| *at == page) {
                if let Some((_, error)) = failure.take() {
                    return Err(error);
                }
            }
        }

        let pages = self.pages.read().await;
        let index = page.saturating_sub(1) as usize;
        Ok(pages.get(index).cloned().unwrap_or(OrdersPage {
            available_cookies: 0,
            orders: None,
            pagination: None,
        }))
    }
}
