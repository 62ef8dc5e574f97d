//! Types for the order fetcher.

use async_trait::async_trait;
use thiserror::Error;

use crate::orders::{Order, OrdersPage};

/// All orders collected across the non-empty pages of a listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedOrders {
    /// Orders in page order, then within-page order.
    pub orders: Vec<Order>,
    /// Inventory count reported by the last page that contained orders
    /// (0 when no page did).
    pub available_inventory: u32,
    /// Number of pages that contained orders.
    pub pages_fetched: u32,
}

/// Errors that can occur while fetching orders.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Orders API connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Orders API request timed out")]
    Timeout,

    #[error("Orders API error: {0}")]
    ApiError(String),

    #[error("Invalid orders response for page {page}: {reason}")]
    InvalidResponse { page: u32, reason: String },

    #[error("Orders API still returning orders after {0} pages")]
    PageLimitExceeded(u32),
}

/// A source of paginated orders.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Returns the name of this source implementation.
    fn name(&self) -> &str;

    /// Fetches a single page (1-based).
    async fn fetch_page(&self, page: u32) -> Result<OrdersPage, FetchError>;
}
