//! Order fetching from the paginated orders API.
//!
//! This module provides an `OrderSource` trait for retrieving single pages of
//! orders and `fetch_all_orders`, which walks pages 1, 2, ... sequentially until
//! the first page without orders.

mod http;
mod paginate;
mod types;

pub use http::HttpOrderSource;
pub use paginate::fetch_all_orders;
pub use types::*;
