//! Sequential walk over every page of the orders listing.

use tracing::{debug, info, warn};

use super::{FetchError, FetchedOrders, OrderSource};

/// Fetch every order from `source`.
///
/// Pages are requested one at a time starting at 1. The first page whose order
/// list is missing or empty ends the walk; pages after it are never requested.
/// The inventory count is taken from the last page that carried orders.
///
/// With `max_pages` set, a listing that still has orders on page `max_pages`
/// fails with [`FetchError::PageLimitExceeded`] rather than being read further.
pub async fn fetch_all_orders(
    source: &dyn OrderSource,
    max_pages: Option<u32>,
) -> Result<FetchedOrders, FetchError> {
    let mut fetched = FetchedOrders::default();
    let mut page: u32 = 1;

    loop {
        if let Some(limit) = max_pages {
            if page > limit {
                return Err(FetchError::PageLimitExceeded(limit));
            }
        }

        let response = source.fetch_page(page).await?;
        let orders = match response.orders {
            Some(orders) if !orders.is_empty() => orders,
            _ => {
                debug!(source = source.name(), page = page, "Reached empty page");
                break;
            }
        };

        if fetched.pages_fetched > 0
            && fetched.available_inventory != response.available_cookies
        {
            warn!(
                page = page,
                previous = fetched.available_inventory,
                current = response.available_cookies,
                "Inventory count changed between pages, using latest"
            );
        }

        debug!(
            source = source.name(),
            page = page,
            orders = orders.len(),
            available = response.available_cookies,
            "Fetched orders page"
        );

        fetched.available_inventory = response.available_cookies;
        fetched.orders.extend(orders);
        fetched.pages_fetched += 1;
        page += 1;
    }

    info!(
        source = source.name(),
        pages = fetched.pages_fetched,
        orders = fetched.orders.len(),
        available = fetched.available_inventory,
        "Fetched all orders"
    );

    Ok(fetched)
}
