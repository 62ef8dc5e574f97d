//! Testing utilities and mock implementations.
//!
//! Provides an in-memory `OrderSource` and fixture builders so the pipeline
//! can be exercised without a live orders API.

mod mock_order_source;

pub use mock_order_source::MockOrderSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::orders::{LineItem, Order, OrdersPage, Pagination};

    /// Create an order with `(title, amount)` line items.
    pub fn order(id: u64, fulfilled: bool, items: &[(&str, u32)]) -> Order {
        Order {
            id,
            fulfilled,
            customer_email: Some(format!("customer{}@example.com", id)),
            products: items
                .iter()
                .map(|&(title, amount)| LineItem {
                    title: title.to_string(),
                    amount,
                    unit_price: Some(0.65),
                })
                .collect(),
        }
    }

    /// Create an unfulfilled order with `(title, amount)` line items.
    pub fn order_with_items(id: u64, items: &[(&str, u32)]) -> Order {
        order(id, false, items)
    }

    /// Create a page carrying `orders`.
    pub fn page(available: u32, orders: Vec<Order>) -> OrdersPage {
        let per_page = orders.len() as u32;
        OrdersPage {
            available_cookies: available,
            orders: Some(orders),
            pagination: Some(Pagination {
                current_page: 1,
                per_page,
                total: per_page,
            }),
        }
    }

    /// Create a page with an empty order list.
    pub fn empty_page(available: u32) -> OrdersPage {
        page(available, Vec::new())
    }

    /// Create a page with no `orders` field at all.
    pub fn missing_orders_page(available: u32) -> OrdersPage {
        OrdersPage {
            available_cookies: available,
            orders: None,
            pagination: None,
        }
    }
}
