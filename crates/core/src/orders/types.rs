//! Wire types for the orders API.

use serde::{Deserialize, Serialize};

use crate::allocator::MatchPolicy;

/// A customer order. Never mutated after it is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier, unique within the dataset.
    pub id: u64,
    /// Whether the order has already been fulfilled.
    pub fulfilled: bool,
    /// Customer contact (carried through, not used for allocation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Line items in the order.
    #[serde(default)]
    pub products: Vec<LineItem>,
}

impl Order {
    /// Whether any line item is for `product`.
    pub fn contains_product(&self, product: &str) -> bool {
        self.products.iter().any(|item| item.title == product)
    }

    /// Quantity of `product` this order asks for, or `None` if it has no
    /// matching line item.
    pub fn requested_quantity(&self, product: &str, policy: MatchPolicy) -> Option<u32> {
        let mut matching = self
            .products
            .iter()
            .filter(|item| item.title == product)
            .map(|item| item.amount);

        match policy {
            MatchPolicy::First => matching.next(),
            MatchPolicy::Sum => {
                let first = matching.next()?;
                Some(matching.fold(first, |total, amount| total.saturating_add(amount)))
            }
        }
    }
}

/// A (product, quantity, unit price) entry within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name, matched exactly.
    pub title: String,
    /// Units requested.
    pub amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

/// One page of the orders API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    /// Units of the target product available (same global value on every page).
    /// Read only from pages that carry orders.
    #[serde(default)]
    pub available_cookies: u32,
    /// Orders on this page. Missing or empty marks the end of the listing.
    #[serde(default)]
    pub orders: Option<Vec<Order>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl OrdersPage {
    /// Whether this page carries at least one order.
    pub fn has_orders(&self) -> bool {
        self.orders.as_ref().is_some_and(|orders| !orders.is_empty())
    }
}

/// Pagination metadata. Informational only; never used to decide when to stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u32,
}
