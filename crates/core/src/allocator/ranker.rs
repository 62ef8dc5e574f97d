//! Filtering and ranking of qualifying orders.

use crate::orders::Order;

use super::{MatchPolicy, RankedOrder};

/// Keep unfulfilled orders that request `product` and sort them by requested
/// quantity, largest first.
///
/// Orders requesting the same quantity stay in fetch order.
pub fn rank_orders(orders: &[Order], product: &str, policy: MatchPolicy) -> Vec<RankedOrder> {
    let mut ranked: Vec<RankedOrder> = orders
        .iter()
        .filter(|order| !order.fulfilled && order.contains_product(product))
        .filter_map(|order| {
            order
                .requested_quantity(product, policy)
                .map(|quantity| RankedOrder {
                    order_id: order.id,
                    quantity,
                })
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranked
}
