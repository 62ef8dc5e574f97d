//! Greedy allocation over ranked orders.

use tracing::debug;

use crate::orders::Order;

use super::{rank_orders, AllocationResult, MatchPolicy, RankedOrder};

/// Grant `available` units to `ranked` orders in sequence.
///
/// An order is granted only when its full quantity fits in what is left;
/// otherwise it is recorded as unfulfilled and consumes nothing, and later
/// (smaller) orders may still be granted.
pub fn allocate(ranked: &[RankedOrder], available: u32) -> AllocationResult {
    let mut remaining = available;
    let mut unfulfilled_order_ids = Vec::new();
    let mut granted = Vec::new();

    for order in ranked {
        if order.quantity <= remaining {
            remaining -= order.quantity;
            debug!(
                order_id = order.order_id,
                quantity = order.quantity,
                remaining = remaining,
                "Order granted"
            );
            granted.push(*order);
        } else {
            debug!(
                order_id = order.order_id,
                quantity = order.quantity,
                remaining = remaining,
                "Insufficient inventory for order"
            );
            unfulfilled_order_ids.push(order.order_id);
        }
    }

    AllocationResult {
        remaining_inventory: remaining,
        unfulfilled_order_ids,
        granted,
    }
}

/// Rank the qualifying orders for `product` and allocate `available` units
/// across them.
pub fn allocate_orders(
    orders: &[Order],
    available: u32,
    product: &str,
    policy: MatchPolicy,
) -> AllocationResult {
    let ranked = rank_orders(orders, product, policy);
    debug!(
        product = product,
        qualifying = ranked.len(),
        available = available,
        "Ranked qualifying orders"
    );
    allocate(&ranked, available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::order;

    fn ranked(pairs: &[(u64, u32)]) -> Vec<RankedOrder> {
        pairs
            .iter()
            .map(|&(order_id, quantity)| RankedOrder { order_id, quantity })
            .collect()
    }

    #[test]
    fn test_skips_order_that_does_not_fit_and_continues() {
        let result = allocate(&ranked(&[(1, 6), (2, 5), (3, 3)]), 10);
        assert_eq!(result.remaining_inventory, 1);
        assert_eq!(result.unfulfilled_order_ids, vec![2]);
        assert_eq!(result.granted, ranked(&[(1, 6), (3, 3)]));
    }

    #[test]
    fn test_exact_fit_is_granted() {
        let result = allocate(&ranked(&[(1, 4), (2, 6)]), 10);
        assert_eq!(result.remaining_inventory, 0);
        assert!(result.unfulfilled_order_ids.is_empty());
    }

    #[test]
    fn test_zero_inventory_leaves_everything_unfulfilled() {
        let result = allocate(&ranked(&[(4, 2), (8, 1)]), 0);
        assert_eq!(result.remaining_inventory, 0);
        assert_eq!(result.unfulfilled_order_ids, vec![4, 8]);
        assert!(result.granted.is_empty());
    }

    #[test]
    fn test_zero_quantity_is_always_granted() {
        let result = allocate(&ranked(&[(1, 0)]), 0);
        assert_eq!(result.granted.len(), 1);
        assert!(result.unfulfilled_order_ids.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = allocate(&[], 12);
        assert_eq!(result.remaining_inventory, 12);
        assert!(result.unfulfilled_order_ids.is_empty());
    }

    #[test]
    fn test_every_qualifying_order_is_granted_or_unfulfilled() {
        let orders = vec![
            order(1, false, &[("Cookie", 8)]),
            order(2, false, &[("Cookie", 2), ("Pie", 3)]),
            order(3, true, &[("Cookie", 1)]),
            order(4, false, &[("Cookie", 5)]),
            order(5, false, &[("Pie", 20)]),
            order(6, false, &[("Cookie", 3)]),
            order(7, false, &[("Cookie", 3)]),
        ];
        let initial = 14;

        let result = allocate_orders(&orders, initial, "Cookie", MatchPolicy::First);

        // 8 granted (6 left), 5 granted (1 left), 3, 3, 2 unfulfilled
        assert_eq!(result.remaining_inventory, 1);
        assert_eq!(result.unfulfilled_order_ids, vec![6, 7, 2]);

        let granted_ids: Vec<u64> = result.granted.iter().map(|o| o.order_id).collect();
        assert_eq!(granted_ids, vec![1, 4]);
        assert_eq!(
            result.granted_quantity() + u64::from(result.remaining_inventory),
            u64::from(initial)
        );

        for id in [1, 2, 4, 6, 7] {
            let in_granted = granted_ids.contains(&id);
            let in_unfulfilled = result.unfulfilled_order_ids.contains(&id);
            assert!(in_granted ^ in_unfulfilled, "order {} misaccounted", id);
        }
        for id in [3, 5] {
            assert!(!granted_ids.contains(&id));
            assert!(!result.unfulfilled_order_ids.contains(&id));
        }
    }
}
