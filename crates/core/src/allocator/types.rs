//! Types for the allocator.

use serde::{Deserialize, Serialize};

/// How an order's requested quantity is read when it has more than one line
/// item for the target product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Use the first matching line item.
    #[default]
    First,
    /// Add up every matching line item.
    Sum,
}

/// A qualifying order with the quantity it requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedOrder {
    pub order_id: u64,
    pub quantity: u32,
}

/// Outcome of one allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationResult {
    /// Inventory left after every grant.
    pub remaining_inventory: u32,
    /// Orders that could not be granted, in the order they were considered.
    pub unfulfilled_order_ids: Vec<u64>,
    /// Orders that were granted, in the order they were considered.
    pub granted: Vec<RankedOrder>,
}

impl AllocationResult {
    /// Total units handed out.
    pub fn granted_quantity(&self) -> u64 {
        self.granted.iter().map(|o| u64::from(o.quantity)).sum()
    }
}
