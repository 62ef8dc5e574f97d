//! Priority allocation of a finite inventory pool across qualifying orders.
//!
//! Qualifying orders (unfulfilled, containing the target product) are ranked by
//! requested quantity, largest first, and granted greedily while stock lasts.
//! An order is either granted in full or reported as unfulfilled; inventory is
//! never split across an order.
//!
//! # Example
//!
//! ```ignore
//! use orderfill_core::allocator::{allocate_orders, MatchPolicy};
//!
//! let result = allocate_orders(&orders, 10, "Cookie", MatchPolicy::First);
//! println!("{} left, unfulfilled: {:?}", result.remaining_inventory, result.unfulfilled_order_ids);
//! ```

mod greedy;
mod ranker;
mod types;

pub use greedy::{allocate, allocate_orders};
pub use ranker::rank_orders;
pub use types::{AllocationResult, MatchPolicy, RankedOrder};
