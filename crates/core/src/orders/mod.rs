//! Order data model as served by the paginated orders API.

mod types;

pub use types::*;
