pub mod allocator;
pub mod config;
pub mod fetcher;
pub mod orders;
pub mod pipeline;
pub mod report;
pub mod testing;

pub use allocator::{
    allocate, allocate_orders, rank_orders, AllocationResult, MatchPolicy, RankedOrder,
};
pub use config::{
    load_config, load_config_from_str, validate_config, AllocationConfig, ApiConfig, Config,
    ConfigError, ReportConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH,
};
pub use fetcher::{fetch_all_orders, FetchError, FetchedOrders, HttpOrderSource, OrderSource};
pub use orders::{LineItem, Order, OrdersPage, Pagination};
pub use pipeline::{run_pipeline, PipelineError, PipelineOutcome};
pub use report::{write_report, Report, ReportError};
