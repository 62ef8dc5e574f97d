//! Fetch, allocate and report, in that order.

use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::allocator::allocate_orders;
use crate::config::Config;
use crate::fetcher::{fetch_all_orders, FetchError, OrderSource};
use crate::report::{write_report, Report, ReportError};

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// What was written.
    pub report: Report,
    /// Where it was written.
    pub output_path: PathBuf,
    pub pages_fetched: u32,
    pub orders_fetched: usize,
    /// Inventory before allocation.
    pub initial_inventory: u32,
}

/// Run the whole job against `source`.
///
/// Nothing is written unless every page was fetched successfully.
pub async fn run_pipeline(
    source: &dyn OrderSource,
    config: &Config,
) -> Result<PipelineOutcome, PipelineError> {
    let fetched = fetch_all_orders(source, config.api.max_pages).await?;

    let result = allocate_orders(
        &fetched.orders,
        fetched.available_inventory,
        &config.allocation.target_product,
        config.allocation.match_policy,
    );
    info!(
        product = %config.allocation.target_product,
        granted = result.granted.len(),
        unfulfilled = result.unfulfilled_order_ids.len(),
        remaining = result.remaining_inventory,
        "Allocation complete"
    );

    let report = Report::from(&result);
    write_report(&config.report.output_path, &report)?;

    Ok(PipelineOutcome {
        report,
        output_path: config.report.output_path.clone(),
        pages_fetched: fetched.pages_fetched,
        orders_fetched: fetched.orders.len(),
        initial_inventory: fetched.available_inventory,
    })
}
