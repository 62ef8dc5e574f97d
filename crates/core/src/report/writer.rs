//! JSON report of remaining inventory and unfulfilled orders.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::allocator::AllocationResult;

use super::ReportError;

/// The output artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub remaining_cookies: u32,
    pub unfulfilled_orders: Vec<u64>,
}

impl From<&AllocationResult> for Report {
    fn from(result: &AllocationResult) -> Self {
        Self {
            remaining_cookies: result.remaining_inventory,
            unfulfilled_orders: result.unfulfilled_order_ids.clone(),
        }
    }
}

/// Write `report` to `path` as compact JSON, replacing any existing file.
///
/// The file is flushed and closed before this returns.
pub fn write_report(path: &Path, report: &Report) -> Result<(), ReportError> {
    let io_err = |source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, report)?;
    writer.flush().map_err(io_err)?;
    writer
        .into_inner()
        .map_err(|e| io_err(e.into_error()))?
        .sync_all()
        .map_err(io_err)?;

    info!(
        path = %path.display(),
        remaining = report.remaining_cookies,
        unfulfilled = report.unfulfilled_orders.len(),
        "Report written"
    );
    Ok(())
}
