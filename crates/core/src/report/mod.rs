//! Report writer for allocation results.

mod error;
mod writer;

pub use error::ReportError;
pub use writer::{write_report, Report};
