use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::allocator::MatchPolicy;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub allocation: AllocationConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Orders API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Paginated orders endpoint. The `page` query parameter is appended per request.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (0 = no explicit timeout)
    #[serde(default)]
    pub timeout_secs: u32,
    /// Upper bound on pages requested before giving up (default: unbounded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
            max_pages: None,
        }
    }
}

fn default_base_url() -> String {
    "https://backend-challenge-fall-2017.herokuapp.com/orders.json".to_string()
}

/// Allocation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AllocationConfig {
    /// Product whose inventory is being allocated (exact, case-sensitive match)
    #[serde(default = "default_target_product")]
    pub target_product: String,
    /// How to read the requested quantity when an order has several matching line items
    #[serde(default)]
    pub match_policy: MatchPolicy,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            target_product: default_target_product(),
            match_policy: MatchPolicy::default(),
        }
    }
}

fn default_target_product() -> String {
    "Cookie".to_string()
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.json")
}
