//! Command line arguments
//!
//! Every connection flag can also come from the environment (or `.env`).

use std::path::PathBuf;

use clap::Parser;
use munchies_client::config::{DEFAULT_BASE_URL, DEFAULT_STATUS_CONCURRENCY, DEFAULT_TIMEOUT_SECS};
use munchies_client::{ClientConfig, Storefront};

#[derive(Parser, Debug)]
#[command(name = "munchies", version, about = "Browse the Munchies restaurant directory")]
pub struct Args {
    /// Backend base URL
    #[arg(long, env = "MUNCHIES_BACKEND_URL", default_value = DEFAULT_BASE_URL)]
    pub backend_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "MUNCHIES_REQUEST_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum concurrent open-status lookups
    #[arg(long, env = "MUNCHIES_STATUS_CONCURRENCY", default_value_t = DEFAULT_STATUS_CONCURRENCY)]
    pub status_concurrency: usize,

    /// Toggle a category filter (repeatable)
    #[arg(long = "category", value_name = "FILTER_ID")]
    pub categories: Vec<String>,

    /// Toggle a price range (repeatable)
    #[arg(long = "price-range", value_name = "PRICE_RANGE_ID")]
    pub price_ranges: Vec<String>,

    /// Toggle a delivery time in minutes (repeatable)
    #[arg(long = "delivery-time", value_name = "MINUTES")]
    pub delivery_times: Vec<u32>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, env = "MUNCHIES_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Also write daily rotating log files here
    #[arg(long, env = "MUNCHIES_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.backend_url)
            .with_timeout(self.timeout)
            .with_status_concurrency(self.status_concurrency)
    }

    /// Replay the selection flags as toggles, in command line order per facet
    pub fn apply_selection(&self, storefront: &mut Storefront) {
        for id in &self.categories {
            storefront.toggle_category(id.as_str());
        }
        for id in &self.price_ranges {
            storefront.toggle_price_range(id.as_str());
        }
        for &minutes in &self.delivery_times {
            storefront.toggle_delivery_time(minutes);
        }
    }
}
