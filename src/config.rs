//! Runtime configuration
//!
//! Built once at process entry and passed down; there is no mutable global
//! state. The run timestamp is captured at construction so every derived
//! path within one run agrees on it.

use std::path::PathBuf;

/// Official TWIC listing page with the weekly PGN zip links
pub const TWIC_URL: &str = "https://theweekinchess.com/twic/";

/// URL prefix for bundle downloads; `<prefix><id>g.zip` is a full bundle URL
pub const TWIC_ZIP_URL: &str = "https://theweekinchess.com/zips/twic";

/// Immutable per-run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listing page URL
    pub listing_url: String,
    /// Bundle URL prefix
    pub zip_url_prefix: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Process-start timestamp, `YYYYmmdd_HHMMSS`
    pub run_timestamp: String,
}

impl Config {
    /// Create a configuration for this run
    pub fn new(listing_url: String, zip_url_prefix: String) -> Self {
        Self {
            listing_url,
            zip_url_prefix,
            user_agent: format!("twicdl/{}", env!("CARGO_PKG_VERSION")),
            run_timestamp: chrono::Local::now().format("%Y%m%d_%H%M%S").to_string(),
        }
    }

    /// Full download URL for a bundle id
    pub fn bundle_url(&self, id: u32) -> String {
        format!("{}{}g.zip", self.zip_url_prefix, id)
    }

    /// Local file name for a bundle id
    pub fn bundle_filename(id: u32) -> String {
        format!("twic{}g.zip", id)
    }

    /// Default output directory for a resolved range, under the current directory
    pub fn default_output_dir(&self, start_id: u32, end_id: u32) -> PathBuf {
        PathBuf::from(format!(
            "TWIC-{}-{}_{}",
            self.run_timestamp, start_id, end_id
        ))
    }
}
