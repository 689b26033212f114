//! Download command implementation
//!
//! Orchestrates a run: build the selection, fetch and index the listing,
//! resolve the range, then download each bundle in the resolved slice in
//! ascending order. Bundle failures are reported and the loop continues;
//! nothing is retried.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, TwicError};
use crate::fetch::HttpClient;
use crate::index::BundleIndex;
use crate::progress::ProgressDisplay;
use crate::report::Reporter;
use crate::select::{self, Selection};

/// Run the download command
pub fn run(config: &Config, args: &Cli, reporter: &dyn Reporter) -> Result<()> {
    // Validated before any network activity
    let selection = Selection::from_args(args.all, args.start, args.end)?;

    let client = HttpClient::new(&config.user_agent)?;
    let index = build_index(&client, config, reporter);
    let range = select::resolve(&selection, &index, reporter)?;

    let slice = range.slice(&index);
    reporter.info(&format!(
        "Downloading bundles from {} to {}",
        range.start_id, range.end_id
    ));
    reporter.info(&format!("Total bundles to download: {}", slice.len()));

    let output_dir = match args.output {
        Some(ref dir) => dir.clone(),
        None => config.default_output_dir(range.start_id, range.end_id),
    };
    fs::create_dir_all(&output_dir).map_err(|e| TwicError::FileWriteFailed {
        path: output_dir.display().to_string(),
        reason: e.to_string(),
    })?;
    reporter.info(&format!("Output folder: {}", output_dir.display()));

    let progress = ProgressDisplay::new(slice.len() as u64);
    for bundle in slice {
        // Show the link as discovered on the listing page
        progress.update(&bundle.href);
        download_bundle(
            &client,
            config,
            bundle.id,
            &output_dir,
            args.force,
            reporter,
        );
        progress.inc();
    }
    progress.finish();

    Ok(())
}

/// Fetch the listing and build the canonical index.
///
/// A fetch failure is reported and yields an empty index; resolution then
/// surfaces `EmptyListing` since no work can proceed without an index.
fn build_index(client: &HttpClient, config: &Config, reporter: &dyn Reporter) -> BundleIndex {
    match client.get_listing(&config.listing_url) {
        Ok(html) => BundleIndex::from_html(&html),
        Err(e) => {
            reporter.error(&e.to_string());
            BundleIndex::default()
        }
    }
}

/// Download one bundle, best-effort. Failures are reported, never propagated.
fn download_bundle(
    client: &HttpClient,
    config: &Config,
    id: u32,
    output_dir: &Path,
    force: bool,
    reporter: &dyn Reporter,
) {
    let filepath: PathBuf = output_dir.join(Config::bundle_filename(id));
    if filepath.exists() && !force {
        reporter.info(&format!(
            "File {} already exists. Use --force to overwrite.",
            filepath.display()
        ));
        return;
    }

    let url = config.bundle_url(id);
    let data = match client.get_bundle(&url) {
        Ok(data) => data,
        Err(e) => {
            reporter.error(&e.to_string());
            return;
        }
    };

    if let Err(e) = fs::write(&filepath, &data) {
        let err = TwicError::FileWriteFailed {
            path: filepath.display().to_string(),
            reason: e.to_string(),
        };
        reporter.error(&err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{MemoryReporter, Severity};
    use tempfile::TempDir;

    fn test_config() -> Config {
        // Unroutable port keeps unit tests off the network
        Config::new(
            "http://127.0.0.1:0/twic/".to_string(),
            "http://127.0.0.1:0/zips/twic".to_string(),
        )
    }

    #[test]
    fn test_existing_file_skipped_without_force() {
        let temp = TempDir::new().unwrap();
        let config = test_config();
        let client = HttpClient::new(&config.user_agent).unwrap();
        let reporter = MemoryReporter::new();

        let filepath = temp.path().join(Config::bundle_filename(42));
        fs::write(&filepath, b"existing content").unwrap();

        download_bundle(&client, &config, 42, temp.path(), false, &reporter);

        assert!(reporter.contains(Severity::Info, "already exists"));
        assert_eq!(fs::read(&filepath).unwrap(), b"existing content");
    }

    #[test]
    fn test_fetch_failure_reported_not_propagated() {
        let temp = TempDir::new().unwrap();
        let config = test_config();
        let client = HttpClient::new(&config.user_agent).unwrap();
        let reporter = MemoryReporter::new();

        download_bundle(&client, &config, 42, temp.path(), false, &reporter);

        assert!(reporter.contains(Severity::Error, "twic42g.zip"));
        assert!(!temp.path().join(Config::bundle_filename(42)).exists());
    }

    #[test]
    fn test_listing_failure_yields_empty_index() {
        let config = test_config();
        let client = HttpClient::new(&config.user_agent).unwrap();
        let reporter = MemoryReporter::new();

        let index = build_index(&client, &config, &reporter);

        assert!(index.is_empty());
        assert!(reporter.contains(Severity::Error, "listing"));
    }
}
