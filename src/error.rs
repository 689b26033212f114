//! Error types and handling for twicdl
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for twicdl operations
#[derive(Error, Diagnostic, Debug)]
pub enum TwicError {
    // Listing errors
    #[error("Failed to fetch listing page {url}: {reason}")]
    #[diagnostic(
        code(twicdl::listing::fetch_failed),
        help("Check your network connection and that the listing URL is reachable")
    )]
    ListingFetchFailed { url: String, reason: String },

    #[error("No bundle references found on the listing page")]
    #[diagnostic(
        code(twicdl::listing::empty),
        help("The listing page format may have changed, or the fetch failed earlier")
    )]
    EmptyListing,

    // Selection errors
    #[error("Invalid selection: {message}")]
    #[diagnostic(
        code(twicdl::selection::invalid),
        help("Pass --all, or at least one of --start and --end")
    )]
    InvalidRequest { message: String },

    #[error("No bundle with id {id} or greater is available")]
    #[diagnostic(
        code(twicdl::selection::range_not_found),
        help("The requested start id is beyond the newest bundle on the listing")
    )]
    RangeNotFound { id: u32 },

    // Download errors
    #[error("Failed to fetch bundle {url}: {reason}")]
    #[diagnostic(code(twicdl::download::fetch_failed))]
    BundleFetchFailed { url: String, reason: String },

    #[error("Download failed with status {status}: {url}")]
    #[diagnostic(code(twicdl::download::bad_status))]
    DownloadFailed { url: String, status: u16 },

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(twicdl::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(twicdl::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for TwicError {
    fn from(err: std::io::Error) -> Self {
        TwicError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TwicError>;
