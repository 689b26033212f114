//! Common test utilities for twicdl integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary working directory for integration tests
#[allow(dead_code)]
pub struct TestDir {
    /// Temporary directory, removed on drop
    pub temp: TempDir,
    /// Path to the directory
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDir {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }
}

/// Render a minimal TWIC-style listing page for the given bundle ids
#[allow(dead_code)]
pub fn listing_html(ids: &[u32]) -> String {
    let mut rows = vec![
        r#"<a href="/twic/twic1500.html">TWIC 1500</a>"#.to_string(),
        r#"<a href="mailto:editor@example.com">Contact</a>"#.to_string(),
    ];
    for id in ids {
        rows.push(format!(
            r#"<tr><td><a href="/zips/twic{}g.zip">PGN</a></td></tr>"#,
            id
        ));
    }
    format!(
        "<html><body><table>{}</table></body></html>",
        rows.join("\n")
    )
}
