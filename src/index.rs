//! Canonical bundle index built from the TWIC listing page
//!
//! The listing page carries one `<a href=...>` per weekly bundle, named
//! `twic<id>g.zip`. Extraction keeps only hyperlink targets matching that
//! shape, deduplicates them by exact href equality, parses the embedded id
//! exactly once, and sorts the result ascending. Position lookups later run
//! against the stored integer ids, never against the href text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Hyperlink targets on the listing page, with or without quotes
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href\s*=\s*["']?([^"'\s>]+)"#).expect("href pattern is valid")
});

/// Bundle archive naming pattern; the capture is the bundle id
static ZIP_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)g\.zip$").expect("zip id pattern is valid"));

/// First run of digits anywhere in a string
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digits pattern is valid"));

/// A single discovered bundle link
#[derive(Debug, Clone)]
pub struct BundleRef {
    /// Id parsed from the `<id>g.zip` token; sole lookup key
    pub id: u32,
    /// Link target as found on the page (relative or absolute)
    pub href: String,
    /// Ordering key: first digit run anywhere in the href
    sort_key: u64,
}

/// Deduplicated bundle references, sorted ascending by numeric key.
/// Read-only after construction.
#[derive(Debug, Default)]
pub struct BundleIndex {
    refs: Vec<BundleRef>,
}

impl BundleIndex {
    /// Build the canonical index from the raw listing HTML.
    ///
    /// Links not matching the bundle naming pattern are discarded silently.
    /// An empty result is valid here; callers surface it as an error before
    /// attempting any position lookup.
    pub fn from_html(html: &str) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut refs = Vec::new();

        for capture in HREF_RE.captures_iter(html) {
            let Some(href) = capture.get(1).map(|m| m.as_str()) else {
                continue;
            };
            let Some(id_capture) = ZIP_ID_RE.captures(href) else {
                continue;
            };
            let Ok(id) = id_capture[1].parse::<u32>() else {
                continue;
            };
            if !seen.insert(href) {
                continue;
            }
            refs.push(BundleRef {
                id,
                href: href.to_string(),
                sort_key: leading_number(href),
            });
        }

        // Stable sort keeps discovery order for equal keys
        refs.sort_by_key(|r| r.sort_key);
        Self { refs }
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn refs(&self) -> &[BundleRef] {
        &self.refs
    }

    pub fn first(&self) -> Option<&BundleRef> {
        self.refs.first()
    }

    pub fn last(&self) -> Option<&BundleRef> {
        self.refs.last()
    }

    /// Position of the element with exactly this id.
    ///
    /// A plain scan: the sequence is ordered by `sort_key`, which is not
    /// guaranteed to order the ids when an href carries digits before the
    /// id token, so lookups must not assume id order. The index is tiny.
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.refs.iter().position(|r| r.id == id)
    }

    /// Position of the element with the smallest id at or above `id`
    pub fn position_at_or_after(&self, id: u32) -> Option<usize> {
        self.refs
            .iter()
            .enumerate()
            .filter(|(_, r)| r.id >= id)
            .min_by_key(|(_, r)| r.id)
            .map(|(pos, _)| pos)
    }
}

/// Numeric sort key for a reference: the value of the first digit run found
/// anywhere in the string, or `u64::MAX` when there is none (sorts last).
fn leading_number(s: &str) -> u64 {
    DIGITS_RE
        .find(s)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(u64::MAX)
}
