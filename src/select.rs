//! Range resolution over the canonical bundle index
//!
//! Maps the user's selection (everything, or a start/end pair where either
//! endpoint may be missing, swapped, or absent from the index) onto concrete
//! positions in the index. Endpoint handling is deliberately asymmetric: an
//! unmatched end extends the range through the last available element, while
//! an unmatched start clamps forward to the nearest existing id and only
//! fails when nothing at or above it exists.

use crate::error::{Result, TwicError};
use crate::index::{BundleIndex, BundleRef};
use crate::report::Reporter;

/// The user's declarative selection of bundles to retrieve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every bundle on the listing
    All,
    /// An inclusive id range; at least one endpoint must be present
    Range {
        start: Option<u32>,
        end: Option<u32>,
    },
}

impl Selection {
    /// Build a selection from the CLI flags.
    ///
    /// Fails with `InvalidRequest` when nothing was selected, or when `all`
    /// is combined with an explicit endpoint (clap already rejects the
    /// latter; this guards non-CLI callers).
    pub fn from_args(all: bool, start: Option<u32>, end: Option<u32>) -> Result<Selection> {
        if all {
            if start.is_some() || end.is_some() {
                return Err(TwicError::InvalidRequest {
                    message: "--all cannot be combined with --start or --end".to_string(),
                });
            }
            return Ok(Selection::All);
        }
        if start.is_none() && end.is_none() {
            return Err(TwicError::InvalidRequest {
                message: "no bundles selected".to_string(),
            });
        }
        Ok(Selection::Range { start, end })
    }
}

/// Normalized endpoints and their positions in the index.
///
/// `end_pos` is inclusive, except when the end id had no match: then it
/// equals the index length and the practical upper bound is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange {
    pub start_id: u32,
    pub end_id: u32,
    pub start_pos: usize,
    pub end_pos: usize,
}

impl ResolvedRange {
    /// The inclusive download slice this range covers
    pub fn slice<'a>(&self, index: &'a BundleIndex) -> &'a [BundleRef] {
        let upper = (self.end_pos + 1).min(index.len());
        &index.refs()[self.start_pos..upper]
    }
}

/// Resolve a selection against the canonical index.
///
/// The index must be non-empty; position lookups are undefined otherwise.
pub fn resolve(
    selection: &Selection,
    index: &BundleIndex,
    reporter: &dyn Reporter,
) -> Result<ResolvedRange> {
    if index.is_empty() {
        return Err(TwicError::EmptyListing);
    }

    match *selection {
        Selection::All => {
            // Non-empty index, so first and last exist
            let (Some(first), Some(last)) = (index.first(), index.last()) else {
                return Err(TwicError::EmptyListing);
            };
            Ok(ResolvedRange {
                start_id: first.id,
                end_id: last.id,
                start_pos: 0,
                end_pos: index.len() - 1,
            })
        }
        Selection::Range { start, end } => {
            let (Some(mut start), Some(mut end)) = (start.or(end), end.or(start)) else {
                return Err(TwicError::InvalidRequest {
                    message: "no bundles selected".to_string(),
                });
            };

            if start > end {
                std::mem::swap(&mut start, &mut end);
                reporter.warn(&format!(
                    "Start and end values were swapped. Start: {}, End: {}",
                    start, end
                ));
            }
            // Defensive re-clamp; already true after the swap
            let (start, end) = (start.min(end), start.max(end));

            let start_pos = match index.position_of(start) {
                Some(pos) => pos,
                None => {
                    let pos = index
                        .position_at_or_after(start)
                        .ok_or(TwicError::RangeNotFound { id: start })?;
                    reporter.info(&format!(
                        "Bundle {} not found in the listing; starting from {}",
                        start,
                        index.refs()[pos].id
                    ));
                    pos
                }
            };
            let end_pos = match index.position_of(end) {
                Some(pos) => pos,
                None => {
                    reporter.info(&format!(
                        "Bundle {} not found in the listing; downloading through the end",
                        end
                    ));
                    index.len()
                }
            };

            Ok(ResolvedRange {
                start_id: start,
                end_id: end,
                start_pos,
                end_pos,
            })
        }
    }
}
