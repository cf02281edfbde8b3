//! The ordering rule ranking pending jobs.
//!
//! Comparison key, most significant first: priority descending, then
//! destination descending. Full ties compare `Equal`, so a stable sort
//! preserves arrival order between them.

use std::cmp::Ordering;

use super::pool::JobRecord;

/// Compares two records under the dispatch ordering rule.
///
/// `Less` means `a` is served before `b`.
pub fn compare(a: &JobRecord, b: &JobRecord) -> Ordering {
    b.priority()
        .cmp(&a.priority())
        .then_with(|| b.destination().cmp(&a.destination()))
}
