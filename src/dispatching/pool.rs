//! Weight-tiered job pool.
//!
//! Holds every pending job in one of three tier queues, each kept sorted
//! under the ordering rule after every insertion. Selection compares the
//! heads of the non-empty tiers and reports which tier holds the globally
//! most urgent job; the winning tier's identity travels with the answer
//! instead of being re-derived from the job's weight.

use tracing::debug;

use super::ordering;
use crate::error::{DispatchError, Result};
use crate::models::{Job, TierKind, TierThresholds, DEFAULT_PRIORITY};

/// A pending job together with its frozen ordering key.
///
/// The key is captured once at enqueue time and never changes; the record
/// lives in exactly one tier until it is popped for dispatch.
#[derive(Debug, Clone)]
pub struct JobRecord {
    priority: i32,
    destination: i32,
    job: Job,
}

impl JobRecord {
    pub(crate) fn new(job: Job) -> Self {
        Self {
            priority: job.priority_level.unwrap_or(DEFAULT_PRIORITY),
            destination: job.destination,
            job,
        }
    }

    /// Effective priority (explicit level, or the ordinary default).
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Destination identifier used for tie-breaking.
    pub fn destination(&self) -> i32 {
        self.destination
    }

    /// The underlying job.
    pub fn job(&self) -> &Job {
        &self.job
    }

    /// Consumes the record, releasing the job for loading.
    pub fn into_job(self) -> Job {
        self.job
    }
}

/// The three sorted tier queues.
#[derive(Debug, Clone, Default)]
pub struct TierPool {
    thresholds: TierThresholds,
    tiers: [Vec<JobRecord>; 3],
}

impl TierPool {
    /// Creates an empty pool with the default weight boundaries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pool with custom weight boundaries.
    pub fn with_thresholds(thresholds: TierThresholds) -> Self {
        Self {
            thresholds,
            tiers: Default::default(),
        }
    }

    /// The active weight boundaries.
    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    /// Classifies a job by weight and inserts it into its tier, keeping the
    /// tier sorted. A weight above the heaviest boundary is rejected with
    /// [`DispatchError::UnroutableWeight`] and nothing is inserted.
    pub fn enqueue(&mut self, job: Job) -> Result<()> {
        let Some(kind) = self.thresholds.classify(job.weight) else {
            return Err(DispatchError::UnroutableWeight {
                limit: self.thresholds.triple_max,
                job,
            });
        };
        debug!(
            event = "enqueue",
            job = %job.id,
            weight = job.weight,
            tier = ?kind,
        );
        let tier = &mut self.tiers[kind.index()];
        tier.push(JobRecord::new(job));
        // Stable: arrival order survives full ordering-rule ties.
        tier.sort_by(ordering::compare);
        Ok(())
    }

    /// Picks the tier whose head is the most urgent pending job.
    ///
    /// Returns `None` when every tier is empty. Ties between tier heads go
    /// to the lighter tier.
    pub fn select(&self) -> Option<TierKind> {
        let mut best: Option<(TierKind, &JobRecord)> = None;
        for kind in TierKind::ALL {
            if let Some(head) = self.tiers[kind.index()].first() {
                let wins = match best {
                    Some((_, leader)) => {
                        ordering::compare(head, leader) == std::cmp::Ordering::Less
                    }
                    None => true,
                };
                if wins {
                    best = Some((kind, head));
                }
            }
        }
        best.map(|(kind, _)| kind)
    }

    /// The most urgent record of a tier, if any.
    pub fn head(&self, kind: TierKind) -> Option<&JobRecord> {
        self.tiers[kind.index()].first()
    }

    /// Removes and returns the most urgent record of a tier.
    pub fn pop_head(&mut self, kind: TierKind) -> Option<JobRecord> {
        let tier = &mut self.tiers[kind.index()];
        if tier.is_empty() {
            None
        } else {
            Some(tier.remove(0))
        }
    }

    /// Number of jobs pending in one tier.
    pub fn tier_len(&self, kind: TierKind) -> usize {
        self.tiers[kind.index()].len()
    }

    /// Number of jobs pending across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    /// Whether no job is pending anywhere.
    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(Vec::is_empty)
    }

    /// Records of one tier in service order, most urgent first.
    pub fn tier_records(&self, kind: TierKind) -> &[JobRecord] {
        &self.tiers[kind.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool_with(jobs: Vec<Job>) -> TierPool {
        let mut pool = TierPool::new();
        for job in jobs {
            pool.enqueue(job).unwrap();
        }
        pool
    }

    #[test]
    fn test_enqueue_classifies_by_weight() {
        let pool = pool_with(vec![
            Job::new("solo", 1500, 1),
            Job::new("pair", 2300, 1),
            Job::new("triple", 2800, 1),
        ]);
        assert_eq!(pool.tier_len(TierKind::Solo), 1);
        assert_eq!(pool.tier_len(TierKind::Pair), 1);
        assert_eq!(pool.tier_len(TierKind::Triple), 1);
    }

    #[test]
    fn test_overweight_job_is_rejected_not_dropped() {
        let mut pool = TierPool::new();
        let err = pool.enqueue(Job::new("huge", 3200, 1)).unwrap_err();
        match err {
            DispatchError::UnroutableWeight { job, limit } => {
                assert_eq!(job.id, "huge");
                assert_eq!(limit, 3000);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn test_priority_outranks_destination() {
        // A arrives first with the better destination; B's explicit
        // priority must still put it ahead.
        let pool = pool_with(vec![
            Job::new("A", 1500, 3),
            Job::new("B", 1500, 1).with_priority_level(2),
        ]);
        let order: Vec<&str> = pool
            .tier_records(TierKind::Solo)
            .iter()
            .map(|r| r.job().id.as_str())
            .collect();
        assert_eq!(order, ["B", "A"]);
    }

    #[test]
    fn test_arrival_order_survives_full_ties() {
        let pool = pool_with(vec![
            Job::new("first", 1000, 5),
            Job::new("second", 1000, 5),
            Job::new("third", 1000, 5),
        ]);
        let order: Vec<&str> = pool
            .tier_records(TierKind::Solo)
            .iter()
            .map(|r| r.job().id.as_str())
            .collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_select_empty_pool_is_none() {
        assert_eq!(TierPool::new().select(), None);
    }

    #[test]
    fn test_select_finds_most_urgent_tier() {
        let pool = pool_with(vec![
            Job::new("light", 500, 2),
            Job::new("heavy", 2900, 2).with_priority_level(9),
        ]);
        assert_eq!(pool.select(), Some(TierKind::Triple));
    }

    #[test]
    fn test_select_tie_goes_to_lighter_tier() {
        let pool = pool_with(vec![
            Job::new("pair", 2200, 4),
            Job::new("solo", 900, 4),
        ]);
        assert_eq!(pool.select(), Some(TierKind::Solo));
    }

    #[test]
    fn test_pop_head_removes_in_service_order() {
        let mut pool = pool_with(vec![
            Job::new("low", 1000, 1),
            Job::new("high", 1000, 9),
        ]);
        assert_eq!(pool.pop_head(TierKind::Solo).unwrap().job().id, "high");
        assert_eq!(pool.pop_head(TierKind::Solo).unwrap().job().id, "low");
        assert!(pool.pop_head(TierKind::Solo).is_none());
        assert!(pool.is_empty());
    }

    proptest! {
        #[test]
        fn prop_tiers_stay_sorted_and_exclusive(
            jobs in proptest::collection::vec((1u32..=3000, -10i32..10, proptest::option::of(1i32..20)), 0..40)
        ) {
            let mut pool = TierPool::new();
            for (i, (weight, destination, priority)) in jobs.into_iter().enumerate() {
                let mut job = Job::new(format!("J{i}"), weight, destination);
                job.priority_level = priority;
                pool.enqueue(job).unwrap();

                for kind in TierKind::ALL {
                    let records = pool.tier_records(kind);
                    // Sorted under the ordering rule after every call.
                    for pair in records.windows(2) {
                        prop_assert_ne!(
                            ordering::compare(&pair[0], &pair[1]),
                            std::cmp::Ordering::Greater
                        );
                    }
                    // Every record sits in the tier owning its weight.
                    for record in records {
                        prop_assert_eq!(
                            pool.thresholds().classify(record.job().weight),
                            Some(kind)
                        );
                    }
                }
            }
        }

        #[test]
        fn prop_routable_weights_have_exactly_one_tier(weight in 1u32..=3000) {
            let thresholds = TierThresholds::default();
            let kind = thresholds.classify(weight);
            prop_assert!(kind.is_some());
        }
    }
}
