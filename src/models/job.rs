//! Job (delivery unit) model.
//!
//! A job is a single unit of freight to be delivered: it has a weight that
//! determines how many carriers must lift it, a destination used for
//! ordering, and an optional expedite priority.

use serde::{Deserialize, Serialize};

/// Priority assumed for jobs without an explicit priority level.
///
/// The comparator treats larger values as more urgent, so 1 is the floor
/// every expedited job outranks.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A delivery job.
///
/// Jobs are produced by the surrounding simulation and handed to the
/// dispatcher via `enqueue`. The dispatcher only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Freight weight. Must be positive; decides the weight tier.
    pub weight: u32,
    /// Destination identifier (higher = served earlier on priority ties).
    pub destination: i32,
    /// Expedite priority. `None` means an ordinary job at [`DEFAULT_PRIORITY`].
    pub priority_level: Option<i32>,
}

impl Job {
    /// Creates an ordinary (non-expedited) job.
    pub fn new(id: impl Into<String>, weight: u32, destination: i32) -> Self {
        Self {
            id: id.into(),
            weight,
            destination,
            priority_level: None,
        }
    }

    /// Sets an expedite priority level.
    pub fn with_priority_level(mut self, priority_level: i32) -> Self {
        self.priority_level = Some(priority_level);
        self
    }

    /// Whether this job carries an explicit expedite priority.
    pub fn is_expedited(&self) -> bool {
        self.priority_level.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("J1", 1500, 7).with_priority_level(10);

        assert_eq!(job.id, "J1");
        assert_eq!(job.weight, 1500);
        assert_eq!(job.destination, 7);
        assert_eq!(job.priority_level, Some(10));
        assert!(job.is_expedited());
    }

    #[test]
    fn test_ordinary_job_has_no_priority() {
        let job = Job::new("J2", 800, 2);
        assert_eq!(job.priority_level, None);
        assert!(!job.is_expedited());
    }

    #[test]
    fn test_job_serde_round_trip() {
        let job = Job::new("J3", 2700, 4).with_priority_level(3);
        let json = serde_json::to_string(&job).unwrap();
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
