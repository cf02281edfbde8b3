//! Error types for dispatch scheduling.

use thiserror::Error;

use crate::models::Job;

/// Domain failures surfaced by the dispatcher.
///
/// Contract breaches (such as offering a loaded carrier) are assertion
/// failures, not variants here: they indicate a bug in the driving
/// simulation rather than a condition it can react to.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// A job's tier requires more carriers than the fleet will ever have.
    ///
    /// Unrecoverable for this job under the current fleet; the job is left
    /// in its tier so the caller can decide policy (drop, alert, re-route).
    #[error("job {id} requires {needed} carriers but the fleet size is {fleet_size}", id = .job.id)]
    CapacityExceeded {
        /// The job that can never be serviced.
        job: Job,
        /// Carriers its tier requires.
        needed: usize,
        /// Total fleet size the dispatcher was built with.
        fleet_size: usize,
    },

    /// A job's weight lies above the heaviest tier boundary.
    #[error("job {id} weighs {weight}, above the routable limit {limit}", id = .job.id, weight = .job.weight)]
    UnroutableWeight {
        /// The rejected job, returned untouched to the caller.
        job: Job,
        /// The heaviest routable weight.
        limit: u32,
    },
}

/// Result alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
