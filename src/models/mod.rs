//! Dispatch domain models.
//!
//! Core data types for the delivery-fleet dispatch problem: the [`Job`]
//! being delivered, the [`Carrier`] capability contract the simulation's
//! vehicles implement, and the weight-tier classification ([`TierKind`],
//! [`TierThresholds`]) that decides how many carriers a job needs.

mod carrier;
mod job;
mod tier;

pub use carrier::Carrier;
pub use job::{Job, DEFAULT_PRIORITY};
pub use tier::{TierKind, TierThresholds};
