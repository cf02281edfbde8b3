//! The classification, ordering, and matching engine.
//!
//! Pending jobs live in a [`TierPool`] of three weight tiers, each kept
//! sorted under the rule in [`ordering`]. The [`Dispatcher`] runs one
//! matching pass per tick, loading single carriers from the solo tier and
//! forming teams for the heavier tiers.
//!
//! # Usage
//!
//! ```
//! use fleet_dispatch::dispatching::TierPool;
//! use fleet_dispatch::models::{Job, TierKind};
//!
//! let mut pool = TierPool::new();
//! pool.enqueue(Job::new("J1", 2300, 7))?;
//! assert_eq!(pool.select(), Some(TierKind::Pair));
//! # Ok::<(), fleet_dispatch::error::DispatchError>(())
//! ```

mod dispatcher;
pub mod ordering;
mod pool;

pub use dispatcher::{DispatchStats, Dispatcher};
pub use pool::{JobRecord, TierPool};
