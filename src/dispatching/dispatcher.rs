//! Tick-driven dispatcher.
//!
//! Owns the carrier waiting line and the tiered job pool, and runs one
//! matching pass per simulation tick. Carriers are offered work in FIFO
//! order; the tier selector is re-evaluated for every carrier because
//! earlier carriers in the same tick may have consumed jobs.

use tracing::debug;

use super::pool::TierPool;
use crate::error::{DispatchError, Result};
use crate::models::{Carrier, TierKind, TierThresholds};

/// Counters accumulated across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Single-carrier departures.
    pub solo_dispatches: usize,
    /// Team departures (one per team, regardless of size).
    pub team_dispatches: usize,
    /// Jobs handed to carriers.
    pub jobs_assigned: usize,
    /// Carriers sent out, counting every team member.
    pub carriers_dispatched: usize,
    /// Offers that had to wait for more idle carriers.
    pub deferrals: usize,
}

/// Matches pending jobs against idle carriers, one pass per tick.
///
/// `C` is whatever the simulation registers as an idle carrier — usually a
/// cheap handle type, since the dispatcher drops its copy once the carrier
/// departs.
///
/// # Example
///
/// ```
/// use fleet_dispatch::dispatching::Dispatcher;
/// use fleet_dispatch::models::{Carrier, Job};
///
/// #[derive(Default)]
/// struct Van {
///     loaded: usize,
///     departed: bool,
/// }
///
/// impl Carrier for Van {
///     fn is_empty(&self) -> bool {
///         self.loaded == 0
///     }
///     fn set_team_state(&mut self, _in_team: bool) {}
///     fn set_num_team_members(&mut self, _members: usize) {}
///     fn add_to_primary(&mut self, _job: Job) {
///         self.loaded += 1;
///     }
///     fn add_to_secondary(&mut self, _job: Job) {
///         self.loaded += 1;
///     }
///     fn dispatch(&mut self) {
///         self.departed = true;
///     }
/// }
///
/// let mut dispatcher = Dispatcher::<Van>::new(2);
/// dispatcher.enqueue(Job::new("J1", 1200, 4))?;
/// dispatcher.register_waiting(Van::default());
/// dispatcher.step()?;
/// assert_eq!(dispatcher.stats().solo_dispatches, 1);
/// # Ok::<(), fleet_dispatch::error::DispatchError>(())
/// ```
#[derive(Debug)]
pub struct Dispatcher<C: Carrier> {
    pool: TierPool,
    waiting: Vec<C>,
    fleet_size: usize,
    stats: DispatchStats,
}

impl<C: Carrier> Dispatcher<C> {
    /// Creates a dispatcher for a fleet of `fleet_size` carriers total.
    ///
    /// The fleet size is the maximum number of carriers that can ever be
    /// idle at once; it bounds which team sizes are feasible at all.
    pub fn new(fleet_size: usize) -> Self {
        Self {
            pool: TierPool::new(),
            waiting: Vec::new(),
            fleet_size,
            stats: DispatchStats::default(),
        }
    }

    /// Replaces the default weight boundaries. Call before enqueueing.
    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.pool = TierPool::with_thresholds(thresholds);
        self
    }

    /// Adds a job to the tier owning its weight.
    ///
    /// Rejects weights above the heaviest boundary with
    /// [`DispatchError::UnroutableWeight`]; the effect of an accepted job is
    /// only visible through later [`step`](Self::step) calls.
    pub fn enqueue(&mut self, job: crate::models::Job) -> Result<()> {
        self.pool.enqueue(job)
    }

    /// Registers an idle carrier at the back of the waiting line.
    ///
    /// The caller guarantees the carrier is empty and not already
    /// registered.
    pub fn register_waiting(&mut self, carrier: C) {
        self.waiting.push(carrier);
    }

    /// Runs one scheduling pass.
    ///
    /// Every carrier present at the start of the tick is offered work
    /// exactly once, in FIFO order. Depending on the selected tier the
    /// carrier departs solo (with up to two light jobs), departs as part of
    /// a team, or stays in line for the next tick.
    ///
    /// Fails with [`DispatchError::CapacityExceeded`] when the selected
    /// tier needs more carriers than the whole fleet; nothing is mutated in
    /// that case and the offending job stays pending.
    pub fn step(&mut self) -> Result<()> {
        let mut cursor = 0;
        while cursor < self.waiting.len() {
            match self.pool.select() {
                // Nothing pending anywhere; the carrier stays idle.
                None => cursor += 1,
                Some(TierKind::Solo) => cursor = self.load_solo(cursor),
                Some(tier) => cursor = self.load_team(cursor, tier)?,
            }
        }
        Ok(())
    }

    /// Loads the carrier at `cursor` with up to two solo-tier jobs and
    /// sends it off. Returns the next cursor position.
    fn load_solo(&mut self, cursor: usize) -> usize {
        let Some(primary) = self.pool.pop_head(TierKind::Solo) else {
            return cursor + 1;
        };

        let mut carrier = self.waiting.remove(cursor);
        assert!(
            carrier.is_empty(),
            "carrier offered to the dispatcher must be empty"
        );
        carrier.set_team_state(false);
        carrier.set_num_team_members(1);

        // The more urgent job rides primary so it is delivered first.
        let primary_id = primary.job().id.clone();
        carrier.add_to_primary(primary.into_job());
        let mut loaded = 1;
        if let Some(secondary) = self.pool.pop_head(TierKind::Solo) {
            carrier.add_to_secondary(secondary.into_job());
            loaded = 2;
        }
        carrier.dispatch();

        debug!(event = "solo_dispatch", job = %primary_id, jobs_loaded = loaded);
        self.stats.solo_dispatches += 1;
        self.stats.jobs_assigned += loaded;
        self.stats.carriers_dispatched += 1;

        // The removed slot is refilled by the next carrier in line.
        cursor
    }

    /// Forms a team of `tier.required_carriers()` for the tier's head job,
    /// or defers when the line is too short. Returns the next cursor
    /// position.
    fn load_team(&mut self, cursor: usize, tier: TierKind) -> Result<usize> {
        let need = tier.required_carriers();

        if need > self.fleet_size {
            return match self.pool.head(tier) {
                Some(record) => Err(DispatchError::CapacityExceeded {
                    job: record.job().clone(),
                    needed: need,
                    fleet_size: self.fleet_size,
                }),
                // The selector never picks an empty tier; nothing to offer.
                None => Ok(cursor + 1),
            };
        }

        if self.waiting.len() - cursor < need {
            // Not enough idle carriers yet; everyone keeps their place in
            // line until the next tick.
            debug!(event = "team_deferred", tier = ?tier, need = need);
            self.stats.deferrals += 1;
            return Ok(cursor + 1);
        }

        let Some(record) = self.pool.pop_head(tier) else {
            return Ok(cursor + 1);
        };
        let job = record.into_job();
        debug!(event = "team_dispatch", job = %job.id, team_size = need);

        for mut carrier in self.waiting.drain(cursor..cursor + need) {
            assert!(
                carrier.is_empty(),
                "carrier offered to the dispatcher must be empty"
            );
            carrier.set_team_state(true);
            carrier.set_num_team_members(need);
            carrier.add_to_primary(job.clone());
            carrier.dispatch();
        }

        self.stats.team_dispatches += 1;
        self.stats.jobs_assigned += 1;
        self.stats.carriers_dispatched += need;

        Ok(cursor)
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Read access to the tiered job pool.
    pub fn pool(&self) -> &TierPool {
        &self.pool
    }

    /// Carriers currently waiting for work.
    pub fn idle_carriers(&self) -> usize {
        self.waiting.len()
    }

    /// The fleet size this dispatcher was built with.
    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }
}
