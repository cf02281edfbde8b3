//! Dispatch scheduling for simulated delivery fleets.
//!
//! Holds pending delivery jobs in three weight tiers, orders them by
//! business priority, and matches them against a pool of idle carriers,
//! forming multi-carrier teams when a job exceeds single-carrier capacity.
//! The surrounding simulation drives the scheduler one tick at a time and
//! owns everything else: carrier movement, job generation, and the clock.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, the `Carrier` capability contract,
//!   `TierKind`, `TierThresholds`
//! - **`dispatching`**: The engine — `TierPool`, the ordering rule,
//!   `Dispatcher`, `DispatchStats`
//! - **`error`**: `DispatchError` and the crate `Result`
//!
//! # Tick model
//!
//! Single-threaded and tick-driven: the driver calls
//! [`Dispatcher::step`](dispatching::Dispatcher::step) once per simulation
//! tick, and the dispatcher exclusively owns all tier and waiting-line
//! state in between. Waiting for more carriers is never a blocked
//! operation — a carrier that cannot be matched simply keeps its place in
//! line for the next tick.

pub mod dispatching;
pub mod error;
pub mod models;
