//! core — pumping schedules, rate-change events, and the superposition
//! engine.
//!
//! Purpose
//! -------
//! Collect the building blocks the response models are assembled from: the
//! validated [`PumpingSchedule`] container with its rate-change derivation,
//! and the event-superposition engine that turns a single-step analytical
//! solution into the response to an arbitrary piecewise-constant pumping
//! history.
//!
//! Conventions
//! -----------
//! - Everything here works in 0-based sample positions; absolute day
//!   numbers are schedule metadata.
//! - The engine is solution-agnostic: it sees a closure from
//!   `(elapsed-times, rate-step)` to a response block and owns only the
//!   time-shifting and accumulation.

pub mod schedule;
pub(crate) mod superposition;

pub use self::schedule::{PumpingSchedule, RateChange};
