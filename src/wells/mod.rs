//! wells — pumping schedules, response superposition, and well fan-out.
//!
//! Purpose
//! -------
//! Provide the engine layer of the crate: turn a piecewise-constant
//! pumping history into per-target drawdown and streamflow-depletion time
//! series by superposing closed-form analytical solutions over the
//! history's rate changes, and aggregate per-well results for reporting.
//! This is the surface most consumers (including the Python bindings)
//! should depend on.
//!
//! Key behaviors
//! -------------
//! - Validated pumping schedules and rate-change derivation in
//!   [`core::schedule`]; the alignment-owning superposition engine in
//!   `core::superposition`.
//! - One observation target per [`WellResponse`]
//!   ([`models::response`]): lazy, memoized drawdown and depletion series
//!   with construction-time validation.
//! - Per-well fan-out and name-keyed aggregation in [`Well`]
//!   ([`models::well`]), including the peak-depletion summary.
//! - Wells-layer errors centralized in [`errors`] ([`WellError`] and the
//!   [`WellResult`] alias), with solution-layer errors propagating through
//!   a `From` wrapper.
//!
//! Invariants & assumptions
//! ------------------------
//! - Schedules are dense (one sample per day), finite, and non-negative;
//!   a constant-rate interval is repeated samples, never a gap.
//! - Analytical solutions are linear in the pumping rate and zero at
//!   elapsed time zero; the superposition contract in
//!   `core::superposition` relies on both.
//! - Responses and wells are immutable once constructed; memoized series
//!   can never go stale.
//! - The layer performs no I/O and no logging; callers orchestrate data
//!   loading and reporting. Error conditions surface as [`WellResult`];
//!   panics indicate programming errors, not bad user input.
//!
//! Conventions
//! -----------
//! - Units: feet, days, ft³/day; conversion constants live in
//!   [`solutions::units`](crate::solutions::units).
//! - Output maps are keyed by observation-target name and iterate in name
//!   order.
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!   1. Build a [`PumpingSchedule`] (`new`, `uniform`, or `annual_cycle`,
//!      with `scaled` for unit conversion).
//!   2. Either construct a [`Well`] with per-target distance /
//!      apportionment / conductance maps and read `drawdown()`,
//!      `depletion()`, `max_depletion()`; or construct a [`WellResponse`]
//!      directly for a single target and non-default method choices.
//! - Python bindings import from this module and rely on the error →
//!   `PyErr` conversions defined alongside the error types.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::schedule::{PumpingSchedule, RateChange};
pub use self::errors::{WellError, WellResult};
pub use self::models::response::{ResponseKind, WellResponse};
pub use self::models::well::Well;

// ---- Convenience prelude for downstream crates ----------------------------
//
// Downstream code can write
//
//     use wellcap::wells::prelude::*;
//
// to import the main surface in a single line.

pub mod prelude {
    pub use super::{PumpingSchedule, RateChange, ResponseKind, Well, WellError, WellResponse,
        WellResult};
    pub use crate::solutions::{DepletionMethod, DrawdownMethod, SolutionError, SolutionExtras,
        SolutionResult};
}
