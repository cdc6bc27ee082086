//! Pumping-schedule container and rate-change derivation.
//!
//! Purpose
//! -------
//! Provide the validated time series of pumping rates that every response
//! is computed from, and derive from it the sequence of rate-change events
//! the superposition engine superposes. This module centralizes schedule
//! validation so downstream code can assume clean, dense, non-negative
//! daily rates.
//!
//! Key behaviors
//! -------------
//! - [`PumpingSchedule`] stores one rate sample per day in an
//!   `ndarray::Array1<f64>` plus an explicit start-day offset for the
//!   absolute axis; gaps are impossible by construction (a constant-rate
//!   interval is repeated equal samples, never an omission).
//! - [`PumpingSchedule::new`] enforces finite, non-negative rates.
//! - Convenience constructors cover the common field setups: a constant
//!   rate ([`PumpingSchedule::uniform`]) and an annual pumping cycle
//!   ([`PumpingSchedule::annual_cycle`]); [`PumpingSchedule::scaled`]
//!   rescales rates for unit conversion at the boundary.
//! - [`PumpingSchedule::rate_changes`] first-differences the schedule into
//!   [`RateChange`] events.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every rate is finite and `>= 0.0`.
//! - The schedule is immutable once constructed (private fields, no
//!   setters); responses may therefore memoize outputs safely.
//! - The first sample is always an event (a change from zero), retained
//!   even when the first rate is 0.0; later samples are events only where
//!   the rate actually changes. Cumulatively applying all deltas
//!   reconstructs the schedule exactly, which is what makes superposition
//!   over the events exact.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based and daily; `start` is the absolute day number of
//!   sample 0 and is carried as metadata (the engine works in positions).
//! - Rates are in ft³/day; use [`scaled`](PumpingSchedule::scaled) with
//!   [`GPM2CFD`](crate::solutions::units::GPM2CFD) to convert field data.
use crate::wells::errors::{WellError, WellResult};
use ndarray::Array1;

/// Days per modeled year for [`PumpingSchedule::annual_cycle`].
const DAYS_PER_YEAR: usize = 365;

/// One rate-change event: at sample `index` the pumping rate changed by
/// `delta` (negative when pumping decreased; the image-well convention
/// comes out of the sign automatically).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateChange {
    /// 0-based sample index at which the rate changed.
    pub index: usize,
    /// Change in pumping rate [ft³/day] relative to the previous sample.
    pub delta: f64,
}

/// A validated, dense, daily pumping-rate series.
///
/// The schedule owns its samples and an absolute start-day offset. All
/// samples are finite and non-negative; the axis has no gaps by
/// construction. Constructed once and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpingSchedule {
    /// One pumping rate per day [ft³/day].
    rates: Array1<f64>,
    /// Absolute day number of sample 0.
    start: usize,
}

impl PumpingSchedule {
    /// Construct a validated schedule from raw daily rates.
    ///
    /// # Arguments
    /// - `rates`: one sample per day [ft³/day]; every entry must be finite
    ///   and non-negative. An empty schedule is allowed and produces empty
    ///   outputs downstream.
    /// - `start`: absolute day number of the first sample.
    ///
    /// # Errors
    /// - [`WellError::NonFiniteRate`] at the first NaN/±∞ sample.
    /// - [`WellError::NegativeRate`] at the first negative sample.
    pub fn new(rates: Array1<f64>, start: usize) -> WellResult<PumpingSchedule> {
        for (index, &value) in rates.iter().enumerate() {
            if !value.is_finite() {
                return Err(WellError::NonFiniteRate { index, value });
            }
            if value < 0.0 {
                return Err(WellError::NegativeRate { index, value });
            }
        }
        Ok(PumpingSchedule { rates, start })
    }

    /// A constant-rate schedule of `days` samples starting at day 0.
    pub fn uniform(rate: f64, days: usize) -> WellResult<PumpingSchedule> {
        PumpingSchedule::new(Array1::from_elem(days, rate), 0)
    }

    /// An annual pumping cycle: `rate` for the first `pumping_days` of each
    /// 365-day year, zero for the remainder, repeated for `years` years.
    ///
    /// `pumping_days` is capped at the year length.
    pub fn annual_cycle(pumping_days: usize, years: usize, rate: f64) -> WellResult<PumpingSchedule> {
        let active = pumping_days.min(DAYS_PER_YEAR);
        let rates = Array1::from_iter(
            (0..years * DAYS_PER_YEAR).map(|day| {
                if day % DAYS_PER_YEAR < active { rate } else { 0.0 }
            }),
        );
        PumpingSchedule::new(rates, 0)
    }

    /// A copy of this schedule with every rate multiplied by `factor`
    /// (unit conversion at the boundary, e.g. gpm → ft³/day).
    pub fn scaled(&self, factor: f64) -> WellResult<PumpingSchedule> {
        PumpingSchedule::new(self.rates.mapv(|rate| rate * factor), self.start)
    }

    /// Number of daily samples.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the schedule has no samples.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// The daily rates [ft³/day].
    pub fn rates(&self) -> &Array1<f64> {
        &self.rates
    }

    /// Absolute day number of sample 0.
    pub fn start(&self) -> usize {
        self.start
    }

    /// First-difference the schedule into rate-change events.
    ///
    /// The first sample is always an event (change from zero, kept even at
    /// magnitude 0.0 so that superposing two schedules' events matches the
    /// events of their sum); later samples produce an event only where the
    /// rate differs from the previous day.
    pub(crate) fn rate_changes(&self) -> Vec<RateChange> {
        let mut events = Vec::new();
        if self.rates.is_empty() {
            return events;
        }
        events.push(RateChange { index: 0, delta: self.rates[0] });
        for index in 1..self.rates.len() {
            let delta = self.rates[index] - self.rates[index - 1];
            if delta != 0.0 {
                events.push(RateChange { index, delta });
            }
        }
        events
    }
}
