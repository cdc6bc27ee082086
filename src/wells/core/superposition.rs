//! Superposition of rate-change events over an analytical solution.
//!
//! Purpose
//! -------
//! Extend closed-form solutions, derived for a single constant-rate step,
//! to arbitrary piecewise-constant pumping histories: evaluate the solution
//! once per rate-change event over the elapsed time since that event and
//! accumulate the time-shifted responses. Correctness hinges entirely on
//! the alignment between "when the rate changed" and "elapsed time since
//! the change", which this module owns in one place.
//!
//! Key behaviors
//! -------------
//! - [`superpose`] is generic over the solution: it takes a closure from
//!   `(elapsed-times, rate-step)` to an `(len × width)` response block, so
//!   the same engine serves drawdown, depletion, and paired-output
//!   solutions, and tests can drive it with synthetic kernels.
//! - The first event at index `i₀` contributes the solution over elapsed
//!   times `[0, 1, …, N−1−i₀]`, added in from row `i₀`; rows before `i₀`
//!   stay zero (no response before pumping starts).
//! - Every later event at index `iₖ` contributes the solution over the
//!   one-step-longer vector `[0, 1, …, N−1−(iₖ−1)]`, added in from row
//!   `iₖ−1`. This one-earlier alignment of subsequent events relative to
//!   the first is a pinned behavioral contract; do not "fix" it without
//!   re-deriving the downstream literal-value checks.
//!
//! Invariants & assumptions
//! ------------------------
//! - Events come from
//!   [`PumpingSchedule::rate_changes`](crate::wells::core::schedule::PumpingSchedule):
//!   sorted by index, first event at index 0, later events at index >= 1.
//! - Solutions are linear in the rate and evaluate to 0 at elapsed time 0,
//!   which is what keeps the accumulated series additive across schedules
//!   and zero before pumping starts.
//! - The closure returns exactly `(elapsed.len() × width)` values; this is
//!   checked with `debug_assert` (a mismatch is a registry bug, not a user
//!   error).
use crate::solutions::errors::SolutionResult;
use crate::wells::core::schedule::RateChange;
use ndarray::{s, Array1, Array2};

/// Superpose an analytical solution over a sequence of rate-change events.
///
/// # Arguments
/// - `len`: schedule length N; the output has one row per time step.
/// - `width`: output columns per time step (1 for scalar solutions, 2 for
///   paired-aquifer solutions).
/// - `events`: rate changes, sorted, first at index 0.
/// - `solution`: closure evaluating the solution over a vector of elapsed
///   days for one rate step.
///
/// # Returns
/// The `(len × width)` accumulated response. With no events (empty
/// schedule) the output is all zeros.
pub(crate) fn superpose<F>(
    len: usize, width: usize, events: &[RateChange], mut solution: F,
) -> SolutionResult<Array2<f64>>
where
    F: FnMut(&Array1<f64>, f64) -> SolutionResult<Array2<f64>>,
{
    let mut output = Array2::zeros((len, width));
    if len == 0 {
        return Ok(output);
    }
    for (position, event) in events.iter().enumerate() {
        debug_assert!(event.index < len, "event index {} out of range", event.index);
        debug_assert!(position == 0 || event.index >= 1, "later events start at index >= 1");
        let row = if position == 0 { event.index } else { event.index - 1 };
        let elapsed = Array1::from_iter((0..len - row).map(|step| step as f64));
        let response = solution(&elapsed, event.delta)?;
        debug_assert_eq!(response.dim(), (len - row, width));
        let mut slab = output.slice_mut(s![row.., ..]);
        slab += &response;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::kernels;
    use crate::wells::core::schedule::PumpingSchedule;
    use approx::assert_relative_eq;
    use ndarray::{array, Array2, Axis};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests pin the engine's alignment contract and the core
    // superposition properties:
    // - the exact first-event / one-earlier-subsequent-event offsets, via a
    //   synthetic linear kernel with a hand-computed result,
    // - additivity across schedules (disjoint and overlapping step times),
    // - zero output before pumping starts,
    // - single-step reduction to one direct solution evaluation,
    // - paired-output (two-column) accumulation.
    // -------------------------------------------------------------------------

    /// Synthetic linear kernel: response = delta · elapsed, one column.
    /// Linear in the rate, zero at elapsed time 0, and trivially
    /// hand-evaluable, which makes the alignment arithmetic visible.
    fn ramp(elapsed: &Array1<f64>, delta: f64) -> SolutionResult<Array2<f64>> {
        Ok(elapsed.mapv(|t| delta * t).insert_axis(Axis(1)))
    }

    /// Superpose the Glover solution over a schedule's events.
    fn glover_series(schedule: &PumpingSchedule) -> Array1<f64> {
        let out = superpose(schedule.len(), 1, &schedule.rate_changes(), |elapsed, delta| {
            kernels::glover(1000.0, 0.1, elapsed.view(), 500.0, delta)
                .map(|qs| qs.insert_axis(Axis(1)))
        })
        .unwrap();
        out.index_axis(Axis(1), 0).to_owned()
    }

    #[test]
    // Purpose
    // -------
    // Pin the alignment contract with hand-computed values.
    //
    // Given
    // -----
    // - Schedule [5, 5, 5, 8, 8]: events (0, +5) and (3, +3).
    // - The ramp kernel (response = delta · elapsed).
    //
    // Expect
    // ------
    // - First event: 5·[0, 1, 2, 3, 4] written from row 0.
    // - Second event: 3·[0, 1, 2] added from row 2 (= index 3 − 1).
    // - Total: [0, 5, 10, 18, 26].
    fn alignment_contract_is_pinned_by_hand_computed_values() {
        let schedule = PumpingSchedule::new(array![5.0, 5.0, 5.0, 8.0, 8.0], 0).unwrap();
        let out = superpose(5, 1, &schedule.rate_changes(), ramp).unwrap();
        let expected = [0.0, 5.0, 10.0, 18.0, 26.0];
        for (row, value) in expected.iter().enumerate() {
            assert_eq!(out[[row, 0]], *value, "row {row}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Superposition additivity: the response to a sum of schedules equals
    // the elementwise sum of the individual responses, including when one
    // summand's pumping starts mid-axis.
    //
    // Given
    // -----
    // - S1 = [200, 200, 200, 200, 200, 200] (pumping from day 0).
    // - S2 = [0, 0, 150, 150, 90, 90] (pumping from day 2, then a cut).
    //
    // Expect
    // ------
    // - glover(S1 + S2) == glover(S1) + glover(S2) at every index.
    fn responses_add_across_schedules() {
        let s1 = PumpingSchedule::uniform(200.0, 6).unwrap();
        let s2 = PumpingSchedule::new(array![0.0, 0.0, 150.0, 150.0, 90.0, 90.0], 0).unwrap();
        let combined =
            PumpingSchedule::new(s1.rates() + s2.rates(), 0).unwrap();

        let sum = glover_series(&s1) + glover_series(&s2);
        let direct = glover_series(&combined);
        for (a, b) in sum.iter().zip(direct.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Zero-before-pumping: with all-zero rate before the first pumping
    // index, every earlier output row is exactly zero.
    fn output_is_exactly_zero_before_pumping_starts() {
        let schedule =
            PumpingSchedule::new(array![0.0, 0.0, 0.0, 400.0, 400.0, 400.0], 0).unwrap();
        let series = glover_series(&schedule);
        for row in 0..3 {
            assert_eq!(series[row], 0.0, "row {row} before pumping must be exactly zero");
        }
        assert!(series[4] > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Single-step exactness: one constant-rate step from day 0 degenerates
    // to a single direct solution evaluation over elapsed [0, N−1].
    fn single_step_reduces_to_direct_evaluation() {
        let schedule = PumpingSchedule::uniform(100.0, 11).unwrap();
        let series = glover_series(&schedule);
        let elapsed = Array1::from_iter((0..11).map(|step| step as f64));
        let direct = kernels::glover(1000.0, 0.1, elapsed.view(), 500.0, 100.0).unwrap();
        for (a, b) in series.iter().zip(direct.iter()) {
            assert_eq!(a, b, "superposed single step must equal the direct evaluation");
        }
    }

    #[test]
    // Purpose
    // -------
    // An all-zero schedule produces an identically zero output, not an
    // error; an empty schedule produces an empty output.
    fn zero_and_empty_schedules_produce_zero_output() {
        let zero = PumpingSchedule::uniform(0.0, 5).unwrap();
        let series = glover_series(&zero);
        assert!(series.iter().all(|&value| value == 0.0));

        let empty = PumpingSchedule::new(array![], 0).unwrap();
        let out = superpose(0, 1, &empty.rate_changes(), ramp).unwrap();
        assert_eq!(out.dim(), (0, 1));
    }

    #[test]
    // Purpose
    // -------
    // Paired-output solutions accumulate per column with the same
    // alignment as scalar ones.
    //
    // Given
    // -----
    // - A two-column kernel: column 0 = delta·elapsed, column 1 =
    //   2·delta·elapsed.
    // - Schedule [4, 4, 6, 6]: events (0, +4) and (2, +2).
    //
    // Expect
    // ------
    // - First event: 4·[0, 1, 2, 3] from row 0; second: 2·[0, 1, 2] from
    //   row 1. Column 0 totals [0, 4, 10, 16]; column 1 doubles it.
    fn paired_output_columns_accumulate_independently() {
        let schedule = PumpingSchedule::new(array![4.0, 4.0, 6.0, 6.0], 0).unwrap();
        let out = superpose(4, 2, &schedule.rate_changes(), |elapsed, delta| {
            Ok(Array2::from_shape_fn((elapsed.len(), 2), |(row, col)| {
                delta * elapsed[row] * (col + 1) as f64
            }))
        })
        .unwrap();
        let expected = [0.0, 4.0, 10.0, 16.0];
        for (row, value) in expected.iter().enumerate() {
            assert_eq!(out[[row, 0]], *value, "column 0, row {row}");
            assert_eq!(out[[row, 1]], 2.0 * value, "column 1, row {row}");
        }
    }
}
