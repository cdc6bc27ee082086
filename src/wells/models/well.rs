//! Well — fan-out of one pumping well into per-target responses.
//!
//! Purpose
//! -------
//! Evaluate one pumping well against every configured observation target:
//! build one [`WellResponse`] per stream (depletion) and per point target
//! (drawdown) from shared aquifer parameters and a shared schedule, then
//! aggregate the per-target series into name-keyed maps and a peak
//! depletion summary for reporting.
//!
//! Key behaviors
//! -------------
//! - Responses are built eagerly in [`Well::new`], which fails fast on any
//!   configuration mismatch before a single series is computed: every
//!   stream with a distance needs an apportionment entry, and — when a
//!   conductance map is supplied at all — a conductance entry.
//! - The well-level drawdown method is restricted to the point-drawdown
//!   family (`theis`); multi-output drawdown solutions are used through a
//!   [`WellResponse`] directly, keeping the well-level contract simple.
//! - [`Well::drawdown`], [`Well::depletion`], and [`Well::max_depletion`]
//!   collect each response's (memoized) output under the target name, in
//!   deterministic name order.
//!
//! Invariants & assumptions
//! ------------------------
//! - The apportionment map's key set covers the stream-distance map's key
//!   set; likewise the conductance map's when one is provided.
//! - A per-stream conductance entry overrides the base extras for that
//!   stream's response.
//! - Either every configured target produces a full series or the whole
//!   construction fails; partial results are never returned.
use crate::solutions::extras::SolutionExtras;
use crate::solutions::registry::{DepletionMethod, DrawdownMethod};
use crate::wells::core::schedule::PumpingSchedule;
use crate::wells::errors::{WellError, WellResult};
use crate::wells::models::response::{ResponseKind, WellResponse};
use ndarray::Array1;
use std::collections::{BTreeMap, HashMap};

/// One pumping well fanned out across its configured observation targets.
///
/// Holds one [`WellResponse`] per stream and per drawdown point; outputs
/// are computed lazily by the responses and collected here by name.
#[derive(Debug)]
pub struct Well {
    transmissivity: f64,
    storage: f64,
    schedule: PumpingSchedule,
    dd_method: DrawdownMethod,
    depl_method: DepletionMethod,
    stream_responses: Vec<WellResponse>,
    drawdown_responses: Vec<WellResponse>,
}

impl Well {
    /// Construct a well and its per-target responses.
    ///
    /// # Arguments
    /// - `transmissivity` / `storage`: aquifer parameters shared by every
    ///   response.
    /// - `schedule`: pumping schedule shared by every response.
    /// - `stream_dist`: stream name → distance [ft]; one depletion
    ///   response per entry.
    /// - `drawdown_dist`: point name → distance [ft]; one drawdown
    ///   response per entry.
    /// - `stream_apportionment`: stream name → fraction in [0, 1]; must
    ///   cover every key of `stream_dist`.
    /// - `streambed_conductance`: optional stream name → conductance
    ///   [ft/day]; when provided it must cover every key of `stream_dist`
    ///   and overrides the base extras per stream.
    /// - `depl_method` / `dd_method`: registry method identifiers; the
    ///   drawdown method must be the point-drawdown family.
    /// - `extras`: base extra parameters applied to every response.
    ///
    /// # Errors
    /// - [`WellError::UnsupportedDrawdownMethod`] for a non-point drawdown
    ///   method.
    /// - [`WellError::MissingApportionment`] / [`WellError::MissingConductance`]
    ///   for key-set mismatches (raised before any response is built).
    /// - Everything [`WellResponse::new`] rejects, fail-fast.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transmissivity: f64, storage: f64, schedule: PumpingSchedule,
        stream_dist: &HashMap<String, f64>, drawdown_dist: &HashMap<String, f64>,
        stream_apportionment: &HashMap<String, f64>,
        streambed_conductance: Option<&HashMap<String, f64>>, depl_method: DepletionMethod,
        dd_method: DrawdownMethod, extras: SolutionExtras,
    ) -> WellResult<Well> {
        if dd_method != DrawdownMethod::Theis {
            return Err(WellError::UnsupportedDrawdownMethod { method: dd_method.name().into() });
        }

        // Deterministic construction (and error) order regardless of hash
        // iteration order.
        let mut stream_names: Vec<&String> = stream_dist.keys().collect();
        stream_names.sort();
        let mut point_names: Vec<&String> = drawdown_dist.keys().collect();
        point_names.sort();

        // Fail fast on key-set mismatches before building any response.
        for name in &stream_names {
            if !stream_apportionment.contains_key(*name) {
                return Err(WellError::MissingApportionment { stream: (*name).clone() });
            }
            if let Some(conductance) = streambed_conductance {
                if !conductance.contains_key(*name) {
                    return Err(WellError::MissingConductance { stream: (*name).clone() });
                }
            }
        }

        let mut stream_responses = Vec::with_capacity(stream_names.len());
        for name in &stream_names {
            let mut response_extras = extras;
            if let Some(conductance) = streambed_conductance {
                response_extras.streambed_conductance = conductance.get(*name).copied();
            }
            stream_responses.push(WellResponse::new(
                (*name).clone(),
                ResponseKind::Stream,
                transmissivity,
                storage,
                stream_dist[*name],
                schedule.clone(),
                Some(stream_apportionment[*name]),
                dd_method,
                depl_method,
                response_extras,
            )?);
        }

        let mut drawdown_responses = Vec::with_capacity(point_names.len());
        for name in &point_names {
            drawdown_responses.push(WellResponse::new(
                (*name).clone(),
                ResponseKind::Well,
                transmissivity,
                storage,
                drawdown_dist[*name],
                schedule.clone(),
                None,
                dd_method,
                depl_method,
                extras,
            )?);
        }

        Ok(Well {
            transmissivity,
            storage,
            schedule,
            dd_method,
            depl_method,
            stream_responses,
            drawdown_responses,
        })
    }

    /// Drawdown series per point target, keyed by name.
    ///
    /// The well-level drawdown family is single-column, so each series is
    /// one value per schedule sample [ft].
    pub fn drawdown(&self) -> WellResult<BTreeMap<String, Array1<f64>>> {
        let mut out = BTreeMap::new();
        for response in &self.drawdown_responses {
            let dd = response.drawdown()?;
            out.insert(response.name().to_string(), dd.column(0).to_owned());
        }
        Ok(out)
    }

    /// Depletion series per stream [ft³/day], keyed by name.
    pub fn depletion(&self) -> WellResult<BTreeMap<String, Array1<f64>>> {
        let mut out = BTreeMap::new();
        for response in &self.stream_responses {
            out.insert(response.name().to_string(), response.depletion()?.clone());
        }
        Ok(out)
    }

    /// Peak depletion per stream [ft³/day]: the maximum absolute value
    /// over each stream's series, keyed by name.
    pub fn max_depletion(&self) -> WellResult<BTreeMap<String, f64>> {
        let mut out = BTreeMap::new();
        for response in &self.stream_responses {
            out.insert(response.name().to_string(), response.peak_depletion()?);
        }
        Ok(out)
    }

    /// Stream responses in name order.
    pub fn stream_responses(&self) -> &[WellResponse] {
        &self.stream_responses
    }

    /// Drawdown-point responses in name order.
    pub fn drawdown_responses(&self) -> &[WellResponse] {
        &self.drawdown_responses
    }

    /// Aquifer transmissivity [ft²/day].
    pub fn transmissivity(&self) -> f64 {
        self.transmissivity
    }

    /// Aquifer storage coefficient [-].
    pub fn storage(&self) -> f64 {
        self.storage
    }

    /// The shared pumping schedule.
    pub fn schedule(&self) -> &PumpingSchedule {
        &self.schedule
    }

    /// Configured drawdown method.
    pub fn dd_method(&self) -> DrawdownMethod {
        self.dd_method
    }

    /// Configured depletion method.
    pub fn depl_method(&self) -> DepletionMethod {
        self.depl_method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Fan-out: per-target maps keyed by name, and the exact
    //   apportionment proportionality between streams sharing a distance.
    // - Fail-fast configuration validation (missing apportionment /
    //   conductance keys) and the per-stream conductance override.
    // - max_depletion consistency with the series.
    //
    // Single-response numerics are covered in `wells::models::response`.
    // -------------------------------------------------------------------------

    fn to_map(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(name, value)| (name.to_string(), *value)).collect()
    }

    fn two_stream_well(conductance: Option<&HashMap<String, f64>>) -> WellResult<Well> {
        let schedule = PumpingSchedule::uniform(19_250.0, 100).unwrap();
        Well::new(
            1000.0,
            0.1,
            schedule,
            &to_map(&[("left fork", 500.0), ("right fork", 500.0)]),
            &to_map(&[("muni", 1200.0)]),
            &to_map(&[("left fork", 0.3), ("right fork", 0.7)]),
            conductance,
            DepletionMethod::Glover,
            DrawdownMethod::Theis,
            SolutionExtras::none(),
        )
    }

    #[test]
    // Purpose
    // -------
    // Two streams at the same distance with apportionments 0.3 and 0.7
    // must produce depletion series that are exact scalar multiples of
    // each other at every index.
    fn fan_out_scales_streams_by_apportionment() {
        let well = two_stream_well(None).unwrap();
        let depletion = well.depletion().unwrap();
        assert_eq!(depletion.len(), 2);
        let left = &depletion["left fork"];
        let right = &depletion["right fork"];
        assert_eq!(left.len(), 100);
        for (a, b) in left.iter().zip(right.iter()) {
            assert_relative_eq!(a * (0.7 / 0.3), *b, max_relative = 1e-12);
        }
    }

    #[test]
    fn drawdown_map_is_keyed_by_point_name() {
        let well = two_stream_well(None).unwrap();
        let drawdown = well.drawdown().unwrap();
        assert_eq!(drawdown.len(), 1);
        let muni = &drawdown["muni"];
        assert_eq!(muni.len(), 100);
        assert_eq!(muni[0], 0.0);
        assert!(muni[99] > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // max_depletion must equal the maximum absolute value of each stream's
    // series (here: the final sample, since a constant-rate depletion
    // series grows monotonically).
    fn max_depletion_matches_the_series_peak() {
        let well = two_stream_well(None).unwrap();
        let depletion = well.depletion().unwrap();
        let peaks = well.max_depletion().unwrap();
        assert_eq!(peaks.len(), 2);
        for (name, series) in &depletion {
            assert_eq!(peaks[name], series[series.len() - 1]);
        }
    }

    #[test]
    // Purpose
    // -------
    // A stream with a distance but no apportionment entry must fail fast
    // at construction with the stream named.
    fn missing_apportionment_fails_fast() {
        let schedule = PumpingSchedule::uniform(1000.0, 10).unwrap();
        let err = Well::new(
            1000.0,
            0.1,
            schedule,
            &to_map(&[("left fork", 500.0), ("right fork", 800.0)]),
            &HashMap::new(),
            &to_map(&[("left fork", 1.0)]),
            None,
            DepletionMethod::Glover,
            DrawdownMethod::Theis,
            SolutionExtras::none(),
        )
        .unwrap_err();
        assert_eq!(err, WellError::MissingApportionment { stream: "right fork".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // When a conductance map is provided at all, every stream needs an
    // entry; a complete map overrides the base extras per stream.
    fn conductance_map_must_cover_every_stream() {
        let partial = to_map(&[("left fork", 7.1)]);
        let err = two_stream_well(Some(&partial)).unwrap_err();
        assert_eq!(err, WellError::MissingConductance { stream: "right fork".to_string() });

        let complete = to_map(&[("left fork", 7.1), ("right fork", 9.3)]);
        let well = two_stream_well(Some(&complete)).unwrap();
        let conductances: Vec<Option<f64>> = well
            .stream_responses()
            .iter()
            .map(|response| response.extras().streambed_conductance)
            .collect();
        assert_eq!(conductances, vec![Some(7.1), Some(9.3)]);
    }

    #[test]
    fn responses_are_built_in_name_order() {
        let well = two_stream_well(None).unwrap();
        let names: Vec<&str> =
            well.stream_responses().iter().map(|response| response.name()).collect();
        assert_eq!(names, vec!["left fork", "right fork"]);
    }

    #[test]
    fn all_zero_schedule_depletes_nothing() {
        let schedule = PumpingSchedule::uniform(0.0, 20).unwrap();
        let well = Well::new(
            1000.0,
            0.1,
            schedule,
            &to_map(&[("creek", 400.0)]),
            &HashMap::new(),
            &to_map(&[("creek", 1.0)]),
            None,
            DepletionMethod::Glover,
            DrawdownMethod::Theis,
            SolutionExtras::none(),
        )
        .unwrap();
        let depletion = well.depletion().unwrap();
        assert!(depletion["creek"].iter().all(|&value| value == 0.0));
        assert_eq!(well.max_depletion().unwrap()["creek"], 0.0);
    }
}
