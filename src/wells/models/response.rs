//! WellResponse — one pumping well's effect on one observation target.
//!
//! Purpose
//! -------
//! Represent the response of a single observation target (a stream reach,
//! or a point such as an assessed well or spring) to a single pumping
//! well's schedule, computed with one drawdown method and one depletion
//! method. Construction validates everything up front; the output series
//! are computed lazily on first access and memoized.
//!
//! Key behaviors
//! -------------
//! - [`WellResponse::new`] validates aquifer parameters, the apportionment
//!   fraction, and the chosen methods' required extras, so later
//!   evaluation failures are limited to genuine numerical dispatch.
//! - [`WellResponse::drawdown`] superposes the drawdown method over the
//!   schedule's rate changes into an `(n × columns)` array (one column for
//!   every registered method; two for paired-aquifer solutions).
//! - [`WellResponse::depletion`] does the same for the depletion method,
//!   scaling each rate step by the apportionment fraction first and
//!   applying the gpd/ft transmissivity shim for the `walton` method.
//! - Outputs memoize behind `std::sync::OnceLock`: computed once, shared
//!   thereafter. Fields are private and there are no setters, so a cached
//!   series can never go stale.
//!
//! Invariants & assumptions
//! ------------------------
//! - `transmissivity`, `storage`, and `dist` are finite and > 0.
//! - `apportionment`, when present, lies in [0, 1]; depletion with no
//!   apportionment uses the full rate (fraction 1).
//! - The schedule is validated and immutable; response length always
//!   equals the schedule length.
//! - Concurrent first reads may both compute; `OnceLock` keeps one result
//!   and the computation is deterministic, so this is benign.
use crate::solutions::extras::SolutionExtras;
use crate::solutions::registry::{DepletionMethod, DrawdownMethod};
use crate::solutions::units::GPD_PER_CFD;
use crate::wells::core::schedule::PumpingSchedule;
use crate::wells::core::superposition::superpose;
use crate::wells::errors::{WellError, WellResult};
use ndarray::{Array1, Array2, Axis};
use std::sync::OnceLock;

/// Kind of observation target a response is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// A stream reach (depletion target).
    Stream,
    /// A point target such as an assessed well or spring (drawdown).
    Well,
}

impl ResponseKind {
    /// Resolve a kind from its configuration name (`"stream"` / `"well"`).
    pub fn from_name(name: &str) -> WellResult<ResponseKind> {
        match name.trim().to_lowercase().as_str() {
            "stream" => Ok(ResponseKind::Stream),
            "well" => Ok(ResponseKind::Well),
            _ => Err(WellError::UnknownResponseKind { name: name.to_string() }),
        }
    }

    /// Configuration name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ResponseKind::Stream => "stream",
            ResponseKind::Well => "well",
        }
    }
}

/// Response of one observation target to one pumping well.
///
/// Immutable after construction; drawdown and depletion series are
/// memoized on first access. See the module docs for the validation and
/// caching contract.
#[derive(Debug)]
pub struct WellResponse {
    name: String,
    kind: ResponseKind,
    transmissivity: f64,
    storage: f64,
    dist: f64,
    schedule: PumpingSchedule,
    apportionment: Option<f64>,
    dd_method: DrawdownMethod,
    depl_method: DepletionMethod,
    extras: SolutionExtras,
    drawdown_cache: OnceLock<Array2<f64>>,
    depletion_cache: OnceLock<Array1<f64>>,
}

impl WellResponse {
    /// Construct a validated response.
    ///
    /// # Arguments
    /// - `name`: observation-target name (keys the output maps upstream).
    /// - `kind`: [`ResponseKind::Stream`] or [`ResponseKind::Well`].
    /// - `transmissivity`: aquifer transmissivity [ft²/day], > 0.
    /// - `storage`: aquifer storage coefficient [-], > 0.
    /// - `dist`: distance from the pumping well to the target [ft], > 0.
    /// - `schedule`: validated pumping schedule (owned by the response).
    /// - `apportionment`: fraction of depletion attributed to this target,
    ///   in [0, 1]; `None` means the full rate.
    /// - `dd_method` / `depl_method`: registry method identifiers.
    /// - `extras`: method-specific extra parameters, validated here
    ///   against both methods' required-extras lists.
    ///
    /// # Errors
    /// - [`WellError::Solution`] for non-positive/non-finite aquifer
    ///   parameters or missing/invalid required extras.
    /// - [`WellError::InvalidApportionment`] for fractions outside [0, 1].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>, kind: ResponseKind, transmissivity: f64, storage: f64, dist: f64,
        schedule: PumpingSchedule, apportionment: Option<f64>, dd_method: DrawdownMethod,
        depl_method: DepletionMethod, extras: SolutionExtras,
    ) -> WellResult<WellResponse> {
        let name = name.into();
        for (param, value) in
            [("transmissivity", transmissivity), ("storage", storage), ("dist", dist)]
        {
            if !value.is_finite() || value <= 0.0 {
                return Err(crate::solutions::errors::SolutionError::InvalidParameter {
                    param,
                    value,
                }
                .into());
            }
        }
        if let Some(fraction) = apportionment {
            if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                return Err(WellError::InvalidApportionment { name, value: fraction });
            }
        }
        dd_method.validate_extras(&extras)?;
        depl_method.validate_extras(&extras)?;

        Ok(WellResponse {
            name,
            kind,
            transmissivity,
            storage,
            dist,
            schedule,
            apportionment,
            dd_method,
            depl_method,
            extras,
            drawdown_cache: OnceLock::new(),
            depletion_cache: OnceLock::new(),
        })
    }

    /// Drawdown time series at the target, one row per schedule sample and
    /// one column per solution output (`dd_method.output_columns()`).
    ///
    /// Computed on first access and memoized.
    pub fn drawdown(&self) -> WellResult<&Array2<f64>> {
        if let Some(cached) = self.drawdown_cache.get() {
            return Ok(cached);
        }
        let computed = self.calc_drawdown()?;
        Ok(self.drawdown_cache.get_or_init(|| computed))
    }

    /// Streamflow-depletion time series at the target [ft³/day].
    ///
    /// Computed on first access and memoized. Each rate step is scaled by
    /// the apportionment fraction before solution evaluation.
    pub fn depletion(&self) -> WellResult<&Array1<f64>> {
        if let Some(cached) = self.depletion_cache.get() {
            return Ok(cached);
        }
        let computed = self.calc_depletion()?;
        Ok(self.depletion_cache.get_or_init(|| computed))
    }

    /// Peak depletion: the maximum absolute value over the series,
    /// skipping NaN. Zero for an empty schedule.
    pub fn peak_depletion(&self) -> WellResult<f64> {
        let series = self.depletion()?;
        Ok(series.iter().filter(|value| !value.is_nan()).fold(0.0, |max, &v| max.max(v.abs())))
    }

    fn calc_drawdown(&self) -> WellResult<Array2<f64>> {
        let events = self.schedule.rate_changes();
        let out = superpose(
            self.schedule.len(),
            self.dd_method.output_columns(),
            &events,
            |elapsed, delta| {
                self.dd_method.eval(
                    self.transmissivity,
                    self.storage,
                    elapsed.view(),
                    self.dist,
                    delta,
                    &self.extras,
                )
            },
        )?;
        Ok(out)
    }

    fn calc_depletion(&self) -> WellResult<Array1<f64>> {
        let events = self.schedule.rate_changes();
        let fraction = self.apportionment.unwrap_or(1.0);
        // Walton is the one method whose transmissivity argument is gpd/ft.
        let transmissivity = if self.depl_method.uses_gpd_transmissivity() {
            self.transmissivity * GPD_PER_CFD
        } else {
            self.transmissivity
        };
        let out = superpose(self.schedule.len(), 1, &events, |elapsed, delta| {
            self.depl_method
                .eval(
                    transmissivity,
                    self.storage,
                    elapsed.view(),
                    self.dist,
                    delta * fraction,
                    &self.extras,
                )
                .map(|qs| qs.insert_axis(Axis(1)))
        })?;
        Ok(out.index_axis(Axis(1), 0).to_owned())
    }

    /// Observation-target name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observation-target kind.
    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Aquifer transmissivity [ft²/day].
    pub fn transmissivity(&self) -> f64 {
        self.transmissivity
    }

    /// Aquifer storage coefficient [-].
    pub fn storage(&self) -> f64 {
        self.storage
    }

    /// Distance from the pumping well to the target [ft].
    pub fn dist(&self) -> f64 {
        self.dist
    }

    /// The pumping schedule driving this response.
    pub fn schedule(&self) -> &PumpingSchedule {
        &self.schedule
    }

    /// Apportionment fraction, if configured.
    pub fn apportionment(&self) -> Option<f64> {
        self.apportionment
    }

    /// Configured drawdown method.
    pub fn dd_method(&self) -> DrawdownMethod {
        self.dd_method
    }

    /// Configured depletion method.
    pub fn depl_method(&self) -> DepletionMethod {
        self.depl_method
    }

    /// Method-specific extra parameters.
    pub fn extras(&self) -> &SolutionExtras {
        &self.extras
    }
}
