//! Closed-form analytical solutions for well drawdown and streamflow
//! depletion.
//!
//! This module provides:
//! - [`theis`] — drawdown at a point from a constant-rate well (Theis 1935),
//!   via the well function `W(u) = E1(u)`.
//! - [`glover`] — streamflow depletion for a fully penetrating stream in
//!   perfect hydraulic connection (Glover & Balmer 1954), `erfc`-based.
//! - [`walton`] — the same depletion formula in the spreadsheet-traditional
//!   units, taking transmissivity in gallons-per-day-per-foot.
//! - [`hunt99`] — streamflow depletion for a stream with a semipervious bed
//!   (Hunt 1999); degenerates to [`glover`] as the streambed conductance
//!   grows and to zero depletion as it vanishes.
//! - [`sdf`] — the Jenkins (1968) streamflow depletion factor `dist²·S/T`.
//!
//! Conventions:
//! - Signature order is `(T, S, time, dist, Q, extra…)`. Time is a vector
//!   of elapsed days since the rate step began; entries `<= 0` produce a
//!   zero response (no effect before pumping starts).
//! - Consistent length³/time units throughout (ft and days); only
//!   [`walton`] departs, taking `T` in gpd/ft.
//! - All solutions are linear in `Q`: the rate only scales the response.
//! - Physical parameters are validated on entry and rejected with
//!   [`SolutionError::InvalidParameter`]; the functions themselves never
//!   produce NaN for validated inputs.
use crate::solutions::errors::{SolutionError, SolutionResult};
use crate::solutions::special::{exp1, exp_erfc};
use ndarray::{Array1, ArrayView1};
use statrs::function::erf::erfc;

/// Check that a physical parameter is finite and strictly positive.
fn validate_positive(param: &'static str, value: f64) -> SolutionResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SolutionError::InvalidParameter { param, value });
    }
    Ok(())
}

/// Check that a parameter is finite (sign unrestricted; rate steps from
/// superposition are negative when pumping decreases).
fn validate_finite(param: &'static str, value: f64) -> SolutionResult<()> {
    if !value.is_finite() {
        return Err(SolutionError::InvalidParameter { param, value });
    }
    Ok(())
}

/// Check every elapsed-time entry is finite.
fn validate_times(time: ArrayView1<'_, f64>) -> SolutionResult<()> {
    for &t in time.iter() {
        if !t.is_finite() {
            return Err(SolutionError::InvalidParameter { param: "time", value: t });
        }
    }
    Ok(())
}

/// Theis (1935) drawdown at distance `dist` from a well pumping at rate `q`.
///
/// # Arguments
/// - `transmissivity`: aquifer transmissivity `T` [ft²/day], > 0.
/// - `storage`: aquifer storage coefficient `S` [-], > 0.
/// - `time`: elapsed days since pumping began; entries `<= 0` yield 0.
/// - `dist`: distance from the well to the observation point [ft], > 0.
/// - `q`: pumping rate [ft³/day]; any finite value.
///
/// # Returns
/// Drawdown [ft] at each elapsed time: `s = Q/(4πT) · W(dist²·S/(4·T·t))`.
pub fn theis(
    transmissivity: f64, storage: f64, time: ArrayView1<'_, f64>, dist: f64, q: f64,
) -> SolutionResult<Array1<f64>> {
    validate_positive("transmissivity", transmissivity)?;
    validate_positive("storage", storage)?;
    validate_positive("dist", dist)?;
    validate_finite("q", q)?;
    validate_times(time)?;

    let coefficient = q / (4.0 * std::f64::consts::PI * transmissivity);
    let u_scale = dist * dist * storage / (4.0 * transmissivity);
    Ok(time.mapv(|t| if t <= 0.0 { 0.0 } else { coefficient * exp1(u_scale / t) }))
}

/// Glover & Balmer (1954) streamflow depletion for a fully penetrating
/// stream in perfect hydraulic connection with the aquifer.
///
/// # Arguments
/// As [`theis`], with `dist` the well-to-stream distance.
///
/// # Returns
/// Depletion rate [ft³/day] at each elapsed time:
/// `Qs = Q · erfc( sqrt(dist²·S/(4·T·t)) )`.
pub fn glover(
    transmissivity: f64, storage: f64, time: ArrayView1<'_, f64>, dist: f64, q: f64,
) -> SolutionResult<Array1<f64>> {
    validate_positive("transmissivity", transmissivity)?;
    validate_positive("storage", storage)?;
    validate_positive("dist", dist)?;
    validate_finite("q", q)?;
    validate_times(time)?;

    let z_scale = dist * dist * storage / (4.0 * transmissivity);
    Ok(time.mapv(|t| if t <= 0.0 { 0.0 } else { q * erfc((z_scale / t).sqrt()) }))
}

/// Glover-type streamflow depletion with transmissivity in the traditional
/// spreadsheet units of gallons-per-day-per-foot (Walton 1963 curves).
///
/// Identical to [`glover`] under `T[gpd/ft] = 7.48 · T[ft²/day]`; the 7.48
/// is gallons per cubic foot, folded into the depletion argument here so
/// callers can pass `T` straight off a gpd/ft worksheet.
///
/// # Arguments
/// As [`glover`], except `transmissivity_gpd` is in gpd/ft.
pub fn walton(
    transmissivity_gpd: f64, storage: f64, time: ArrayView1<'_, f64>, dist: f64, q: f64,
) -> SolutionResult<Array1<f64>> {
    validate_positive("transmissivity", transmissivity_gpd)?;
    validate_positive("storage", storage)?;
    validate_positive("dist", dist)?;
    validate_finite("q", q)?;
    validate_times(time)?;

    let z_scale =
        crate::solutions::units::GPD_PER_CFD * dist * dist * storage / (4.0 * transmissivity_gpd);
    Ok(time.mapv(|t| if t <= 0.0 { 0.0 } else { q * erfc((z_scale / t).sqrt()) }))
}

/// Hunt (1999) streamflow depletion for a stream separated from the aquifer
/// by a semipervious streambed.
///
/// # Arguments
/// As [`glover`], plus:
/// - `streambed_conductance`: streambed conductance λ [ft/day], `>= 0` and
///   finite. λ = 0 means no hydraulic connection (zero depletion); λ → ∞
///   recovers the Glover & Balmer solution.
///
/// # Returns
/// Depletion rate [ft³/day] at each elapsed time:
/// `Qs = Q·[ erfc(z) − exp(λ²t/(4ST) + λ·dist/(2T)) · erfc(√(λ²t/(4ST)) + z) ]`
/// with `z = sqrt(dist²·S/(4·T·t))`. The exponential-times-erfc image term
/// is evaluated through the stable [`exp_erfc`] product, which is what
/// keeps large-λ evaluations from overflowing.
pub fn hunt99(
    transmissivity: f64, storage: f64, time: ArrayView1<'_, f64>, dist: f64, q: f64,
    streambed_conductance: f64,
) -> SolutionResult<Array1<f64>> {
    validate_positive("transmissivity", transmissivity)?;
    validate_positive("storage", storage)?;
    validate_positive("dist", dist)?;
    validate_finite("q", q)?;
    validate_times(time)?;
    if !streambed_conductance.is_finite() || streambed_conductance < 0.0 {
        return Err(SolutionError::InvalidParameter {
            param: "streambed_conductance",
            value: streambed_conductance,
        });
    }

    let lambda = streambed_conductance;
    let z_scale = dist * dist * storage / (4.0 * transmissivity);
    let image_scale = lambda * lambda / (4.0 * storage * transmissivity);
    let image_offset = lambda * dist / (2.0 * transmissivity);
    Ok(time.mapv(|t| {
        if t <= 0.0 {
            return 0.0;
        }
        let z = (z_scale / t).sqrt();
        let b1_squared = image_scale * t;
        let image = exp_erfc(b1_squared + image_offset, b1_squared.sqrt() + z);
        q * (erfc(z) - image)
    }))
}

/// Jenkins (1968) streamflow depletion factor `sdf = dist²·S/T` [days], the
/// time scale at which depletion reaches about 28% of the pumping rate.
pub fn sdf(transmissivity: f64, storage: f64, dist: f64) -> SolutionResult<f64> {
    validate_positive("transmissivity", transmissivity)?;
    validate_positive("storage", storage)?;
    validate_positive("dist", dist)?;
    Ok(dist * dist * storage / transmissivity)
}
