//! solutions — closed-form analytical solutions and their registries.
//!
//! Purpose
//! -------
//! Provide the leaf layer of the crate: special functions, the vectorized
//! analytical solutions for well drawdown and streamflow depletion, the
//! method registries that dispatch on user-facing names, the value object
//! carrying method-specific extra parameters, and the unit-conversion
//! constants of the system boundary. The superposition engine in
//! [`wells`](crate::wells) depends only on this layer's signatures, never on
//! solution internals.
//!
//! Key behaviors
//! -------------
//! - Vectorized solutions in [`kernels`]: [`theis`](kernels::theis),
//!   [`glover`](kernels::glover), [`walton`](kernels::walton),
//!   [`hunt99`](kernels::hunt99), and the [`sdf`](kernels::sdf) depletion
//!   factor, each a pure function of `(T, S, time, dist, Q, extras)`.
//! - Fixed name → method tables in [`registry`], resolved case-insensitively
//!   and rejected at the boundary with `UnknownMethod`.
//! - One [`SolutionExtras`] value object instead of a dozen nullable
//!   arguments, validated once against each method's required-extras list.
//! - Numerically stable special functions in [`special`] (`E1`, log-space
//!   `exp·erfc`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Solutions are linear in the rate `Q`; the rate only scales the
//!   response. Superposition correctness upstream relies on this.
//! - Elapsed times `<= 0` produce exactly zero response.
//! - Physical parameters are validated on entry; validated inputs never
//!   produce NaN.
//!
//! Conventions
//! -----------
//! - Units are feet and days (rates ft³/day) except the `walton` gpd/ft
//!   transmissivity variant; conversions live in [`units`].
//! - Errors are surfaced as [`SolutionError`] with the offending method or
//!   parameter named; nothing in this layer panics on user input.

pub mod errors;
pub mod extras;
pub mod kernels;
pub mod registry;
pub mod special;
pub mod units;

pub use self::errors::{SolutionError, SolutionResult};
pub use self::extras::SolutionExtras;
pub use self::registry::{DepletionMethod, DrawdownMethod};
pub use self::units::{CFD2CFS, CFD2GPM, GPD_PER_CFD, GPM2CFD};
