//! Method-specific extra parameters for the analytical solutions.
//!
//! Purpose
//! -------
//! Collect every optional, method-specific parameter recognized by the
//! solution set in a single value object, so that responses carry one
//! [`SolutionExtras`] instead of threading a dozen nullable scalars through
//! every call. Which extras a method actually requires is declared by the
//! registries and validated once at response construction, not at
//! evaluation time.
//!
//! Key behaviors
//! -------------
//! - [`SolutionExtras`] stores all recognized extras as `Option<f64>` with
//!   `Default` producing the all-unset value.
//! - [`SolutionExtras::get`] looks an extra up by its registry name, which
//!   lets the registries drive required-parameter validation from a static
//!   name list.
//!
//! Conventions
//! -----------
//! - Units follow the solution set: lengths in feet, conductivities and
//!   conductances in feet per day, `sigma` dimensionless.
//! - Unrecognized names are a programming error on the registry side;
//!   `get` returns `None` for them, which reads as "unset".

/// All optional extra parameters recognized by the solution set.
///
/// Most methods need none of these; Hunt (1999) needs
/// `streambed_conductance`, and the semiconfined / two-aquifer solutions a
/// future registry may add consume the remainder (`t2`, `s2`, streambed and
/// aquitard geometry, and the `x`/`y` observation offsets). Every field is
/// optional; requirements are per-method and checked against the registry's
/// required-extras list when a response is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolutionExtras {
    /// Streambed conductance [ft/day] (Hunt 1999 family).
    pub streambed_conductance: Option<f64>,
    /// Saturated thickness of the semiconfining layer containing the
    /// stream [ft].
    pub bprime: Option<f64>,
    /// Distance from the stream bottom to the bottom of the semiconfining
    /// layer [ft].
    pub bdouble: Option<f64>,
    /// Porosity of the semiconfining layer [-].
    pub sigma: Option<f64>,
    /// Stream width [ft].
    pub width: Option<f64>,
    /// Transmissivity of the deeper aquifer [ft²/day].
    pub t2: Option<f64>,
    /// Storativity of the deeper aquifer [-].
    pub s2: Option<f64>,
    /// Streambed thickness [ft].
    pub streambed_thick: Option<f64>,
    /// Streambed hydraulic conductivity [ft/day].
    pub streambed_k: Option<f64>,
    /// Thickness of the intervening leaky aquitard [ft].
    pub aquitard_thick: Option<f64>,
    /// Hydraulic conductivity of the aquitard [ft/day].
    pub aquitard_k: Option<f64>,
    /// x-coordinate of the observation point, origin at the stream [ft].
    pub x: Option<f64>,
    /// y-coordinate of the observation point, origin at the pumping
    /// well [ft].
    pub y: Option<f64>,
}

impl SolutionExtras {
    /// The all-unset extras value, for methods that require none.
    pub fn none() -> SolutionExtras {
        SolutionExtras::default()
    }

    /// Extras carrying only a streambed conductance, the common case for
    /// Hunt (1999) depletion runs.
    pub fn with_streambed_conductance(streambed_conductance: f64) -> SolutionExtras {
        SolutionExtras { streambed_conductance: Some(streambed_conductance), ..Default::default() }
    }

    /// Look up an extra by its registry name.
    ///
    /// Returns `None` both for unset extras and for names outside the
    /// recognized set.
    pub(crate) fn get(&self, name: &str) -> Option<f64> {
        match name {
            "streambed_conductance" => self.streambed_conductance,
            "Bprime" => self.bprime,
            "Bdouble" => self.bdouble,
            "sigma" => self.sigma,
            "width" => self.width,
            "T2" => self.t2,
            "S2" => self.s2,
            "streambed_thick" => self.streambed_thick,
            "streambed_K" => self.streambed_k,
            "aquitard_thick" => self.aquitard_thick,
            "aquitard_K" => self.aquitard_k,
            "x" => self.x,
            "y" => self.y,
            _ => None,
        }
    }
}
