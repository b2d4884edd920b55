//! Cubic equations of state for pure substances.
//!
//! The crate provides
//! * an exact solver for cubic polynomials ([solve_cubic]),
//! * the van der Waals, Redlich-Kwong, Soave-Redlich-Kwong and Peng-Robinson
//!   equations of state in the generic $(\sigma, \varepsilon, \Omega, \Psi)$ form ([cubic]),
//! * molar volumes and pressures for a given state ([EosConfig]),
//! * fugacity coefficients and saturation pressures from the equal fugacity condition
//!   ([PhaseDiagram], [SaturationPoint]).
//!
//! All calculations use the units in which the critical properties and the gas constant
//! are supplied, e.g., bar, cm³/mol and [RGAS_BAR_CM3].
#![warn(clippy::all)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]
use std::time::Duration;

/// Print messages with level `Verbosity::Iter` or higher.
#[macro_export]
macro_rules! log_iter {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= Verbosity::Iter {
            println!($($arg)*);
        }
    }
}

/// Print messages with level `Verbosity::Result` or higher.
#[macro_export]
macro_rules! log_result {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= Verbosity::Result {
            println!($($arg)*);
        }
    }
}

pub mod cubic;
mod errors;
pub mod parameter;
mod phase_equilibria;
mod roots;
mod state;
pub use cubic::{CubicModel, Model, ShapeParameters};
pub use errors::{EosError, EosResult, ValidationError};
pub use phase_equilibria::{
    ln_fugacity_coefficient, wilson_pressure, Isotherm, PhaseDiagram, SaturationPoint,
};
pub use roots::{real_roots, solve_cubic};
pub use state::{EosConfig, Phase, PressureResult, VolumeResult};

/// Universal gas constant in J/(mol K).
pub const RGAS: f64 = 8.314;

/// Universal gas constant in bar cm³/(mol K).
pub const RGAS_BAR_CM3: f64 = RGAS * 10.0;

/// Level of detail in the iteration output.
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Do not print output.
    #[default]
    None,
    /// Print information about the success of failure of the iteration.
    Result,
    /// Print a detailed outpur for every iteration.
    Iter,
}

/// Options for the phase equilibrium solvers.
///
/// If the values are [None], solver specific default
/// values are used.
#[derive(Copy, Clone, Debug, Default)]
pub struct SolverOptions {
    /// Maximum number of iterations.
    pub max_iter: Option<usize>,
    /// Tolerance.
    pub tol: Option<f64>,
    /// Iteration outpput indicated by the [Verbosity] enum.
    pub verbosity: Verbosity,
    /// Wall clock budget of a single solver call.
    pub max_duration: Option<Duration>,
}

impl From<(Option<usize>, Option<f64>, Option<Verbosity>)> for SolverOptions {
    fn from(options: (Option<usize>, Option<f64>, Option<Verbosity>)) -> Self {
        Self {
            max_iter: options.0,
            tol: options.1,
            verbosity: options.2.unwrap_or(Verbosity::None),
            max_duration: None,
        }
    }
}

impl SolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn tol(mut self, tol: f64) -> Self {
        self.tol = Some(tol);
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn max_duration(mut self, max_duration: Duration) -> Self {
        self.max_duration = Some(max_duration);
        self
    }

    pub fn unwrap_or(self, max_iter: usize, tol: f64) -> (usize, f64, Verbosity) {
        (
            self.max_iter.unwrap_or(max_iter),
            self.tol.unwrap_or(tol),
            self.verbosity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_options_defaults() {
        let (max_iter, tol, verbosity) = SolverOptions::default().unwrap_or(100, 1e-8);
        assert_eq!(max_iter, 100);
        assert_eq!(tol, 1e-8);
        assert_eq!(verbosity, Verbosity::None);

        let options = SolverOptions::new()
            .max_iter(10)
            .tol(1e-4)
            .verbosity(Verbosity::Iter)
            .max_duration(Duration::from_millis(5));
        let (max_iter, tol, verbosity) = options.unwrap_or(100, 1e-8);
        assert_eq!(max_iter, 10);
        assert_eq!(tol, 1e-4);
        assert!(verbosity > Verbosity::Result);
        assert_eq!(options.max_duration, Some(Duration::from_millis(5)));
    }

    #[test]
    fn solver_options_from_tuple() {
        let options: SolverOptions = (Some(3), None, None).into();
        assert_eq!(options.unwrap_or(100, 1e-8), (3, 1e-8, Verbosity::None));
    }
}
