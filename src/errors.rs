use crate::parameter::ParameterError;
use thiserror::Error;

/// Inputs that are rejected before any numerical work is done.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    #[error("Absolute temperature (T) cannot be less than or equal to 0, got {0}.")]
    Temperature(f64),
    #[error("Pressure (P) cannot be less than or equal to 0, got {0}.")]
    Pressure(f64),
    #[error("Critical temperature (Tc) cannot be less than or equal to 0, got {0}.")]
    CriticalTemperature(f64),
    #[error("Critical pressure (Pc) cannot be less than or equal to 0, got {0}.")]
    CriticalPressure(f64),
    #[error("Universal gas constant (R) cannot be less than or equal to 0, got {0}.")]
    GasConstant(f64),
    #[error("Molar volume (V = {0}) has to exceed the co-volume (b = {1}).")]
    Volume(f64, f64),
    #[error("Invalid input: {0}.")]
    Input(&'static str),
}

/// Error type for improperly defined states and convergence problems.
#[derive(Error, Debug)]
pub enum EosError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Equation provided is not cubic (a = 0).")]
    NotCubic,
    #[error("`{0}` did not converge within the maximum number of iterations.")]
    NotConverged(String),
    #[error("`{0}` encountered illegal values during the iteration.")]
    IterationFailed(String),
    #[error("`{0}` did not find the three-root region of the equation of state.")]
    TwoPhaseRegionNotFound(String),
    #[error("`{0}` exceeded the maximum duration.")]
    Timeout(String),
    #[error("No real molar volume found in `{0}`.")]
    NoRealRoot(String),
    #[error("System is supercritical.")]
    SuperCritical,
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Convenience type for `Result<T, EosError>`.
pub type EosResult<T> = Result<T, EosError>;
