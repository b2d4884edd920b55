//! Fugacity coefficients and vapor-liquid equilibria of pure substances.
mod fugacity;
mod phase_diagram_pure;
mod vle_pure;
pub use fugacity::ln_fugacity_coefficient;
pub use phase_diagram_pure::{Isotherm, PhaseDiagram};
pub use vle_pure::{wilson_pressure, SaturationPoint};
