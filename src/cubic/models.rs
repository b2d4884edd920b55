use super::{CubicModel, ShapeParameters};
use num_dual::DualNum;
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

/// Soave type alpha function $\left(1+m\left(1-\sqrt{T_r}\right)\right)^2$.
fn soave<D: DualNum<f64> + Copy>(reduced_temperature: D, m: f64) -> D {
    ((-reduced_temperature.sqrt() + 1.0) * m + 1.0).powi(2)
}

/// The van der Waals equation of state (1873).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VanDerWaals;

impl CubicModel for VanDerWaals {
    fn alpha<D: DualNum<f64> + Copy>(&self, _: D, _: f64) -> D {
        D::one()
    }

    fn shape_parameters(&self) -> ShapeParameters {
        ShapeParameters::new(0.0, 0.0, 1.0 / 8.0, 27.0 / 64.0)
    }
}

/// The Redlich-Kwong equation of state (1949).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedlichKwong;

impl CubicModel for RedlichKwong {
    fn alpha<D: DualNum<f64> + Copy>(&self, reduced_temperature: D, _: f64) -> D {
        reduced_temperature.sqrt().recip()
    }

    fn shape_parameters(&self) -> ShapeParameters {
        ShapeParameters::new(1.0, 0.0, 0.08664, 0.42728)
    }
}

/// The Soave-Redlich-Kwong equation of state (1972).
///
/// The quadratic coefficient of $m(\omega)$ is $-0.716$.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SoaveRedlichKwong;

impl CubicModel for SoaveRedlichKwong {
    fn alpha<D: DualNum<f64> + Copy>(&self, reduced_temperature: D, acentric_factor: f64) -> D {
        let m = 0.480 + acentric_factor * (1.574 - acentric_factor * 0.716);
        soave(reduced_temperature, m)
    }

    fn shape_parameters(&self) -> ShapeParameters {
        ShapeParameters::new(1.0, 0.0, 0.08664, 0.42728)
    }
}

/// The Peng-Robinson equation of state (1976).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PengRobinson;

impl CubicModel for PengRobinson {
    fn alpha<D: DualNum<f64> + Copy>(&self, reduced_temperature: D, acentric_factor: f64) -> D {
        let m = 0.37464 + acentric_factor * (1.54226 - acentric_factor * 0.26992);
        soave(reduced_temperature, m)
    }

    fn shape_parameters(&self) -> ShapeParameters {
        ShapeParameters::new(1.0 + SQRT_2, 1.0 - SQRT_2, 0.07780, 0.45724)
    }
}
