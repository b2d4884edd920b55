//! Generic cubic equations of state.
//!
//! All models share the pressure explicit form
//! $$p=\frac{RT}{v-b}-\frac{a(T)}{(v+\varepsilon b)(v+\sigma b)}$$
//! with $b=\Omega RT_c/p_c$ and $a(T)=\Psi\alpha(T_r,\omega)R^2T_c^2/p_c$.
//! A model is fully characterized by its [ShapeParameters] and its
//! alpha function, which are provided by the [CubicModel] trait.
use enum_dispatch::enum_dispatch;
use num_dual::DualNum;
use serde::{Deserialize, Serialize};
use std::fmt;

mod models;
pub use models::{PengRobinson, RedlichKwong, SoaveRedlichKwong, VanDerWaals};

/// Separation below which $\sigma$ and $\varepsilon$ are treated as equal.
pub(crate) const DEGENERATE_SHAPE_TOLERANCE: f64 = 1e-9;

/// Substance independent constants of a cubic equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    /// $\sigma$
    pub sigma: f64,
    /// $\varepsilon$
    pub epsilon: f64,
    /// $\Omega$
    pub omega: f64,
    /// $\Psi$
    pub psi: f64,
}

impl ShapeParameters {
    pub const fn new(sigma: f64, epsilon: f64, omega: f64, psi: f64) -> Self {
        Self {
            sigma,
            epsilon,
            omega,
            psi,
        }
    }

    /// Whether $\sigma = \varepsilon$, for which the attractive term of the
    /// fugacity coefficient degenerates (e.g. van der Waals).
    pub fn is_degenerate(&self) -> bool {
        (self.epsilon - self.sigma).abs() < DEGENERATE_SHAPE_TOLERANCE
    }
}

#[enum_dispatch]
pub trait CubicModel {
    /// The dimensionless alpha function $\alpha(T_r, \omega)$.
    fn alpha<D: DualNum<f64> + Copy>(&self, reduced_temperature: D, acentric_factor: f64) -> D;

    /// The constants $(\sigma, \varepsilon, \Omega, \Psi)$.
    fn shape_parameters(&self) -> ShapeParameters;
}

/// The cubic equations of state available in this crate.
#[enum_dispatch(CubicModel)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    VanDerWaals,
    RedlichKwong,
    SoaveRedlichKwong,
    PengRobinson,
}

impl Model {
    /// Whether the alpha function depends on the acentric factor.
    pub fn uses_acentric_factor(&self) -> bool {
        matches!(self, Self::SoaveRedlichKwong(_) | Self::PengRobinson(_))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VanDerWaals(_) => write!(f, "van der Waals"),
            Self::RedlichKwong(_) => write!(f, "Redlich-Kwong"),
            Self::SoaveRedlichKwong(_) => write!(f, "Soave-Redlich-Kwong"),
            Self::PengRobinson(_) => write!(f, "Peng-Robinson"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_dual::{first_derivative, Dual64};
    use std::f64::consts::SQRT_2;

    const MODELS: [Model; 4] = [
        Model::VanDerWaals(VanDerWaals),
        Model::RedlichKwong(RedlichKwong),
        Model::SoaveRedlichKwong(SoaveRedlichKwong),
        Model::PengRobinson(PengRobinson),
    ];

    #[test]
    fn alpha_is_one_at_critical_temperature() {
        for model in MODELS {
            for w in [0.0, 0.099, 0.3] {
                assert_relative_eq!(model.alpha(1.0_f64, w), 1.0, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn alpha_functions() {
        let (tr, w): (f64, f64) = (0.8, 0.2);
        assert_eq!(Model::from(VanDerWaals).alpha(tr, w), 1.0);
        assert_relative_eq!(
            Model::from(RedlichKwong).alpha(tr, w),
            1.0 / tr.sqrt(),
            max_relative = 1e-14
        );
        let m = 0.480 + 1.574 * w - 0.716 * w * w;
        assert_relative_eq!(
            Model::from(SoaveRedlichKwong).alpha(tr, w),
            (1.0 + m * (1.0 - tr.sqrt())).powi(2),
            max_relative = 1e-14
        );
        let m = 0.37464 + 1.54226 * w - 0.26992 * w * w;
        assert_relative_eq!(
            Model::from(PengRobinson).alpha(tr, w),
            (1.0 + m * (1.0 - tr.sqrt())).powi(2),
            max_relative = 1e-14
        );
    }

    #[test]
    fn alpha_decreases_with_temperature() {
        for model in &MODELS[1..] {
            let (_, da) = first_derivative(|tr: Dual64| model.alpha(tr, 0.1), 0.7);
            assert!(da < 0.0, "{model}");
        }
        let (_, da) = first_derivative(|tr: Dual64| VanDerWaals.alpha(tr, 0.1), 0.7);
        assert_eq!(da, 0.0);
    }

    #[test]
    fn shape_parameters() {
        let vdw = VanDerWaals.shape_parameters();
        assert_eq!(vdw, ShapeParameters::new(0.0, 0.0, 0.125, 27.0 / 64.0));
        assert!(vdw.is_degenerate());

        let rk = RedlichKwong.shape_parameters();
        assert_eq!(rk, SoaveRedlichKwong.shape_parameters());
        assert_eq!((rk.sigma, rk.epsilon), (1.0, 0.0));
        assert!(!rk.is_degenerate());

        let pr = PengRobinson.shape_parameters();
        assert_relative_eq!(pr.sigma, 1.0 + SQRT_2);
        assert_relative_eq!(pr.epsilon, 1.0 - SQRT_2);
        assert_eq!((pr.omega, pr.psi), (0.07780, 0.45724));
    }

    #[test]
    fn display() {
        assert_eq!(Model::from(PengRobinson).to_string(), "Peng-Robinson");
        assert!(Model::from(SoaveRedlichKwong).uses_acentric_factor());
        assert!(!Model::from(RedlichKwong).uses_acentric_factor());
    }

    #[test]
    fn serialize_model_names() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&Model::from(PengRobinson))?;
        assert_eq!(json, r#"{"peng_robinson":null}"#);
        let model: Model = serde_json::from_str(r#"{"soave_redlich_kwong":null}"#)?;
        assert_eq!(model, Model::from(SoaveRedlichKwong));
        Ok(())
    }
}
