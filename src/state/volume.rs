use super::EosConfig;
use crate::errors::EosResult;
use crate::roots::{real_roots, solve_cubic};
use num_complex::Complex64;
use std::fmt;

/// Molar volumes of a state together with the parameters of the equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeResult {
    /// attraction parameter $a(T)$
    pub a: f64,
    /// co-volume $b$
    pub b: f64,
    /// all three roots of the cubic in $v$
    pub volumes: [Complex64; 3],
}

impl VolumeResult {
    /// The real roots in ascending order.
    pub fn clean(&self) -> Vec<f64> {
        real_roots(&self.volumes)
    }

    /// The smallest real root.
    pub fn liquid_volume(&self) -> Option<f64> {
        self.clean().first().copied()
    }

    /// The largest real root.
    pub fn vapor_volume(&self) -> Option<f64> {
        self.clean().last().copied()
    }
}

impl fmt::Display for VolumeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VolumeResult(a={}, b={}, volumes=[", self.a, self.b)?;
        for (i, v) in self.volumes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "])")
    }
}

impl EosConfig {
    /// Solve the equation of state for the molar volume at the
    /// temperature and pressure of the configuration.
    ///
    /// The cubic
    /// $$v^3+fv^2+gv+h=0$$
    /// is built with $v^\mathrm{ig}=RT/p$ and
    /// $$f=b(\sigma+\varepsilon-1)-v^\mathrm{ig}$$
    /// $$g=b\left((\varepsilon\sigma-\sigma-\varepsilon)b-(\sigma+\varepsilon)v^\mathrm{ig}\right)+a/p$$
    /// $$h=-\varepsilon\sigma b^2\left(b+v^\mathrm{ig}\right)-ab/p$$
    pub fn solve_for_volume(&self) -> EosResult<VolumeResult> {
        self.validate()?;

        let shape = self.shape_parameters();
        let (sigma, epsilon) = (shape.sigma, shape.epsilon);
        let b = self.co_volume();
        let a = self.attraction_parameter();
        let p = self.pressure;
        let v_ig = self.ideal_gas_volume();

        let f = b * (sigma + epsilon - 1.0) - v_ig;
        let g = b * ((epsilon * sigma - (sigma + epsilon)) * b - (sigma + epsilon) * v_ig) + a / p;
        let h = -epsilon * sigma * b * b * (b + v_ig) - a * b / p;

        let volumes = solve_cubic(1.0, f, g, h)?;
        Ok(VolumeResult { a, b, volumes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{EosError, ValidationError};
    use crate::RGAS_BAR_CM3;
    use approx::assert_relative_eq;

    fn ethane(pressure: f64) -> EosConfig {
        EosConfig::soave_redlich_kwong(250.0, pressure, 305.3, 48.72, 0.099, RGAS_BAR_CM3)
    }

    #[test]
    fn three_roots_in_two_phase_region() -> EosResult<()> {
        let result = ethane(13.253472566802017).solve_for_volume()?;
        assert_relative_eq!(result.a, 6346291.99, max_relative = 1e-6);
        assert_relative_eq!(result.b, 45.1386, max_relative = 1e-5);
        let roots = result.clean();
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 72.708, max_relative = 1e-4);
        assert_relative_eq!(roots[1], 236.017, max_relative = 1e-4);
        assert_relative_eq!(roots[2], 1259.543, max_relative = 1e-4);
        assert_eq!(result.liquid_volume(), Some(roots[0]));
        assert_eq!(result.vapor_volume(), Some(roots[2]));
        Ok(())
    }

    #[test]
    fn single_root_above_critical_temperature() -> EosResult<()> {
        let config = EosConfig::peng_robinson(300.0, 10.0, 305.3, 48.72, 0.099, RGAS_BAR_CM3);
        let roots = config.solve_for_volume()?.clean();
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 2280.90, max_relative = 1e-5);
        Ok(())
    }

    #[test]
    fn all_roots_exceed_co_volume() -> EosResult<()> {
        for p in [0.5, 5.0, 13.25, 30.0, 100.0] {
            let result = ethane(p).solve_for_volume()?;
            for v in result.clean() {
                assert!(v > result.b, "v={v} at p={p}");
            }
        }
        Ok(())
    }

    #[test]
    fn rejects_invalid_inputs_in_order() {
        let cases = [
            (
                EosConfig::van_der_waals(0.0, -1.0, 305.3, 48.72, RGAS_BAR_CM3),
                ValidationError::Temperature(0.0),
            ),
            (
                EosConfig::van_der_waals(250.0, 0.0, 305.3, 48.72, RGAS_BAR_CM3),
                ValidationError::Pressure(0.0),
            ),
            (
                EosConfig::redlich_kwong(250.0, 10.0, -305.3, 48.72, RGAS_BAR_CM3),
                ValidationError::CriticalTemperature(-305.3),
            ),
            (
                EosConfig::redlich_kwong(250.0, 10.0, 305.3, 0.0, RGAS_BAR_CM3),
                ValidationError::CriticalPressure(0.0),
            ),
            (
                EosConfig::peng_robinson(250.0, 10.0, 305.3, 48.72, 0.099, -8.314),
                ValidationError::GasConstant(-8.314),
            ),
        ];
        for (config, expected) in cases {
            match config.solve_for_volume() {
                Err(EosError::Validation(e)) => assert_eq!(e, expected),
                other => panic!("expected {expected:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn display() -> EosResult<()> {
        let result = ethane(10.0).solve_for_volume()?;
        assert!(result.to_string().starts_with("VolumeResult(a="));
        Ok(())
    }
}
