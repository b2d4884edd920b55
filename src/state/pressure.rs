use super::EosConfig;
use crate::errors::{EosResult, ValidationError};
use num_dual::{first_derivative, Dual64, DualNum};
use std::fmt;

/// Pressure at a given molar volume together with the parameters of the equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureResult {
    pub a: f64,
    pub b: f64,
    pub pressure: f64,
}

impl fmt::Display for PressureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PressureResult(a={}, b={}, pressure={})",
            self.a, self.b, self.pressure
        )
    }
}

impl EosConfig {
    /// Pressure $p=\frac{RT}{v-b}-\frac{a}{(v+\varepsilon b)(v+\sigma b)}$
    /// at the temperature of the configuration.
    ///
    /// The pressure stored in the configuration is not used. Volumes that
    /// do not exceed the co-volume are rejected.
    pub fn pressure(&self, volume: f64) -> EosResult<PressureResult> {
        self.validate_volume(volume)?;
        Ok(PressureResult {
            a: self.attraction_parameter(),
            b: self.co_volume(),
            pressure: self.pressure_generic(self.temperature, volume),
        })
    }

    /// Partial derivative of the pressure with respect to the molar volume.
    pub fn dp_dv(&self, volume: f64) -> EosResult<f64> {
        self.validate_volume(volume)?;
        let t = self.temperature;
        let (_, dp) = first_derivative(
            |v: Dual64| self.pressure_generic(Dual64::from(t), v),
            volume,
        );
        Ok(dp)
    }

    /// Partial derivative of the pressure with respect to the temperature.
    pub fn dp_dt(&self, volume: f64) -> EosResult<f64> {
        self.validate_volume(volume)?;
        let (_, dp) = first_derivative(
            |t: Dual64| self.pressure_generic(t, Dual64::from(volume)),
            self.temperature,
        );
        Ok(dp)
    }

    fn validate_volume(&self, volume: f64) -> Result<(), ValidationError> {
        self.validate_without_pressure()?;
        let b = self.co_volume();
        if volume > b {
            Ok(())
        } else {
            Err(ValidationError::Volume(volume, b))
        }
    }

    pub(crate) fn pressure_generic<D: DualNum<f64> + Copy>(&self, temperature: D, volume: D) -> D {
        let shape = self.shape_parameters();
        let b = self.co_volume();
        let a = self.attraction(temperature);
        temperature * self.gas_constant / (volume - b)
            - a / ((volume + shape.epsilon * b) * (volume + shape.sigma * b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EosError;
    use crate::RGAS_BAR_CM3;
    use approx::assert_relative_eq;

    fn configs(temperature: f64, pressure: f64) -> [EosConfig; 4] {
        let (tc, pc, w) = (305.3, 48.72, 0.099);
        [
            EosConfig::van_der_waals(temperature, pressure, tc, pc, RGAS_BAR_CM3),
            EosConfig::redlich_kwong(temperature, pressure, tc, pc, RGAS_BAR_CM3),
            EosConfig::soave_redlich_kwong(temperature, pressure, tc, pc, w, RGAS_BAR_CM3),
            EosConfig::peng_robinson(temperature, pressure, tc, pc, w, RGAS_BAR_CM3),
        ]
    }

    #[test]
    fn pressure_of_volume_roots() -> EosResult<()> {
        for (t, p) in [(250.0, 13.25), (250.0, 2.0), (290.0, 36.0), (400.0, 60.0)] {
            for config in configs(t, p) {
                let result = config.solve_for_volume()?;
                for v in result.clean() {
                    let pressure = config.pressure(v)?;
                    assert_relative_eq!(pressure.pressure, p, max_relative = 1e-9);
                    assert_eq!(pressure.a, result.a);
                    assert_eq!(pressure.b, result.b);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn ideal_gas_limit() -> EosResult<()> {
        for config in configs(300.0, 1.0) {
            let v = 1e9;
            let p = config.pressure(v)?.pressure;
            assert_relative_eq!(p, RGAS_BAR_CM3 * 300.0 / v, max_relative = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn rejects_volume_below_co_volume() {
        for config in configs(250.0, 10.0) {
            let b = config.co_volume();
            for v in [b, 0.5 * b, -1.0] {
                assert!(matches!(
                    config.pressure(v),
                    Err(EosError::Validation(ValidationError::Volume(_, _)))
                ));
            }
        }
    }

    #[test]
    fn pressure_is_not_validated() -> EosResult<()> {
        let config = EosConfig::van_der_waals(250.0, -1.0, 305.3, 48.72, RGAS_BAR_CM3);
        assert!(config.pressure(1000.0)?.pressure > 0.0);
        let config = config.with_temperature(0.0);
        assert!(matches!(
            config.pressure(1000.0),
            Err(EosError::Validation(ValidationError::Temperature(_)))
        ));
        Ok(())
    }

    #[test]
    fn derivatives_match_finite_differences() -> EosResult<()> {
        for config in configs(250.0, 10.0) {
            for v in [80.0, 500.0, 2000.0] {
                let h = v * 1e-6;
                let fd = (config.pressure(v + h)?.pressure - config.pressure(v - h)?.pressure)
                    / (2.0 * h);
                assert_relative_eq!(config.dp_dv(v)?, fd, max_relative = 1e-5);

                let dt = 1e-4;
                let fd = (config.with_temperature(250.0 + dt).pressure(v)?.pressure
                    - config.with_temperature(250.0 - dt).pressure(v)?.pressure)
                    / (2.0 * dt);
                assert_relative_eq!(config.dp_dt(v)?, fd, max_relative = 1e-5);
            }
        }
        Ok(())
    }
}
