use crate::errors::{EosError, EosResult};
use crate::state::EosConfig;
use crate::{SolverOptions, Verbosity};
use std::fmt;
use std::time::Instant;

const MAX_ITER_PURE: usize = 100;
const TOL_PURE: f64 = 1e-8;

const WILSON_SLOPE: f64 = 5.373;

// Pressure scaling if the trial pressure leaves the three-root region.
const SCALE_P_LIQUID: f64 = 0.9;
const SCALE_P_VAPOR: f64 = 1.1;
const SCALE_P_DOMAIN: f64 = 0.95;

// Bounds of the multiplicative pressure update.
const MIN_P_STEP: f64 = 0.8;
const MAX_P_STEP: f64 = 1.2;

/// Estimate of the vapor pressure from the Wilson correlation
/// $$p=p_c\exp\left(5.373(1+\omega)\left(1-\frac{T_c}{T}\right)\right)$$
pub fn wilson_pressure(config: &EosConfig, temperature: f64) -> f64 {
    config.critical_pressure
        * (WILSON_SLOPE
            * (1.0 + config.acentric_factor)
            * (1.0 - config.critical_temperature / temperature))
            .exp()
}

/// A point on the saturation curve of a pure substance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    pub temperature: f64,
    pub pressure: f64,
    pub liquid_volume: f64,
    pub vapor_volume: f64,
}

impl fmt::Display for SaturationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SaturationPoint(T={}, p={}, v_liquid={}, v_vapor={})",
            self.temperature, self.pressure, self.liquid_volume, self.vapor_volume
        )
    }
}

/// # Saturation curve
impl SaturationPoint {
    /// Calculate the vapor-liquid equilibrium of a pure substance at
    /// the given temperature.
    ///
    /// Fails with [EosError::SuperCritical] at or above the critical temperature.
    pub fn pure_t(config: &EosConfig, temperature: f64, options: SolverOptions) -> EosResult<Self> {
        let config = config.with_temperature(temperature);
        config.validate_without_pressure()?;
        if temperature >= config.critical_temperature {
            return Err(EosError::SuperCritical);
        }
        Self::iterate_pure_t(&config, options)
    }

    /// Equal fugacity iteration in the pressure.
    ///
    /// The pressure is corrected by $\ln\varphi^L-\ln\varphi^V$ with a step
    /// bounded to 20 %. Trial pressures that do not result in three real
    /// molar volumes are scaled towards the two-phase region.
    fn iterate_pure_t(config: &EosConfig, options: SolverOptions) -> EosResult<Self> {
        let (max_iter, tol, verbosity) = options.unwrap_or(MAX_ITER_PURE, TOL_PURE);
        let start = Instant::now();
        let temperature = config.temperature;
        let rt = config.gas_constant * temperature;
        let mut pressure = wilson_pressure(config, temperature);
        let mut recovering = false;

        log_iter!(
            verbosity,
            " iter |     residual      |     pressure     |    liquid volume     |     vapor volume     "
        );
        log_iter!(verbosity, "{:-<91}", "");
        log_iter!(verbosity, " {:4} |                   | {:14.8e} |", 0, pressure);

        for i in 1..=max_iter {
            if let Some(max_duration) = options.max_duration {
                if start.elapsed() >= max_duration {
                    return Err(EosError::Timeout("pure_t".to_owned()));
                }
            }

            let volumes = config.with_pressure(pressure).solve_for_volume()?;
            let roots = volumes.clean();

            // Outside of the three-root region
            if roots.len() < 3 {
                let v = roots
                    .first()
                    .ok_or_else(|| EosError::IterationFailed("pure_t".to_owned()))?;
                pressure *= if *v < 2.0 * volumes.b {
                    SCALE_P_LIQUID
                } else {
                    SCALE_P_VAPOR
                };
                recovering = true;
                log_iter!(
                    verbosity,
                    " {:4} |  {} real root(s)  | {:14.8e} |",
                    i,
                    roots.len(),
                    pressure
                );
                continue;
            }

            let (v_l, v_v) = (roots[0], roots[roots.len() - 1]);
            let a = volumes.a * pressure / (rt * rt);
            let b = volumes.b * pressure / rt;
            let z_l = pressure * v_l / rt;
            let z_v = pressure * v_v / rt;

            // Logarithm of the fugacity coefficient undefined
            if z_l <= b || z_v <= b {
                pressure *= SCALE_P_DOMAIN;
                recovering = true;
                continue;
            }

            let res = config.log_fugacity(z_l, a, b) - config.log_fugacity(z_v, a, b);

            // Emergency brake for non finite fugacities.
            if !res.is_finite() {
                return Err(EosError::IterationFailed("pure_t".to_owned()));
            }

            log_iter!(
                verbosity,
                " {:4} | {:14.8e} | {:14.8e} | {:12.8e} | {:12.8e}",
                i,
                res,
                pressure,
                v_l,
                v_v
            );
            if res.abs() < tol {
                log_result!(
                    verbosity,
                    "SaturationPoint::pure_t: calculation converged in {} step(s)\n",
                    i
                );
                return Ok(Self {
                    temperature,
                    pressure,
                    liquid_volume: v_l,
                    vapor_volume: v_v,
                });
            }

            pressure *= res.clamp(MIN_P_STEP.ln(), MAX_P_STEP.ln()).exp();
            recovering = false;
        }

        log_result!(
            verbosity,
            "SaturationPoint::pure_t: no convergence in {} step(s)\n",
            max_iter
        );
        if recovering {
            Err(EosError::TwoPhaseRegionNotFound("pure_t".to_owned()))
        } else {
            Err(EosError::NotConverged("pure_t".to_owned()))
        }
    }
}

impl EosConfig {
    /// Saturation pressure at the given temperature.
    ///
    /// At or above the critical temperature the critical pressure is returned.
    pub fn saturation_pressure(&self, temperature: f64, options: SolverOptions) -> EosResult<f64> {
        let config = self.with_temperature(temperature);
        config.validate()?;
        if temperature >= config.critical_temperature {
            return Ok(config.critical_pressure);
        }
        SaturationPoint::iterate_pure_t(&config, options).map(|vle| vle.pressure)
    }
}
