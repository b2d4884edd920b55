use super::SaturationPoint;
use crate::errors::{EosResult, ValidationError};
use crate::state::EosConfig;
use crate::SolverOptions;
use ndarray::Array1;
#[cfg(feature = "rayon")]
use ndarray::{ArrayView1, Axis};
#[cfg(feature = "rayon")]
use rayon::{prelude::*, ThreadPool};

/// Pure component phase diagram.
#[derive(Debug, Clone)]
pub struct PhaseDiagram {
    pub states: Vec<SaturationPoint>,
}

impl PhaseDiagram {
    /// Create a phase diagram from a list of saturation points.
    pub fn new(states: Vec<SaturationPoint>) -> Self {
        Self { states }
    }

    /// Calculate a phase diagram for a pure component.
    ///
    /// Temperatures at which the saturation pressure cannot be determined
    /// are omitted from the diagram.
    pub fn pure(
        config: &EosConfig,
        min_temperature: f64,
        max_temperature: f64,
        npoints: usize,
        options: SolverOptions,
    ) -> EosResult<Self> {
        let temperatures = temperature_grid(config, min_temperature, max_temperature, npoints)?;
        let states = temperatures
            .iter()
            .filter_map(|&t| SaturationPoint::pure_t(config, t, options).ok())
            .collect();
        Ok(Self::new(states))
    }

    /// Temperature range of the default phase diagram, $0.6T_c$ to $0.99T_c$.
    pub fn default_range(config: &EosConfig) -> (f64, f64) {
        (
            0.6 * config.critical_temperature,
            0.99 * config.critical_temperature,
        )
    }

    pub fn temperature(&self) -> Array1<f64> {
        self.states.iter().map(|s| s.temperature).collect()
    }

    pub fn pressure(&self) -> Array1<f64> {
        self.states.iter().map(|s| s.pressure).collect()
    }

    pub fn liquid_volume(&self) -> Array1<f64> {
        self.states.iter().map(|s| s.liquid_volume).collect()
    }

    pub fn vapor_volume(&self) -> Array1<f64> {
        self.states.iter().map(|s| s.vapor_volume).collect()
    }
}

fn temperature_grid(
    config: &EosConfig,
    min_temperature: f64,
    max_temperature: f64,
    npoints: usize,
) -> EosResult<Array1<f64>> {
    config.validate_without_pressure()?;
    if min_temperature <= 0.0 {
        return Err(ValidationError::Temperature(min_temperature).into());
    }
    if max_temperature < min_temperature {
        return Err(
            ValidationError::Input("maximum temperature below minimum temperature").into(),
        );
    }
    Ok(Array1::linspace(min_temperature, max_temperature, npoints))
}

#[cfg(feature = "rayon")]
impl PhaseDiagram {
    fn solve_temperatures(
        config: &EosConfig,
        temperatures: ArrayView1<f64>,
        options: SolverOptions,
    ) -> Vec<SaturationPoint> {
        temperatures
            .iter()
            .filter_map(|&t| SaturationPoint::pure_t(config, t, options).ok())
            .collect()
    }

    /// Calculate a phase diagram for a pure component, solving chunks
    /// of the temperature grid in parallel on the given thread pool.
    pub fn par_pure(
        config: &EosConfig,
        min_temperature: f64,
        max_temperature: f64,
        npoints: usize,
        chunksize: usize,
        thread_pool: ThreadPool,
        options: SolverOptions,
    ) -> EosResult<Self> {
        let temperatures = temperature_grid(config, min_temperature, max_temperature, npoints)?;
        let chunksize = chunksize.max(1);
        let states: Vec<SaturationPoint> = thread_pool.install(|| {
            temperatures
                .axis_chunks_iter(Axis(0), chunksize)
                .into_par_iter()
                .map(|t| Self::solve_temperatures(config, t, options))
                .flatten()
                .collect()
        });
        Ok(Self::new(states))
    }
}

/// Pressure as a function of the molar volume at constant temperature.
#[derive(Debug, Clone)]
pub struct Isotherm {
    pub temperature: f64,
    pub volume: Array1<f64>,
    pub pressure: Array1<f64>,
}

impl Isotherm {
    /// Sample the isotherm on the geometric grid $v_{i+1}=fv_i$
    /// between `min_volume` and `max_volume`.
    ///
    /// Only finite and positive pressures are kept.
    pub fn new(
        config: &EosConfig,
        min_volume: f64,
        max_volume: f64,
        factor: f64,
    ) -> EosResult<Self> {
        config.validate_without_pressure()?;
        if factor <= 1.0 {
            return Err(ValidationError::Input("volume factor has to exceed 1").into());
        }
        let b = config.co_volume();
        if min_volume <= b {
            return Err(ValidationError::Volume(min_volume, b).into());
        }
        if !max_volume.is_finite() || max_volume < min_volume {
            return Err(ValidationError::Input(
                "maximum volume has to be finite and not below the minimum volume",
            )
            .into());
        }

        let mut volume = Vec::new();
        let mut pressure = Vec::new();
        let mut v = min_volume;
        while v <= max_volume {
            let p = config.pressure(v)?.pressure;
            if p.is_finite() && p > 0.0 {
                volume.push(v);
                pressure.push(p);
            }
            v *= factor;
        }
        Ok(Self {
            temperature: config.temperature,
            volume: Array1::from_vec(volume),
            pressure: Array1::from_vec(pressure),
        })
    }
}
