//! Description of a thermodynamic state.
//!
//! A state of a pure substance is defined by
//! * a temperature and a pressure
//! * the critical temperature, critical pressure and acentric factor of the substance
//! * the gas constant, which fixes the system of units
//! * a cubic equation of state.
//!
//! Configurations are plain values. Solvers that vary temperature or
//! pressure create new configurations with [EosConfig::with_temperature]
//! and [EosConfig::with_pressure].
use crate::cubic::{
    CubicModel, Model, PengRobinson, RedlichKwong, ShapeParameters, SoaveRedlichKwong,
    VanDerWaals,
};
use crate::errors::{EosError, EosResult, ValidationError};
use crate::parameter::{CriticalRecord, PureRecord};
use crate::SolverOptions;
use num_dual::DualNum;
use std::fmt;

mod pressure;
mod volume;
pub use pressure::PressureResult;
pub use volume::VolumeResult;

/// Relative distance to the saturation pressure below which a state is saturated.
const SATURATION_REL_TOLERANCE: f64 = 1e-6;

/// Phase of a state relative to the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Compressed liquid, pressure above the saturation pressure.
    Liquid,
    /// Superheated vapor, pressure below the saturation pressure.
    Vapor,
    /// On the saturation curve.
    Saturated,
    /// Temperature at or above the critical temperature.
    Supercritical,
}

/// Input of all equation of state calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EosConfig {
    /// cubic equation of state
    pub model: Model,
    /// temperature
    pub temperature: f64,
    /// pressure
    pub pressure: f64,
    /// critical temperature
    pub critical_temperature: f64,
    /// critical pressure
    pub critical_pressure: f64,
    /// acentric factor
    pub acentric_factor: f64,
    /// universal gas constant in units consistent with all other inputs
    pub gas_constant: f64,
}

impl EosConfig {
    pub fn new(
        model: Model,
        temperature: f64,
        pressure: f64,
        critical_temperature: f64,
        critical_pressure: f64,
        acentric_factor: f64,
        gas_constant: f64,
    ) -> Self {
        Self {
            model,
            temperature,
            pressure,
            critical_temperature,
            critical_pressure,
            acentric_factor,
            gas_constant,
        }
    }

    /// van der Waals equation of state.
    pub fn van_der_waals(
        temperature: f64,
        pressure: f64,
        critical_temperature: f64,
        critical_pressure: f64,
        gas_constant: f64,
    ) -> Self {
        Self::new(
            VanDerWaals.into(),
            temperature,
            pressure,
            critical_temperature,
            critical_pressure,
            0.0,
            gas_constant,
        )
    }

    /// Redlich-Kwong equation of state.
    pub fn redlich_kwong(
        temperature: f64,
        pressure: f64,
        critical_temperature: f64,
        critical_pressure: f64,
        gas_constant: f64,
    ) -> Self {
        Self::new(
            RedlichKwong.into(),
            temperature,
            pressure,
            critical_temperature,
            critical_pressure,
            0.0,
            gas_constant,
        )
    }

    /// Soave-Redlich-Kwong equation of state.
    pub fn soave_redlich_kwong(
        temperature: f64,
        pressure: f64,
        critical_temperature: f64,
        critical_pressure: f64,
        acentric_factor: f64,
        gas_constant: f64,
    ) -> Self {
        Self::new(
            SoaveRedlichKwong.into(),
            temperature,
            pressure,
            critical_temperature,
            critical_pressure,
            acentric_factor,
            gas_constant,
        )
    }

    /// Peng-Robinson equation of state.
    pub fn peng_robinson(
        temperature: f64,
        pressure: f64,
        critical_temperature: f64,
        critical_pressure: f64,
        acentric_factor: f64,
        gas_constant: f64,
    ) -> Self {
        Self::new(
            PengRobinson.into(),
            temperature,
            pressure,
            critical_temperature,
            critical_pressure,
            acentric_factor,
            gas_constant,
        )
    }

    /// Build a configuration from a pure substance record.
    ///
    /// The acentric factor is only passed on to models that use it.
    pub fn from_record(
        model: Model,
        record: &PureRecord<CriticalRecord>,
        temperature: f64,
        pressure: f64,
        gas_constant: f64,
    ) -> Self {
        let r = &record.model_record;
        let acentric_factor = if model.uses_acentric_factor() {
            r.acentric_factor
        } else {
            0.0
        };
        Self::new(
            model,
            temperature,
            pressure,
            r.tc,
            r.pc,
            acentric_factor,
            gas_constant,
        )
    }

    /// Copy of the configuration at a different temperature.
    pub fn with_temperature(&self, temperature: f64) -> Self {
        Self {
            temperature,
            ..*self
        }
    }

    /// Copy of the configuration at a different pressure.
    pub fn with_pressure(&self, pressure: f64) -> Self {
        Self { pressure, ..*self }
    }

    /// Copy of the configuration at a different temperature and pressure.
    pub fn with_state(&self, temperature: f64, pressure: f64) -> Self {
        Self {
            temperature,
            pressure,
            ..*self
        }
    }

    /// Check all inputs in the order T, P, Tc, Pc, R.
    pub fn validate(&self) -> Result<(), ValidationError> {
        positive(self.temperature, ValidationError::Temperature)?;
        positive(self.pressure, ValidationError::Pressure)?;
        self.validate_substance()
    }

    /// Check all inputs except for the pressure.
    pub(crate) fn validate_without_pressure(&self) -> Result<(), ValidationError> {
        positive(self.temperature, ValidationError::Temperature)?;
        self.validate_substance()
    }

    fn validate_substance(&self) -> Result<(), ValidationError> {
        positive(
            self.critical_temperature,
            ValidationError::CriticalTemperature,
        )?;
        positive(self.critical_pressure, ValidationError::CriticalPressure)?;
        positive(self.gas_constant, ValidationError::GasConstant)
    }

    pub fn shape_parameters(&self) -> ShapeParameters {
        self.model.shape_parameters()
    }

    pub fn reduced_temperature(&self) -> f64 {
        self.temperature / self.critical_temperature
    }

    pub fn reduced_pressure(&self) -> f64 {
        self.pressure / self.critical_pressure
    }

    /// Co-volume $b=\Omega RT_c/p_c$.
    pub fn co_volume(&self) -> f64 {
        self.shape_parameters().omega * self.gas_constant * self.critical_temperature
            / self.critical_pressure
    }

    /// Attraction parameter $a(T)=\Psi\alpha R^2T_c^2/p_c$ at the temperature of the configuration.
    pub fn attraction_parameter(&self) -> f64 {
        self.attraction(self.temperature)
    }

    pub(crate) fn attraction<D: DualNum<f64> + Copy>(&self, temperature: D) -> D {
        let tc = self.critical_temperature;
        let alpha = self.model.alpha(temperature / tc, self.acentric_factor);
        alpha * (self.shape_parameters().psi * (self.gas_constant * tc).powi(2)
            / self.critical_pressure)
    }

    /// Molar volume of the ideal gas $RT/p$.
    pub fn ideal_gas_volume(&self) -> f64 {
        self.gas_constant * self.temperature / self.pressure
    }

    /// Compressibility factor $Z=pv/(RT)$ of a molar volume.
    pub fn compressibility_factor(&self, volume: f64) -> f64 {
        volume / self.ideal_gas_volume()
    }

    /// Phase of the state.
    ///
    /// Subcritical states are classified by comparing the pressure with the
    /// saturation pressure at the temperature of the configuration.
    pub fn phase(&self, options: SolverOptions) -> EosResult<Phase> {
        self.validate()?;
        if self.temperature >= self.critical_temperature {
            return Ok(Phase::Supercritical);
        }
        let p_sat = self.saturation_pressure(self.temperature, options)?;
        Ok(if (self.pressure / p_sat - 1.0).abs() < SATURATION_REL_TOLERANCE {
            Phase::Saturated
        } else if self.pressure > p_sat {
            Phase::Liquid
        } else {
            Phase::Vapor
        })
    }

    /// Molar volume of the state.
    ///
    /// The smallest real root is used for liquid states, the largest for
    /// all others.
    pub fn molar_volume(&self, options: SolverOptions) -> EosResult<f64> {
        let roots = self.solve_for_volume()?.clean();
        let volume = match self.phase(options)? {
            Phase::Liquid => roots.first(),
            Phase::Vapor | Phase::Saturated | Phase::Supercritical => roots.last(),
        };
        volume
            .copied()
            .ok_or_else(|| EosError::NoRealRoot("molar_volume".to_owned()))
    }
}

fn positive(value: f64, error: fn(f64) -> ValidationError) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(error(value))
    }
}

impl fmt::Display for EosConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EosConfig({}", self.model)?;
        write!(f, ", T={}, p={}", self.temperature, self.pressure)?;
        write!(
            f,
            ", Tc={}, pc={}",
            self.critical_temperature, self.critical_pressure
        )?;
        write!(f, ", acentric factor={}", self.acentric_factor)?;
        write!(f, ", R={})", self.gas_constant)
    }
}
