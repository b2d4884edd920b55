//! Substance parameters used to build equation of state configurations.
//!
//! Records are deserialized from json strings, e.g.
//!
//! ```json
//! [
//!     {
//!         "identifier": {"cas": "74-84-0", "name": "ethane"},
//!         "molarweight": 30.07,
//!         "model_record": {"tc": 305.3, "pc": 48.72, "acentric_factor": 0.099}
//!     }
//! ]
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod identifier;
mod model_record;

pub use identifier::{Identifier, IdentifierOption};
pub use model_record::PureRecord;

/// Critical data and acentric factor of a pure substance.
///
/// The units of `tc`, `pc` and `vc` have to be consistent with the
/// gas constant used in calculations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct CriticalRecord {
    /// critical temperature
    pub tc: f64,
    /// critical pressure
    pub pc: f64,
    /// acentric factor
    #[serde(default)]
    pub acentric_factor: f64,
    /// critical molar volume
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vc: Option<f64>,
    /// critical compressibility factor
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zc: Option<f64>,
}

impl CriticalRecord {
    /// Create a new record from critical temperature, critical pressure and acentric factor.
    pub fn new(tc: f64, pc: f64, acentric_factor: f64) -> Self {
        Self {
            tc,
            pc,
            acentric_factor,
            vc: None,
            zc: None,
        }
    }
}

impl std::fmt::Display for CriticalRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CriticalRecord(tc={}", self.tc)?;
        write!(f, ", pc={}", self.pc)?;
        write!(f, ", acentric factor={}", self.acentric_factor)?;
        if let Some(vc) = self.vc {
            write!(f, ", vc={vc}")?;
        }
        if let Some(zc) = self.zc {
            write!(f, ", zc={zc}")?;
        }
        write!(f, ")")
    }
}

/// Error type for incomplete parameter information and IO problems.
#[derive(Error, Debug)]
pub enum ParameterError {
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("The following component(s) were not found: {0}")]
    ComponentsNotFound(String),
    #[error("Incompatible parameters: {0}")]
    IncompatibleParameters(String),
}
