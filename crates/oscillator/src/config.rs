use cauchy_core::{GridError, UniformGrid};
use thiserror::Error;

use crate::Circuit;

/// How the time grid of a run is specified.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum GridSpec {
    /// An exact number of nodes.
    Nodes(usize),

    /// A target step; the realized step may be slightly smaller.
    Step(f64),
}

/// Configuration of one oscillator run.
///
/// `Default` reproduces the reference setup: a unit LC circuit charged to
/// 1 V with no initial current, integrated over `[0, 100]` with a target
/// step of `0.1`.
///
/// With the `serde-derive` feature the configuration can be read from TOML:
///
/// ```toml
/// capacitance = 1.0
/// inductance = 1.0
/// initial_voltage = 1.0
/// initial_current = 0.0
/// t_start = 0.0
/// t_end = 100.0
/// grid = { step = 0.1 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Config {
    pub capacitance: f64,
    pub inductance: f64,
    pub initial_voltage: f64,
    pub initial_current: f64,
    pub t_start: f64,
    pub t_end: f64,
    pub grid: GridSpec,
}

/// Errors reported by [`Config::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("invalid grid")]
    Grid(#[from] GridError),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacitance: 1.0,
            inductance: 1.0,
            initial_voltage: 1.0,
            initial_current: 0.0,
            t_start: 0.0,
            t_end: 100.0,
            grid: GridSpec::Step(0.1),
        }
    }
}

impl Config {
    /// Validates the circuit constants, initial conditions and grid.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a value is not finite, if the capacitance
    /// or inductance is not positive, or if the grid cannot be built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("capacitance", self.capacitance)?;
        positive("inductance", self.inductance)?;
        finite("initial_voltage", self.initial_voltage)?;
        finite("initial_current", self.initial_current)?;
        self.grid()?;
        Ok(())
    }

    /// Returns the validated circuit.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn circuit(&self) -> Result<Circuit, ConfigError> {
        self.validate()?;
        Ok(Circuit::from_voltage(
            self.capacitance,
            self.inductance,
            self.initial_voltage,
            self.initial_current,
        ))
    }

    /// Builds the time grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Grid`] if the bounds or the grid specification
    /// are degenerate.
    pub fn grid(&self) -> Result<UniformGrid, ConfigError> {
        let grid = match self.grid {
            GridSpec::Nodes(count) => UniformGrid::new(self.t_start, self.t_end, count)?,
            GridSpec::Step(step) => UniformGrid::with_step(self.t_start, self.t_end, step)?,
        };
        Ok(grid)
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
