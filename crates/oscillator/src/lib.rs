//! The LC oscillator as a consumer of the Cauchy integration framework.
//!
//! The state is `(q, I)`, charge and current, evolving as
//!
//! ```text
//! dq/dt = I
//! dI/dt = -ω² q
//! ```
//!
//! This crate supplies everything problem-specific around the generic driver:
//!
//! - [`Circuit`], [`Params`] and [`LcRhs`] — the physical setup and its ODE
//! - [`analytic`] — the closed-form reference solution
//! - [`Verifier`] — per-node energy and state comparison against the reference
//! - [`Config`] — a validated run configuration, deserializable with the
//!   `serde-derive` feature
//! - [`table`] — tabular text export of a [`Verification`]
//!
//! # Example
//!
//! ```
//! use cauchy_oscillator::{Config, Verifier};
//! use cauchy_solvers::runge_kutta::Rk4;
//!
//! let config = Config::default();
//! let circuit = config.circuit()?;
//! let mut solver = circuit.solver(config.grid()?);
//!
//! solver.solve(&Rk4::new(circuit.params()));
//!
//! let verification = Verifier::new(circuit).verify(&solver)?;
//! assert!(verification.max_rel_deviation() < 1e-5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analytic;
mod circuit;
mod config;
pub mod table;
mod verifier;

pub use circuit::{Circuit, LcRhs, LcSolver, Params};
pub use config::{Config, ConfigError, GridSpec};
pub use verifier::{Row, Verification, Verifier};
