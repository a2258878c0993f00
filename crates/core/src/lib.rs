//! Core traits and types for integrating Cauchy problems.
//!
//! This crate defines the shared abstractions the time-stepping driver and
//! the problem definitions build on:
//!
//! - [`StateVector`]: a fixed-dimension vector with elementwise arithmetic
//! - [`Grid`] and [`UniformGrid`]: node counts and per-step sizes
//! - [`Rhs`]: the right-hand side `f(y, p)` of an ODE
//! - [`LocalSolver`]: a single-step integration scheme

mod grid;
mod local_solver;
mod rhs;
mod state;

pub use grid::{Grid, GridError, UniformGrid};
pub use local_solver::LocalSolver;
pub use rhs::Rhs;
pub use state::StateVector;
