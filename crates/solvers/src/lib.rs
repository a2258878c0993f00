//! Fixed-step integration schemes and the time-stepping driver.
//!
//! - [`runge_kutta`] — explicit [`Rk2`](runge_kutta::Rk2) and
//!   [`Rk4`](runge_kutta::Rk4) local solvers
//! - [`driver`] — the [`Solver`](driver::Solver) that owns a problem and its
//!   trajectory and runs the stepping loop
//!
//! # Example
//!
//! ```
//! use cauchy_core::{StateVector, UniformGrid};
//! use cauchy_solvers::{driver::Solver, runge_kutta::Rk4};
//!
//! // Exponential decay: dy/dt = -k y.
//! let rhs = |y: &StateVector<1>, k: &f64| -*k * *y;
//! let grid = UniformGrid::new(0.0, 1.0, 11)?;
//!
//! let mut solver = Solver::new(1.0, grid, StateVector::new([1.0]), rhs);
//! solver.solve(&Rk4::new(1.0));
//!
//! let last = solver.result()?.last().copied().unwrap_or_default();
//! assert!((last[0] - (-1.0f64).exp()).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod driver;
pub mod runge_kutta;
