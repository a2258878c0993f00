//! Explicit Runge–Kutta local solvers.
//!
//! Both schemes hold a copy of the problem parameters, keep no state between
//! calls, and implement [`LocalSolver`](cauchy_core::LocalSolver) for any
//! right-hand side over those parameters. They can be shared across threads
//! whenever the parameters can.

mod rk2;
mod rk4;

pub use rk2::Rk2;
pub use rk4::Rk4;
