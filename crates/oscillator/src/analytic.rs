//! Closed-form solution of the oscillator.
//!
//! With `ω = √ω²` and initial state `(q0, I0)` at `t = 0`:
//!
//! ```text
//! q(t) =  q0 cos ωt + (I0 / ω) sin ωt
//! I(t) = -ω q0 sin ωt + I0 cos ωt
//! ```
//!
//! For `ω² = 0` the current is constant and the charge grows linearly.

use cauchy_core::StateVector;

use crate::Params;

/// Returns the exact state at time `t` after `initial`.
#[must_use]
pub fn state_at(params: &Params, initial: &StateVector<2>, t: f64) -> StateVector<2> {
    let (q0, i0) = (initial[0], initial[1]);

    if params.omega2 == 0.0 {
        return StateVector::new([q0 + i0 * t, i0]);
    }

    let omega = params.omega();
    let (sin, cos) = (omega * t).sin_cos();

    StateVector::new([q0 * cos + i0 / omega * sin, -omega * q0 * sin + i0 * cos])
}
