use crate::StateVector;

/// The right-hand side `f(y, p)` of an ODE `dy/dt = f(y, p)`.
///
/// Implementations must be pure: the derivative depends only on the state and
/// the parameters, so evaluation is deterministic and safe to call from
/// several threads at once. Physical constraints (a positive inductance, for
/// instance) are the caller's to enforce before building the parameters.
///
/// Closures with the signature `Fn(&StateVector<N>, &P) -> StateVector<N>`
/// implement `Rhs` automatically.
///
/// # Example
///
/// ```
/// use cauchy_core::{Rhs, StateVector};
///
/// // Exponential decay: dy/dt = -k y.
/// let decay = |y: &StateVector<1>, k: &f64| -*k * *y;
///
/// let dy = decay.derivative(&StateVector::new([2.0]), &0.5);
/// assert_eq!(dy, StateVector::new([-1.0]));
/// ```
pub trait Rhs<const N: usize, P> {
    /// Evaluates the derivative of `state` under `params`.
    fn derivative(&self, state: &StateVector<N>, params: &P) -> StateVector<N>;
}

impl<const N: usize, P, F> Rhs<N, P> for F
where
    F: Fn(&StateVector<N>, &P) -> StateVector<N>,
{
    fn derivative(&self, state: &StateVector<N>, params: &P) -> StateVector<N> {
        self(state, params)
    }
}
