use cauchy_core::{LocalSolver, Rhs, StateVector};

/// Classical explicit fourth-order Runge–Kutta.
///
/// ```text
/// k1 = f(y)
/// k2 = f(y + (h/2)·k1)
/// k3 = f(y + (h/2)·k2)
/// k4 = f(y + h·k3)
/// y' = y + (h/6)·(k1 + 2·k2 + 2·k3 + k4)
/// ```
///
/// Local truncation error is `O(h⁵)`, global error `O(h⁴)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rk4<P> {
    params: P,
}

impl<P> Rk4<P> {
    /// Creates the scheme with the parameters passed to the right-hand side.
    pub fn new(params: P) -> Self {
        Self { params }
    }

    /// Returns the parameters passed to the right-hand side.
    pub fn params(&self) -> &P {
        &self.params
    }
}

impl<const N: usize, P, R> LocalSolver<N, R> for Rk4<P>
where
    R: Rhs<N, P>,
{
    fn step(&self, state: &StateVector<N>, rhs: &R, h: f64) -> StateVector<N> {
        let f = |y: &StateVector<N>| rhs.derivative(y, &self.params);
        let half = 0.5 * h;

        let k1 = f(state);
        let k2 = f(&state.step(k1, half));
        let k3 = f(&state.step(k2, half));
        let k4 = f(&state.step(k3, h));

        state.step(k1 + 2.0 * k2 + 2.0 * k3 + k4, h / 6.0)
    }

    fn order(&self) -> u32 {
        4
    }

    fn name(&self) -> &'static str {
        "RK4"
    }
}
