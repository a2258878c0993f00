use cauchy_core::{LocalSolver, Rhs, StateVector};

/// Explicit second-order Runge–Kutta (Heun's method).
///
/// ```text
/// k1 = f(y)
/// k2 = f(y + h·k1)
/// y' = y + (h/2)·(k1 + k2)
/// ```
///
/// Local truncation error is `O(h³)`, global error `O(h²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rk2<P> {
    params: P,
}

impl<P> Rk2<P> {
    /// Creates the scheme with the parameters passed to the right-hand side.
    pub fn new(params: P) -> Self {
        Self { params }
    }

    /// Returns the parameters passed to the right-hand side.
    pub fn params(&self) -> &P {
        &self.params
    }
}

impl<const N: usize, P, R> LocalSolver<N, R> for Rk2<P>
where
    R: Rhs<N, P>,
{
    fn step(&self, state: &StateVector<N>, rhs: &R, h: f64) -> StateVector<N> {
        let f = |y: &StateVector<N>| rhs.derivative(y, &self.params);

        let k1 = f(state);
        let k2 = f(&state.step(k1, h));

        state.step(k1 + k2, 0.5 * h)
    }

    fn order(&self) -> u32 {
        2
    }

    fn name(&self) -> &'static str {
        "RK2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn decay(y: &StateVector<1>, k: &f64) -> StateVector<1> {
        -*k * *y
    }

    #[test]
    fn single_step_matches_second_order_taylor() {
        let rk2 = Rk2::new(1.0);
        let h = 0.1;

        let next = rk2.step(&StateVector::new([1.0]), &decay, h);

        // For dy/dt = -y, Heun's method gives exactly 1 - h + h²/2.
        assert_relative_eq!(next[0], 1.0 - h + h * h / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn linear_growth_is_exact() {
        let rk2 = Rk2::new(());
        let constant = |_: &StateVector<2>, (): &()| StateVector::new([1.0, -2.0]);

        let next = rk2.step(&StateVector::new([0.0, 0.0]), &constant, 0.5);

        assert_relative_eq!(next[0], 0.5);
        assert_relative_eq!(next[1], -1.0);
    }

    #[test]
    fn uses_its_own_parameters() {
        let fast = Rk2::new(10.0);
        let slow = Rk2::new(0.1);
        let y = StateVector::new([1.0]);

        assert!(fast.step(&y, &decay, 0.01)[0] < slow.step(&y, &decay, 0.01)[0]);
        assert_relative_eq!(*fast.params(), 10.0);
    }
}
