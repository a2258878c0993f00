use cauchy_core::{Grid, Rhs, StateVector};
use cauchy_solvers::driver::Solver;

/// Parameters of the oscillator ODE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// The squared angular frequency ω².
    pub omega2: f64,
}

impl Params {
    /// Returns the angular frequency ω.
    #[must_use]
    pub fn omega(&self) -> f64 {
        self.omega2.sqrt()
    }
}

/// Right-hand side of the oscillator: `(q, I) ↦ (I, -ω² q)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LcRhs;

impl Rhs<2, Params> for LcRhs {
    fn derivative(&self, state: &StateVector<2>, params: &Params) -> StateVector<2> {
        StateVector::new([state[1], -params.omega2 * state[0]])
    }
}

/// The driver specialized to the oscillator.
pub type LcSolver<G> = Solver<2, Params, G, LcRhs>;

/// Physical setup of an LC circuit and its initial conditions.
///
/// The frequency and the conserved energy are defined together so the pair
/// is consistent: with `ω² = C / L`, the quantity `(C q² + L I²) / 2` has a
/// zero time derivative along every exact trajectory.
///
/// Positivity of `capacitance` and `inductance` is not checked here; build a
/// `Circuit` through [`Config::circuit`](crate::Config::circuit) to get it
/// validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circuit {
    pub capacitance: f64,
    pub inductance: f64,
    pub initial_charge: f64,
    pub initial_current: f64,
}

impl Circuit {
    /// Creates a circuit whose capacitor starts at `initial_voltage`.
    ///
    /// The initial charge is `initial_voltage / capacitance`.
    #[must_use]
    pub fn from_voltage(
        capacitance: f64,
        inductance: f64,
        initial_voltage: f64,
        initial_current: f64,
    ) -> Self {
        Self {
            capacitance,
            inductance,
            initial_charge: initial_voltage / capacitance,
            initial_current,
        }
    }

    /// Returns the ODE parameters for this circuit.
    #[must_use]
    pub fn params(&self) -> Params {
        Params {
            omega2: self.capacitance / self.inductance,
        }
    }

    /// Returns the initial state `(q0, I0)`.
    #[must_use]
    pub fn initial_state(&self) -> StateVector<2> {
        StateVector::new([self.initial_charge, self.initial_current])
    }

    /// Returns the energy `(C q² + L I²) / 2` of a state.
    #[must_use]
    pub fn energy(&self, state: &StateVector<2>) -> f64 {
        let (q, i) = (state[0], state[1]);
        0.5 * (self.capacitance * q * q + self.inductance * i * i)
    }

    /// Returns the energy of the initial state, conserved by the exact flow.
    #[must_use]
    pub fn total_energy(&self) -> f64 {
        self.energy(&self.initial_state())
    }

    /// Builds a driver for this circuit on `grid`.
    #[must_use]
    pub fn solver<G: Grid>(&self, grid: G) -> LcSolver<G> {
        Solver::new(self.params(), grid, self.initial_state(), LcRhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rhs_at_rest_and_displaced() {
        let params = Params { omega2: 1.0 };

        let at_rest = LcRhs.derivative(&StateVector::new([0.0, 0.0]), &params);
        assert_eq!(at_rest, StateVector::new([0.0, 0.0]));

        let displaced = LcRhs.derivative(&StateVector::new([2.0, 1.0]), &params);
        assert_eq!(displaced, StateVector::new([1.0, -2.0]));

        let stiff = LcRhs.derivative(&StateVector::new([2.0, 1.0]), &Params { omega2: 0.25 });
        assert_eq!(stiff, StateVector::new([1.0, -0.5]));
    }

    #[test]
    fn from_voltage_divides_by_capacitance() {
        let circuit = Circuit::from_voltage(2.0, 0.5, 3.0, -1.0);

        assert_relative_eq!(circuit.initial_charge, 1.5);
        assert_eq!(circuit.initial_state(), StateVector::new([1.5, -1.0]));
        assert_relative_eq!(circuit.params().omega2, 4.0);
        assert_relative_eq!(circuit.params().omega(), 2.0);
    }

    #[test]
    fn energy_of_initial_state() {
        let circuit = Circuit::from_voltage(1.0, 1.0, 1.0, 0.0);
        assert_relative_eq!(circuit.total_energy(), 0.5);

        let circuit = Circuit {
            capacitance: 2.0,
            inductance: 3.0,
            initial_charge: 1.0,
            initial_current: 2.0,
        };
        assert_relative_eq!(circuit.total_energy(), 0.5 * (2.0 + 12.0));
    }

    #[test]
    fn energy_rate_vanishes_along_the_flow() {
        let circuit = Circuit {
            capacitance: 2.0,
            inductance: 0.5,
            initial_charge: 0.3,
            initial_current: -0.7,
        };
        let y = circuit.initial_state();
        let dy = LcRhs.derivative(&y, &circuit.params());

        // dE/dt = C q q' + L I I'
        let rate = circuit.capacitance * y[0] * dy[0] + circuit.inductance * y[1] * dy[1];
        assert_relative_eq!(rate, 0.0, epsilon = 1e-15);
    }
}
