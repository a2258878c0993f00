use cauchy_core::{Grid, Rhs, StateVector};
use cauchy_solvers::driver::{self, Solver};
use log::debug;

use crate::{Circuit, Params, analytic};

/// Compares a computed oscillator trajectory against the exact solution.
///
/// The verifier only reads the solver's public surface (its trajectory, grid,
/// parameters and initial state), so it works with any grid and any
/// right-hand side over [`Params`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verifier {
    circuit: Circuit,
    reference_energy: f64,
}

/// Comparison at a single grid node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub time: f64,
    pub computed: StateVector<2>,
    pub computed_energy: f64,
    pub analytic: StateVector<2>,
    pub analytic_energy: f64,
    /// `|E_computed - E|`, with `E` the energy of the initial state.
    pub abs_deviation: f64,
    /// `|E_computed - E| / |E_computed + E|`.
    pub rel_deviation: f64,
}

impl Row {
    /// Returns the largest componentwise distance to the exact state.
    #[must_use]
    pub fn state_error(&self) -> f64 {
        (self.computed - self.analytic)
            .iter()
            .fold(0.0_f64, |max, x| max.max(x.abs()))
    }
}

/// The per-node comparison of a whole trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    reference_energy: f64,
    rows: Vec<Row>,
}

impl Verifier {
    /// Creates a verifier for `circuit`, whose initial state fixes the
    /// reference energy.
    #[must_use]
    pub fn new(circuit: Circuit) -> Self {
        Self {
            circuit,
            reference_energy: circuit.total_energy(),
        }
    }

    /// Returns the energy every computed state is compared against.
    #[must_use]
    pub fn reference_energy(&self) -> f64 {
        self.reference_energy
    }

    /// Builds the per-node comparison for a solved trajectory.
    ///
    /// The exact solution is evaluated with the solver's parameters and
    /// initial state, at times measured from the first grid node.
    ///
    /// # Errors
    ///
    /// Returns [`driver::Error::NotSolved`] if the solver has not run, or
    /// [`driver::Error::Incomplete`] if its last solve stopped early.
    pub fn verify<G, R>(
        &self,
        solver: &Solver<2, Params, G, R>,
    ) -> Result<Verification, driver::Error>
    where
        G: Grid,
        R: Rhs<2, Params>,
    {
        let trajectory = solver.result()?;
        let grid = solver.grid();
        let params = solver.params();
        let initial = solver.initial_state();
        let t0 = grid.start();

        let rows: Vec<Row> = trajectory
            .iter()
            .zip(grid.times())
            .map(|(computed, time)| {
                let analytic = analytic::state_at(params, initial, time - t0);
                self.row(time, *computed, analytic)
            })
            .collect();

        let verification = Verification {
            reference_energy: self.reference_energy,
            rows,
        };

        debug!(
            "verified {} nodes: max energy deviation {:e} (relative {:e}), max state error {:e}",
            verification.rows.len(),
            verification.max_abs_deviation(),
            verification.max_rel_deviation(),
            verification.max_state_error(),
        );

        Ok(verification)
    }

    fn row(&self, time: f64, computed: StateVector<2>, analytic: StateVector<2>) -> Row {
        let computed_energy = self.circuit.energy(&computed);
        let abs_deviation = (computed_energy - self.reference_energy).abs();

        Row {
            time,
            computed,
            computed_energy,
            analytic,
            analytic_energy: self.circuit.energy(&analytic),
            abs_deviation,
            rel_deviation: abs_deviation / (computed_energy + self.reference_energy).abs(),
        }
    }
}

impl Verification {
    /// Returns the energy of the initial state.
    #[must_use]
    pub fn reference_energy(&self) -> f64 {
        self.reference_energy
    }

    /// Returns one row per grid node.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the largest absolute energy deviation.
    #[must_use]
    pub fn max_abs_deviation(&self) -> f64 {
        self.max_of(|row| row.abs_deviation)
    }

    /// Returns the largest relative energy deviation.
    #[must_use]
    pub fn max_rel_deviation(&self) -> f64 {
        self.max_of(|row| row.rel_deviation)
    }

    /// Returns the largest componentwise distance to the exact solution.
    #[must_use]
    pub fn max_state_error(&self) -> f64 {
        self.max_of(Row::state_error)
    }

    fn max_of(&self, f: impl Fn(&Row) -> f64) -> f64 {
        self.rows.iter().map(f).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;
    use cauchy_core::UniformGrid;
    use cauchy_solvers::{
        driver::{Action, Event},
        runge_kutta::Rk4,
    };

    use crate::LcRhs;

    fn unit_circuit() -> Circuit {
        Circuit::from_voltage(1.0, 1.0, 1.0, 0.0)
    }

    #[test]
    fn unsolved_trajectory_is_an_error() {
        let circuit = unit_circuit();
        let solver = circuit.solver(UniformGrid::new(0.0, 1.0, 11).unwrap());

        assert_eq!(
            Verifier::new(circuit).verify(&solver),
            Err(driver::Error::NotSolved)
        );
    }

    #[test]
    fn stopped_trajectory_is_an_error() {
        let circuit = unit_circuit();
        let mut solver = circuit.solver(UniformGrid::new(0.0, 1.0, 11).unwrap());
        solver.solve_observed(&Rk4::new(circuit.params()), |event: &Event<2>| {
            (event.step == 3).then_some(Action::StopEarly)
        });

        assert_eq!(
            Verifier::new(circuit).verify(&solver),
            Err(driver::Error::Incomplete {
                computed: 4,
                size: 11
            })
        );
    }

    #[test]
    fn grid_is_walked_once() {
        struct Counting {
            step_calls: Cell<usize>,
        }

        impl Grid for Counting {
            fn size(&self) -> usize {
                501
            }

            fn step(&self, _index: usize) -> f64 {
                self.step_calls.set(self.step_calls.get() + 1);
                0.01
            }

            fn start(&self) -> f64 {
                0.0
            }

            fn end(&self) -> f64 {
                5.0
            }
        }

        let circuit = unit_circuit();
        let grid = Counting {
            step_calls: Cell::new(0),
        };
        let mut solver =
            Solver::new(circuit.params(), grid, circuit.initial_state(), LcRhs);
        solver.solve(&Rk4::new(circuit.params()));
        solver.grid().step_calls.set(0);

        let verification = Verifier::new(circuit).verify(&solver).unwrap();

        assert_eq!(solver.grid().step_calls.get(), 500);
        assert_eq!(verification.rows().len(), 501);
        assert!(verification.max_state_error() < 1e-8);
    }

    #[test]
    fn first_row_is_exact() {
        let circuit = unit_circuit();
        let mut solver = circuit.solver(UniformGrid::new(0.0, 1.0, 11).unwrap());
        solver.solve(&Rk4::new(circuit.params()));

        let verification = Verifier::new(circuit).verify(&solver).unwrap();
        let first = verification.rows()[0];

        assert_eq!(verification.rows().len(), 11);
        assert_relative_eq!(first.time, 0.0);
        assert_eq!(first.computed, first.analytic);
        assert_relative_eq!(first.computed_energy, 0.5);
        assert_relative_eq!(first.abs_deviation, 0.0);
        assert_relative_eq!(first.rel_deviation, 0.0);
    }

    #[test]
    fn analytic_energy_is_conserved() {
        let circuit = Circuit {
            capacitance: 2.0,
            inductance: 0.5,
            initial_charge: 0.4,
            initial_current: 0.1,
        };
        let mut solver = circuit.solver(UniformGrid::new(0.0, 5.0, 51).unwrap());
        solver.solve(&Rk4::new(circuit.params()));

        let verifier = Verifier::new(circuit);
        let verification = verifier.verify(&solver).unwrap();

        for row in verification.rows() {
            assert_relative_eq!(
                row.analytic_energy,
                verifier.reference_energy(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn deviations_from_a_hand_built_row() {
        let verifier = Verifier::new(unit_circuit());

        // Energy (1 + 1) / 2 = 1 against a reference of 0.5.
        let row = verifier.row(
            0.0,
            StateVector::new([1.0, 1.0]),
            StateVector::new([1.0, 0.0]),
        );

        assert_relative_eq!(row.computed_energy, 1.0);
        assert_relative_eq!(row.abs_deviation, 0.5);
        assert_relative_eq!(row.rel_deviation, 0.5 / 1.5);
        assert_relative_eq!(row.state_error(), 1.0);
    }

    #[test]
    fn times_are_measured_from_the_grid_start() {
        let circuit = unit_circuit();
        let mut solver = circuit.solver(UniformGrid::new(10.0, 11.0, 101).unwrap());
        solver.solve(&Rk4::new(circuit.params()));

        let verification = Verifier::new(circuit).verify(&solver).unwrap();
        let last = verification.rows().last().unwrap();

        assert_relative_eq!(last.time, 11.0);
        assert_relative_eq!(last.analytic[0], 1.0f64.cos(), epsilon = 1e-12);
        assert!(verification.max_state_error() < 1e-8);
    }
}
