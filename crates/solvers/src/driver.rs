//! Time-stepping driver for Cauchy problems.
//!
//! A [`Solver`] owns everything that defines one problem instance (the
//! parameters, the grid, the initial state and the right-hand side) together
//! with the trajectory buffer. Solving is a strictly sequential fold over the
//! grid:
//!
//! ```text
//! y[0] = initial_state
//! y[i] = local.step(y[i-1], rhs, grid.step(i))    for i in 1..grid.size()
//! ```
//!
//! Each `Solver` owns private copies of its inputs, so independent
//! trajectories (different initial conditions, parameters or schemes) can be
//! solved on separate instances from separate threads without locking.
//!
//! # Example
//!
//! ```
//! use cauchy_core::{StateVector, UniformGrid};
//! use cauchy_solvers::{driver::{Solver, Status}, runge_kutta::Rk2};
//!
//! let rhs = |y: &StateVector<2>, w2: &f64| StateVector::new([y[1], -w2 * y[0]]);
//! let grid = UniformGrid::new(0.0, 1.0, 101)?;
//! let mut solver = Solver::new(1.0, grid, StateVector::new([1.0, 0.0]), rhs);
//!
//! assert_eq!(solver.solve(&Rk2::new(1.0)), Status::Complete);
//! assert_eq!(solver.result()?.len(), 101);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;
mod observer;
mod status;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use observer::{Observer, StopOnNonFinite};
pub use status::Status;

use cauchy_core::{Grid, LocalSolver, Rhs, StateVector};
use log::{debug, trace, warn};

/// Owns a Cauchy problem and the trajectory computed for it.
#[derive(Debug, Clone)]
pub struct Solver<const N: usize, P, G, R> {
    params: P,
    grid: G,
    initial_state: StateVector<N>,
    rhs: R,
    result: Vec<StateVector<N>>,
    status: Option<Status>,
}

impl<const N: usize, P, G, R> Solver<N, P, G, R>
where
    G: Grid,
    R: Rhs<N, P>,
{
    /// Creates a solver for the given problem.
    ///
    /// The trajectory is empty until [`Solver::solve`] runs.
    pub fn new(params: P, grid: G, initial_state: StateVector<N>, rhs: R) -> Self {
        Self {
            params,
            grid,
            initial_state,
            rhs,
            result: Vec::new(),
            status: None,
        }
    }

    /// Integrates the problem over the whole grid with `local`.
    ///
    /// Any previous trajectory is discarded first, so solving twice with the
    /// same scheme yields the same result as solving once.
    ///
    /// Non-finite states are not an error: they propagate through the
    /// remaining steps as they would in plain arithmetic. The first one is
    /// logged as a warning.
    pub fn solve<L>(&mut self, local: &L) -> Status
    where
        L: LocalSolver<N, R>,
    {
        self.solve_observed(local, ())
    }

    /// Integrates the problem while reporting each node to `observer`.
    ///
    /// # Algorithm
    ///
    /// 1. Clear the trajectory and seed it with the initial state.
    /// 2. Emit an [`Event`] for node 0 at `grid.start()`.
    /// 3. For each node `i` in `1..grid.size()`:
    ///    - Step the previous state with `h = grid.step(i)`.
    ///    - Append it to the trajectory and advance the time by `h`.
    ///    - Emit an [`Event`] for node `i`.
    /// 4. Return [`Status::Complete`].
    ///
    /// The grid is queried once per node, so the cost stays linear in the
    /// node count for any [`Grid`] implementation.
    ///
    /// If the observer returns [`Action::StopEarly`], the loop ends at once
    /// with [`Status::StoppedByObserver`]. The nodes computed up to and
    /// including the observed one stay available through
    /// [`Solver::trajectory`], while [`Solver::result`] reports the run as
    /// incomplete.
    pub fn solve_observed<L, Obs>(&mut self, local: &L, mut observer: Obs) -> Status
    where
        L: LocalSolver<N, R>,
        Obs: Observer<N>,
    {
        let size = self.grid.size();
        debug!("solving {size} nodes with {}", local.name());

        self.status = None;
        self.result.clear();
        self.result.reserve(size);
        self.result.push(self.initial_state);

        let mut reported_non_finite = false;
        if !self.initial_state.is_finite() {
            warn!("initial state is not finite: {:?}", self.initial_state);
            reported_non_finite = true;
        }

        let mut time = self.grid.start();
        let event = Event {
            step: 0,
            time,
            state: self.initial_state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("stopped by observer at node 0");
            return self.finish(Status::StoppedByObserver);
        }

        let mut current = self.initial_state;

        for step in 1..size {
            let h = self.grid.step(step);
            let next = local.step(&current, &self.rhs, h);
            self.result.push(next);
            time += h;

            trace!("node {step}: t = {time}, h = {h}, state = {next:?}");

            if !reported_non_finite && !next.is_finite() {
                warn!("non-finite state at node {step} (t = {time}): {next:?}");
                reported_non_finite = true;
            }

            let event = Event {
                step,
                time,
                state: next,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                debug!("stopped by observer at node {step} of {size}");
                return self.finish(Status::StoppedByObserver);
            }

            current = next;
        }

        debug!("solved {size} nodes with {}", local.name());
        self.finish(Status::Complete)
    }

    fn finish(&mut self, status: Status) -> Status {
        self.status = Some(status);
        status
    }

    /// Returns the full trajectory, one state per grid node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] if no solve has run yet, or
    /// [`Error::Incomplete`] if the last solve was stopped by its observer.
    pub fn result(&self) -> Result<&[StateVector<N>], Error> {
        match self.status {
            None => Err(Error::NotSolved),
            Some(Status::StoppedByObserver) => Err(Error::Incomplete {
                computed: self.result.len(),
                size: self.grid.size(),
            }),
            Some(Status::Complete) => Ok(&self.result),
        }
    }

    /// Returns the state at node `index` of the full trajectory.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Solver::result`], or
    /// [`Error::IndexOutOfRange`] if `index` is past the trajectory.
    pub fn result_at(&self, index: usize) -> Result<StateVector<N>, Error> {
        let result = self.result()?;
        result.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            len: result.len(),
        })
    }

    /// Returns whatever the last solve computed, complete or not.
    ///
    /// Empty before the first solve.
    pub fn trajectory(&self) -> &[StateVector<N>] {
        &self.result
    }

    /// Returns how the last solve ended, or `None` if none has run.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns `true` once a trajectory covering the whole grid exists.
    pub fn is_solved(&self) -> bool {
        self.status == Some(Status::Complete)
    }

    /// Returns the problem parameters.
    pub fn params(&self) -> &P {
        &self.params
    }

    /// Returns the grid.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Returns the initial state.
    pub fn initial_state(&self) -> &StateVector<N> {
        &self.initial_state
    }

    /// Returns the right-hand side.
    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}
