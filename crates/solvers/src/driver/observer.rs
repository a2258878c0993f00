use super::{Action, Event};

/// Watches a trajectory node by node while it is being integrated.
///
/// The driver calls [`Observer::observe`] once for the initial state and once
/// after every step. Returning `Some(Action::StopEarly)` ends the solve with
/// the trajectory computed so far; `None` lets it continue.
///
/// Any `FnMut(&Event<N>) -> Option<Action>` closure is an observer, and `()`
/// is the observer that never intervenes.
///
/// # Example
///
/// ```
/// use cauchy_core::{StateVector, UniformGrid};
/// use cauchy_solvers::{driver::{Action, Event, Solver, Status}, runge_kutta::Rk4};
///
/// let rhs = |y: &StateVector<1>, (): &()| StateVector::new([y[0]]);
/// let grid = UniformGrid::new(0.0, 10.0, 101)?;
/// let mut solver = Solver::new((), grid, StateVector::new([1.0]), rhs);
///
/// // Stop once the solution has grown a hundredfold.
/// let status = solver.solve_observed(&Rk4::new(()), |event: &Event<1>| {
///     (event.state[0] > 100.0).then_some(Action::StopEarly)
/// });
///
/// assert_eq!(status, Status::StoppedByObserver);
/// assert!(solver.trajectory().len() < 101);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Observer<const N: usize> {
    /// Inspects the node in `event` and optionally requests an action.
    fn observe(&mut self, event: &Event<N>) -> Option<Action>;
}

impl<const N: usize, F> Observer<N> for F
where
    F: FnMut(&Event<N>) -> Option<Action>,
{
    fn observe(&mut self, event: &Event<N>) -> Option<Action> {
        self(event)
    }
}

impl<const N: usize> Observer<N> for () {
    fn observe(&mut self, _event: &Event<N>) -> Option<Action> {
        None
    }
}

/// Stops the solve at the first node whose state is not finite.
///
/// Once a component overflows or turns NaN every later node is NaN as well,
/// so there is nothing left to integrate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopOnNonFinite;

impl<const N: usize> Observer<N> for StopOnNonFinite {
    fn observe(&mut self, event: &Event<N>) -> Option<Action> {
        (!event.state.is_finite()).then_some(Action::StopEarly)
    }
}
