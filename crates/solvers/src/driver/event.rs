use cauchy_core::StateVector;

/// Event emitted by the driver for each computed node.
///
/// Step 0 is the initial state, seeded before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// The node index.
    pub step: usize,

    /// The node coordinate, `grid.start()` plus the steps taken so far.
    pub time: f64,

    /// The state at the node.
    pub state: StateVector<N>,
}
