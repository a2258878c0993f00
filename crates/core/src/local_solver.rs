use crate::StateVector;

/// A single-step integration scheme.
///
/// A local solver advances a state by one grid step: given `y` at node
/// `i - 1`, the right-hand side and the step size `h`, it returns the state
/// at node `i`. It carries a copy of the problem parameters it passes to the
/// right-hand side, and keeps no memory between calls.
///
/// The driver is generic over this trait, so the scheme is chosen statically
/// and each call is monomorphized.
pub trait LocalSolver<const N: usize, R> {
    /// Advances `state` by one step of size `h`.
    fn step(&self, state: &StateVector<N>, rhs: &R, h: f64) -> StateVector<N>;

    /// Returns the formal order of the global error, `p` in `O(h^p)`.
    ///
    /// Halving the step should divide the global error by about `2^p`.
    fn order(&self) -> u32;

    /// Returns a short human-readable name for the scheme.
    fn name(&self) -> &'static str;
}
