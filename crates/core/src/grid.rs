mod uniform;

pub use uniform::{GridError, UniformGrid};

/// A discretization of the independent variable into ordered nodes.
///
/// The time-stepping driver only needs two things from a grid: how many nodes
/// there are and the step size used to reach each node from the previous one.
/// Keeping the contract that small means a non-uniform grid (an externally
/// supplied time series, say) can replace [`UniformGrid`] without changes to
/// the driver.
pub trait Grid {
    /// Returns the number of nodes.
    fn size(&self) -> usize;

    /// Returns the step size used to advance from node `index - 1` to node
    /// `index`.
    ///
    /// The value at `index == 0` is never used by the driver, which seeds the
    /// first node directly with the initial state.
    fn step(&self, index: usize) -> f64;

    /// Returns the coordinate of the first node.
    fn start(&self) -> f64;

    /// Returns the coordinate of the last node.
    fn end(&self) -> f64;

    /// Returns the coordinate of node `index`.
    ///
    /// The default implementation accumulates step sizes from [`Grid::start`],
    /// which works for any grid but costs `O(index)`. Grids that store their
    /// nodes should override it.
    fn time(&self, index: usize) -> f64 {
        (1..=index).fold(self.start(), |t, i| t + self.step(i))
    }

    /// Returns the coordinates of all nodes in order.
    ///
    /// The default implementation walks the grid once, calling
    /// [`Grid::step`] a single time per node, so a full pass stays linear
    /// even when [`Grid::time`] is not overridden.
    fn times(&self) -> impl Iterator<Item = f64> {
        let start = self.start();
        let rest = (1..self.size()).scan(start, move |t, i| {
            *t += self.step(i);
            Some(*t)
        });
        std::iter::once(start).chain(rest)
    }
}
