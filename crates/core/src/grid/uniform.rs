use thiserror::Error;

use super::Grid;

/// Errors that can occur when constructing a [`UniformGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("grid bounds must be finite, got [{start}, {end}]")]
    NonFiniteBounds { start: f64, end: f64 },

    #[error("grid length {end} - {start} overflows")]
    SpanOverflow { start: f64, end: f64 },

    #[error("grid end must be greater than start, got [{start}, {end}]")]
    EmptyInterval { start: f64, end: f64 },

    #[error("grid needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),

    #[error("target step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("step {step} yields too many nodes ({count}, at most {})", UniformGrid::MAX_NODES)]
    TooManyNodes { step: f64, count: f64 },

    #[error("[{start}, {end}] cannot hold {node_count} distinct nodes")]
    UnresolvedNodes {
        start: f64,
        end: f64,
        node_count: usize,
    },
}

/// A grid of equally spaced nodes on `[start, end]`.
///
/// # Construction
///
/// - [`UniformGrid::new`] takes the node count directly, giving the exact
///   spacing `(end - start) / (node_count - 1)`.
/// - [`UniformGrid::with_step`] takes a target step and derives the node
///   count as `ceil((end - start) / target_step) + 1`. The realized step is
///   therefore never larger than the target, but may be slightly smaller.
///   Floating-point division can push the quotient just above an integer
///   (`1.1 / 0.1` is `11.000000000000002`), which adds a node. Callers that
///   need an exact step should pass the node count instead.
///
/// # Example
///
/// ```
/// use cauchy_core::{Grid, UniformGrid};
///
/// let grid = UniformGrid::with_step(0.0, 10.0, 0.3)?;
///
/// assert_eq!(grid.size(), 35);
/// assert!(grid.step(1) <= 0.3);
/// # Ok::<(), cauchy_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGrid {
    nodes: Vec<f64>,
    step: f64,
}

impl UniformGrid {
    /// Largest node count a grid accepts.
    pub const MAX_NODES: usize = u32::MAX as usize;

    /// Creates a grid with `node_count` equally spaced nodes.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if a bound is not finite, if `end <= start`,
    /// if `end - start` overflows, if `node_count` is below 2 or above
    /// [`UniformGrid::MAX_NODES`], or if adjacent nodes would round to the
    /// same value.
    pub fn new(start: f64, end: f64, node_count: usize) -> Result<Self, GridError> {
        validate_bounds(start, end)?;
        if node_count < 2 {
            return Err(GridError::TooFewNodes(node_count));
        }

        let intervals = node_count - 1;
        #[allow(clippy::cast_precision_loss)]
        let step = (end - start) / intervals as f64;

        if node_count > Self::MAX_NODES {
            #[allow(clippy::cast_precision_loss)]
            let count = node_count as f64;
            return Err(GridError::TooManyNodes { step, count });
        }

        #[allow(clippy::cast_precision_loss)]
        let mut nodes: Vec<f64> = (0..node_count)
            .map(|i| start + step * i as f64)
            .collect();

        // Pin the last node so `end()` reports the requested bound exactly.
        nodes[intervals] = end;

        if nodes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(GridError::UnresolvedNodes {
                start,
                end,
                node_count,
            });
        }

        Ok(Self { nodes, step })
    }

    /// Creates a grid whose step is as close as possible to, but never
    /// larger than, `target_step`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if a bound is not finite, if `end <= start`,
    /// if `target_step` is not finite and positive, or if the resulting node
    /// count does not fit in memory.
    pub fn with_step(start: f64, end: f64, target_step: f64) -> Result<Self, GridError> {
        validate_bounds(start, end)?;
        if !target_step.is_finite() || target_step <= 0.0 {
            return Err(GridError::InvalidStep(target_step));
        }

        let intervals = ((end - start) / target_step).ceil();

        if !intervals.is_finite() || intervals >= f64::from(u32::MAX) {
            return Err(GridError::TooManyNodes {
                step: target_step,
                count: intervals + 1.0,
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = intervals as usize;

        Self::new(start, end, intervals + 1)
    }

    /// Returns all node coordinates in order.
    #[must_use]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }
}

impl Grid for UniformGrid {
    fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the constant spacing, whatever `index` is.
    fn step(&self, _index: usize) -> f64 {
        self.step
    }

    fn start(&self) -> f64 {
        self.nodes[0]
    }

    fn end(&self) -> f64 {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns the stored coordinate of node `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    fn time(&self, index: usize) -> f64 {
        self.nodes[index]
    }

    fn times(&self) -> impl Iterator<Item = f64> {
        self.nodes.iter().copied()
    }
}

fn validate_bounds(start: f64, end: f64) -> Result<(), GridError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(GridError::NonFiniteBounds { start, end });
    }
    if end <= start {
        return Err(GridError::EmptyInterval { start, end });
    }
    if !(end - start).is_finite() {
        return Err(GridError::SpanOverflow { start, end });
    }
    Ok(())
}
