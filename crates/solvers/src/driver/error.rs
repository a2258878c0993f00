use thiserror::Error;

/// Errors returned when reading a [`Solver`](super::Solver) trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("trajectory not computed: call `solve` first")]
    NotSolved,

    #[error("trajectory stopped early after {computed} of {size} nodes")]
    Incomplete { computed: usize, size: usize },

    #[error("node {index} out of range for a trajectory of {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },
}
