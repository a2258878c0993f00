/// Indicates how a solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Computed a state for every grid node.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}
