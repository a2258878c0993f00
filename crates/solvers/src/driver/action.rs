/// Control actions supported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the integration and keep the trajectory computed so far.
    StopEarly,
}
