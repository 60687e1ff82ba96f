/// Control actions supported by the attenuation sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep and return the points measured so far.
    StopEarly,
}
