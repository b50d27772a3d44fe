/// Opaque time-point identifier. `0` is reserved for the virtual AllMax
/// source and never denotes a real node passed in by a caller.
pub type NodeId = usize;

/// Sentinel used throughout the solver in place of a nullable distance.
/// Arithmetic must never be performed on this value; every distance update
/// site compares against it before adding.
pub const INFINITY: f64 = f64::INFINITY;
