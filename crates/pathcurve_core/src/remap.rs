//! Reparameterization of bounded control values onto an unbounded domain.

/// Offset placing the remap pole just outside the control range, so the
/// slider extreme at |x| = 2 stays finite.
const POLE_OFFSET: f64 = 2.001;

/// Sentinel standing in for an infinite rotational weight when the remapped
/// epsilon is exactly zero.
pub const EPSILON_INFINITY: f64 = 1e9;

/// Maps the bounded control interval onto an unbounded domain.
///
/// Values in [-1, 1] pass through unchanged; beyond that the map continues
/// monotonically toward +/- infinity, with poles at |x| = 2.001.
pub fn remap_unbounded(x: f64) -> f64 {
    if x < -1.0 {
        -1.0 / (x + POLE_OFFSET)
    } else if x > 1.0 {
        1.0 / (POLE_OFFSET - x)
    } else {
        x
    }
}

/// Remap for the epsilon control: the unbounded remap followed by a
/// reciprocal, so both epsilon -> 0 and epsilon -> infinity are reachable
/// from a bounded slider.
pub fn remap_epsilon(epsilon: f64) -> f64 {
    let remapped = remap_unbounded(epsilon);
    if remapped != 0.0 {
        1.0 / remapped
    } else {
        EPSILON_INFINITY
    }
}
