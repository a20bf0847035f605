//! Shared value types for curve-family generation.
//!
//! Everything here is a plain immutable value: parameters are read fresh per
//! regeneration request, and the produced family is discarded wholesale when
//! a newer request supersedes it.

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Shape controls for one curve-generation request, as read from the UI.
///
/// `lambda` and `epsilon` are raw slider values in [-2, 2]; the remap onto
/// the unbounded domain happens inside the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Ratio of the two real eigenvalues.
    pub lambda: f64,
    /// Strength of the complex-conjugate eigenvalue pair.
    pub epsilon: f64,
    /// Half-width of the sampled time range, in flow time per unit.
    pub speed: f64,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            lambda: -1.0,
            epsilon: 1.0,
            speed: 1.0,
        }
    }
}

/// Layout of the displayed family: how many rotated copies, over what
/// angular sector, at which radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FamilyLayout {
    /// Radius of the outermost initial point.
    pub iradius: f64,
    /// Number of angular slots.
    pub ncurves: usize,
    /// Width of the sector the slots span, in radians.
    pub tangle: f64,
    /// Number of radius-scaled layers per slot.
    pub nlayers: usize,
}

impl Default for FamilyLayout {
    fn default() -> Self {
        Self {
            iradius: 0.5,
            ncurves: 24,
            tangle: std::f64::consts::TAU,
            nlayers: 1,
        }
    }
}

/// A single dehomogenized curve point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuclideanPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector3<f64>> for EuclideanPoint {
    fn from(value: Vector3<f64>) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

/// All layer curves sharing one angular slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGroup {
    /// Rotation about the vertical axis the renderer applies to this group.
    pub angle: f64,
    /// One polyline per layer, innermost layer first.
    pub polylines: Vec<Vec<EuclideanPoint>>,
}

impl CurveGroup {
    /// Bakes the group rotation into the points, for consumers without a
    /// transform hierarchy.
    pub fn rotated_polylines(&self) -> Vec<Vec<EuclideanPoint>> {
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), self.angle);
        self.polylines
            .iter()
            .map(|polyline| {
                polyline
                    .iter()
                    .map(|point| {
                        EuclideanPoint::from(rotation * Vector3::new(point.x, point.y, point.z))
                    })
                    .collect()
            })
            .collect()
    }
}

/// The full family of rotated curve copies for one parameter setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFamily {
    pub groups: Vec<CurveGroup>,
}
