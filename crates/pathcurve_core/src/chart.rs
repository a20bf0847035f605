//! Change of basis between eigen-coordinates and the rendering chart.

use nalgebra::{Matrix4, Vector4};

/// Fixed change of basis from the flow's eigen-coordinates into the
/// rendering chart: identity on x and y, affine remap of the third
/// coordinate into a projective chart (`z' = -z/2 + w/2`, `w' = z + w`).
/// Both matrices are fixed, so the inverse is stored rather than recomputed
/// per regeneration.
#[derive(Debug, Clone)]
pub struct ChartTransform {
    basis: Matrix4<f64>,
    inverse: Matrix4<f64>,
}

impl ChartTransform {
    pub fn new() -> Self {
        Self {
            basis: Matrix4::new(
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, -0.5, 0.5, //
                0.0, 0.0, 1.0, 1.0,
            ),
            inverse: Matrix4::new(
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, -1.0, 0.5, //
                0.0, 0.0, 1.0, 0.5,
            ),
        }
    }

    /// Conjugates a flow matrix into the rendering chart and applies it to a
    /// homogeneous point.
    pub fn apply(&self, flow: &Matrix4<f64>, point: &Vector4<f64>) -> Vector4<f64> {
        self.basis * flow * self.inverse * point
    }
}

impl Default for ChartTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ChartTransform;
    use crate::flow::exponential_at;
    use crate::spectrum::build_spectrum;
    use nalgebra::{Matrix4, Vector4};

    #[test]
    fn stored_inverse_matches_the_basis() {
        let chart = ChartTransform::new();
        let product = chart.basis * chart.inverse;
        assert!((product - Matrix4::identity()).abs().max() < 1e-15);
    }

    #[test]
    fn identity_flow_passes_points_through() {
        let chart = ChartTransform::new();
        let point = Vector4::new(0.5, -0.25, 0.75, 1.0);
        let moved = chart.apply(&Matrix4::identity(), &point);
        assert!((moved - point).abs().max() < 1e-15);
    }

    #[test]
    fn scalar_blocks_follow_the_projective_closed_form() {
        // With k0 = 1, k1 = 0, k2 = 1 the conjugated z/w block is
        // [[(a+b)/2, (b-a)/4], [b-a, (a+b)/2]] for a = 1, b = exp(t).
        let spectrum = build_spectrum(0.0, 1.0);
        let chart = ChartTransform::new();
        let point = Vector4::new(0.5, 0.0, 0.0, 1.0);
        for t in [-1.5, -0.3, 0.0, 0.4, 2.0] {
            let moved = chart.apply(&exponential_at(&spectrum, t), &point);
            let b = t.exp();
            assert!((moved.z - (b - 1.0) / 4.0).abs() < 1e-12);
            assert!((moved.w - (1.0 + b) / 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn chart_w_stays_at_least_one_half_for_unit_w_inputs() {
        let spectrum = build_spectrum(0.3, 1.7);
        let chart = ChartTransform::new();
        let point = Vector4::new(0.5, 0.0, 0.0, 1.0);
        for i in 0..40 {
            let t = -4.0 + 0.2 * i as f64;
            let moved = chart.apply(&exponential_at(&spectrum, t), &point);
            assert!(moved.w > 0.0, "w must stay positive, got {} at t = {t}", moved.w);
        }
    }
}
