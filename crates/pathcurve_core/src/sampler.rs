//! Sampling of a single flow curve over its symmetric time range.

use anyhow::{bail, Result};
use nalgebra::{Vector3, Vector4};

use crate::chart::ChartTransform;
use crate::flow::exponential_at;
use crate::remap::{remap_epsilon, remap_unbounded};
use crate::spectrum::{build_spectrum, EigenSpectrum};

/// Lazily yields the homogeneous points of one sampled curve.
///
/// Instances are independent and side-effect free: each call to
/// [`sample_curve`] returns a fresh iterator, and a clone traverses its
/// remaining points without disturbing the one it was cloned from.
#[derive(Debug, Clone)]
pub struct CurvePoints {
    spectrum: EigenSpectrum,
    chart: ChartTransform,
    initial_point: Vector4<f64>,
    start_time: f64,
    increment: f64,
    number_steps: usize,
    index: usize,
}

impl Iterator for CurvePoints {
    type Item = Vector4<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.number_steps {
            return None;
        }
        let t = self.start_time + self.index as f64 * self.increment;
        self.index += 1;
        let flow = exponential_at(&self.spectrum, t);
        Some(self.chart.apply(&flow, &self.initial_point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.number_steps - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurvePoints {}

/// Samples one curve of the flow at `number_steps` uniformly spaced times in
/// `[-4 * speed, 4 * speed]`.
///
/// `lambda` and `epsilon` are raw control values; they are remapped here
/// before the generator spectrum is built. The yielded points are
/// homogeneous -- consumers that need Euclidean coordinates apply
/// [`dehomogenize`].
pub fn sample_curve(
    number_steps: usize,
    initial_point: Vector4<f64>,
    speed: f64,
    lambda: f64,
    epsilon: f64,
) -> Result<CurvePoints> {
    if number_steps < 2 {
        bail!("Curve sampling requires at least two steps.");
    }
    if !speed.is_finite() || speed < 0.0 {
        bail!("speed must be finite and non-negative.");
    }
    if !lambda.is_finite() || lambda.abs() > 2.0 {
        bail!("lambda must be finite and lie within [-2, 2].");
    }
    if !epsilon.is_finite() || epsilon.abs() > 2.0 {
        bail!("epsilon must be finite and lie within [-2, 2].");
    }
    if initial_point.iter().any(|value| !value.is_finite()) {
        bail!("Initial point components must be finite.");
    }

    let spectrum = build_spectrum(remap_unbounded(lambda), remap_epsilon(epsilon));
    let increment = 8.0 * speed / (number_steps - 1) as f64;

    Ok(CurvePoints {
        spectrum,
        chart: ChartTransform::new(),
        initial_point,
        start_time: -4.0 * speed,
        increment,
        number_steps,
        index: 0,
    })
}

/// Converts a homogeneous point to Euclidean coordinates.
///
/// The rendering chart cannot produce `w == 0` for points entering the flow
/// with `w = 1`; observing one means an invariant was broken upstream.
pub fn dehomogenize(point: &Vector4<f64>) -> Result<Vector3<f64>> {
    if point.w == 0.0 {
        bail!("Degenerate homogeneous point: w is zero.");
    }
    Ok(Vector3::new(
        point.x / point.w,
        point.y / point.w,
        point.z / point.w,
    ))
}
