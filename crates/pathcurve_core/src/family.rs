//! Assembly of the full displayed curve family.

use std::f64::consts::TAU;

use anyhow::{bail, Result};
use nalgebra::Vector4;

use crate::sampler::{dehomogenize, sample_curve};
use crate::types::{CurveFamily, CurveGroup, EuclideanPoint, FamilyLayout, ShapeParameters};

/// Number of points sampled per displayed curve.
pub const CURVE_SAMPLES: usize = 500;

/// Sector widths this close to a full turn are treated as exactly full, so a
/// closed family meets itself without a seam.
const FULL_TURN_SNAP: f64 = 0.01;

/// Builds the full family for one parameter setting: `ncurves` angular
/// slots across the `tangle` sector, each holding `nlayers` radius-scaled
/// curves started from `(factor * iradius, 0, 0, 1)`.
///
/// The whole family is recomputed from scratch; nothing is cached between
/// calls.
pub fn build_family(shape: &ShapeParameters, layout: &FamilyLayout) -> Result<CurveFamily> {
    if layout.ncurves < 1 {
        bail!("ncurves must be at least 1.");
    }
    if layout.nlayers < 1 {
        bail!("nlayers must be at least 1.");
    }
    if !layout.iradius.is_finite() || layout.iradius < 0.0 {
        bail!("iradius must be finite and non-negative.");
    }
    if !layout.tangle.is_finite() {
        bail!("tangle must be finite.");
    }
    let tangle = snap_full_turn(layout.tangle);
    if !(0.0..=TAU).contains(&tangle) {
        bail!("tangle must lie within [0, 2*pi].");
    }

    let d_angle = if layout.ncurves == 1 {
        0.0
    } else {
        tangle / (layout.ncurves - 1) as f64
    };

    let mut groups = Vec::with_capacity(layout.ncurves);
    for slot in 0..layout.ncurves {
        let mut polylines = Vec::with_capacity(layout.nlayers);
        for layer in 0..layout.nlayers {
            let factor = (layer + 1) as f64 / layout.nlayers as f64;
            let start = Vector4::new(factor * layout.iradius, 0.0, 0.0, 1.0);
            let points = sample_curve(
                CURVE_SAMPLES,
                start,
                shape.speed,
                shape.lambda,
                shape.epsilon,
            )?
            .map(|point| dehomogenize(&point).map(EuclideanPoint::from))
            .collect::<Result<Vec<_>>>()?;
            polylines.push(points);
        }
        groups.push(CurveGroup {
            angle: slot as f64 * d_angle,
            polylines,
        });
    }

    Ok(CurveFamily { groups })
}

fn snap_full_turn(tangle: f64) -> f64 {
    if (tangle - TAU).abs() < FULL_TURN_SNAP {
        TAU
    } else {
        tangle
    }
}
