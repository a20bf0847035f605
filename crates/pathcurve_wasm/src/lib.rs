//! WASM bridge exposing the pathcurve curve-generation core to the frontend.
//!
//! The frontend owns rendering, camera, and slider widgets; it talks to this
//! bridge with `{name, value}` control-change notifications and pulls a
//! freshly generated curve family whenever one of them fires.

use js_sys::Float64Array;
use nalgebra::Vector4;
use pathcurve_core::family::build_family;
use pathcurve_core::sampler::{dehomogenize, sample_curve};
use pathcurve_core::types::{FamilyLayout, ShapeParameters};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Holds the current control values between change notifications, mirroring
/// the frontend's slider panel.
#[wasm_bindgen]
pub struct CurveSession {
    shape: ShapeParameters,
    layout: FamilyLayout,
}

#[wasm_bindgen]
impl CurveSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CurveSession {
        console_error_panic_hook::set_once();
        CurveSession {
            shape: ShapeParameters::default(),
            layout: FamilyLayout::default(),
        }
    }

    /// Applies one `{name, value}` control-change notification.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        if !apply_parameter(&mut self.shape, &mut self.layout, name, value) {
            return Err(JsValue::from_str("Unknown parameter"));
        }
        Ok(())
    }

    /// Regenerates the displayed family from the current control values and
    /// returns it as a structured payload of angle-tagged polylines.
    pub fn build(&self) -> Result<JsValue, JsValue> {
        let family = build_family(&self.shape, &self.layout)
            .map_err(|e| JsValue::from_str(&format!("Curve generation failed: {}", e)))?;
        to_value(&family).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Current control values, for initializing the frontend's widgets.
    pub fn get_parameters(&self) -> Result<JsValue, JsValue> {
        let snapshot = SessionSnapshot {
            shape: &self.shape,
            layout: &self.layout,
        };
        to_value(&snapshot).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

#[derive(Serialize)]
struct SessionSnapshot<'a> {
    shape: &'a ShapeParameters,
    layout: &'a FamilyLayout,
}

impl Default for CurveSession {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_parameter(
    shape: &mut ShapeParameters,
    layout: &mut FamilyLayout,
    name: &str,
    value: f64,
) -> bool {
    match name {
        "lambda" => shape.lambda = value,
        "epsilon" => shape.epsilon = value,
        "speed" => shape.speed = value,
        "iradius" => layout.iradius = value,
        "ncurves" => layout.ncurves = value as usize,
        "tangle" => layout.tangle = value,
        "nlayers" => layout.nlayers = value as usize,
        _ => return false,
    }
    true
}

/// Samples one curve and returns its dehomogenized points as a flat
/// `[x, y, z, x, y, z, ...]` array.
#[wasm_bindgen]
pub fn sample_curve_points(
    number_steps: u32,
    initial_point: Vec<f64>,
    speed: f64,
    lambda: f64,
    epsilon: f64,
) -> Result<Float64Array, JsValue> {
    if initial_point.len() != 4 {
        return Err(JsValue::from_str("Initial point must have four components."));
    }
    let start = Vector4::new(
        initial_point[0],
        initial_point[1],
        initial_point[2],
        initial_point[3],
    );
    let samples = sample_curve(number_steps as usize, start, speed, lambda, epsilon)
        .map_err(|e| JsValue::from_str(&format!("Curve sampling failed: {}", e)))?;

    let mut flat = Vec::with_capacity(number_steps as usize * 3);
    for point in samples {
        let euclidean = dehomogenize(&point).map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        flat.extend_from_slice(&[euclidean.x, euclidean.y, euclidean.z]);
    }
    Ok(Float64Array::from(flat.as_slice()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn session_builds_the_default_family() {
        let session = CurveSession::new();
        let value = session.build().expect("family payload");
        assert!(!value.is_undefined());
    }

    #[wasm_bindgen_test]
    fn flat_sampler_returns_three_values_per_step() {
        let points = sample_curve_points(50, vec![0.5, 0.0, 0.0, 1.0], 1.0, 1.0, 1.0)
            .expect("flat samples");
        assert_eq!(points.length(), 150);
    }
}
