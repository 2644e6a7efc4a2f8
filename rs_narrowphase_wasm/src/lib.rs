// rs_narrowphase_wasm/src/lib.rs
// Browser-facing wrapper: a JS renderer owns the frame loop and reads poses back as typed arrays.

use js_sys::{Float64Array, Uint8Array};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use rs_narrowphase::models::{ConvexBody, ConvexHull, RigidBody, StockShape};
use rs_narrowphase::simulation::SimulationContext;
use rs_narrowphase::utils::{CollisionError, SimulationConfig};

fn to_js_error(error: CollisionError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn parse_stock_shape(name: &str) -> Result<StockShape, JsValue> {
    match name.to_ascii_lowercase().as_str() {
        "box" | "cube" => Ok(StockShape::Box),
        "cylinder" => Ok(StockShape::Cylinder),
        "dodecahedron" => Ok(StockShape::Dodecahedron),
        other => Err(JsValue::from_str(&format!("Unknown stock shape: {}", other))),
    }
}

#[wasm_bindgen]
pub struct WasmScene {
    context: SimulationContext,
}

#[wasm_bindgen]
impl WasmScene {
    #[wasm_bindgen(constructor)]
    pub fn new(time_step: f64, attractor_strength: f64) -> Result<WasmScene, JsValue> {
        let config = SimulationConfig::new(Some(time_step), None, Some(attractor_strength), None);
        SimulationContext::new(config)
            .map(|context| Self { context })
            .map_err(to_js_error)
    }

    /// Adds a stock shape ("box", "cylinder" or "dodecahedron") and returns its index.
    #[wasm_bindgen]
    pub fn add_body(&mut self, shape: &str, x: f64, y: f64, z: f64, mass: f64) -> Result<usize, JsValue> {
        let hull = ConvexHull::stock(parse_stock_shape(shape)?);
        let body = RigidBody::new(hull, (x, y, z), mass).map_err(to_js_error)?;
        Ok(self.context.add_body(body))
    }

    #[wasm_bindgen]
    pub fn populate_grid(&mut self, dimensions: usize, spacing: f64, seed: u32) -> Result<usize, JsValue> {
        let mut rng = StdRng::seed_from_u64(u64::from(seed));
        self.context.populate_grid(dimensions, spacing, &mut rng).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn set_velocity(&mut self, index: usize, x: f64, y: f64, z: f64) -> Result<(), JsValue> {
        self.context.set_velocity(index, (x, y, z)).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn add_velocity(&mut self, index: usize, x: f64, y: f64, z: f64) -> Result<(), JsValue> {
        self.context.add_velocity(index, (x, y, z)).map_err(to_js_error)
    }

    /// Spin in radians per second about world axes.
    #[wasm_bindgen]
    pub fn set_angular_velocity(&mut self, index: usize, x: f64, y: f64, z: f64) -> Result<(), JsValue> {
        self.context.set_angular_velocity(index, (x, y, z)).map_err(to_js_error)
    }

    /// Feeds a frame's wall time (seconds) into the fixed-step loop; returns the steps run.
    #[wasm_bindgen]
    pub fn advance(&mut self, frame_dt: f64) -> Result<usize, JsValue> {
        self.context.advance(frame_dt).map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.context.bodies().len()
    }

    #[wasm_bindgen(getter)]
    pub fn collisions_last_step(&self) -> usize {
        self.context.last_report().stats.collisions
    }

    /// Shape kind of a body ("Cuboid", "Cylinder", ...) so the renderer can pick a mesh.
    #[wasm_bindgen]
    pub fn shape_name(&self, index: usize) -> Result<String, JsValue> {
        self.context
            .body(index)
            .map(|body| body.hull().shape().shape_type_string())
            .map_err(to_js_error)
    }

    /// Flat `[x, y, z, ...]` per body.
    #[wasm_bindgen]
    pub fn positions(&self) -> Float64Array {
        let flat: Vec<f64> = self
            .context
            .bodies()
            .iter()
            .flat_map(|body| {
                let p = body.position();
                [p.0, p.1, p.2]
            })
            .collect();
        Float64Array::from(flat.as_slice())
    }

    /// Flat `[w, x, y, z, ...]` per body.
    #[wasm_bindgen]
    pub fn orientations(&self) -> Float64Array {
        let flat: Vec<f64> = self
            .context
            .bodies()
            .iter()
            .flat_map(|body| {
                let q = body.orientation();
                [q.w, q.x, q.y, q.z]
            })
            .collect();
        Float64Array::from(flat.as_slice())
    }

    /// 1 for bodies that touched another body in the last step, 0 otherwise.
    #[wasm_bindgen]
    pub fn contact_flags(&self) -> Uint8Array {
        let flags: Vec<u8> = self.context.bodies().iter().map(|body| u8::from(body.in_contact())).collect();
        Uint8Array::from(flags.as_slice())
    }
}
