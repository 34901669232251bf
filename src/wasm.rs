//! WASM bindings for Voltlab Core.
//!
//! JavaScript-friendly bindings for the browser editor: the UI controller
//! adds components as it places them on the canvas, calls `solve()`, and
//! reads voltages and currents back for display.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmDcSolver } from 'voltlab_core';
//!
//! await init();
//!
//! const solver = new WasmDcSolver('mna');
//! solver.add_component('voltageSource', 9.0, 'vin', 'gnd');
//! solver.add_component('ground', 0.0, 'gnd', 'gnd');
//! solver.add_component('resistor', 470.0, 'vin', 'gnd');
//! solver.solve();
//! const volts = solver.voltage_between('vin', 'gnd');
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Circuit, ComponentDescriptor};
use crate::solver::{DcSolver, SolverMode};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible DC circuit solver.
///
/// This struct wraps the native [`DcSolver`] and provides a
/// JavaScript-friendly API for the editor's UI controller.
#[wasm_bindgen]
pub struct WasmDcSolver {
    solver: DcSolver,
}

#[wasm_bindgen]
impl WasmDcSolver {
    /// Create a new solver.
    ///
    /// # Arguments
    /// * `mode` - `'injection'` for the editor's historical voltage-source
    ///   model, `'mna'` for the physically correct formulation
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str) -> Result<WasmDcSolver, JsValue> {
        let mode: SolverMode = mode
            .parse()
            .map_err(|e: crate::error::SolverError| JsValue::from_str(&e.to_string()))?;
        Ok(WasmDcSolver {
            solver: DcSolver::with_mode(mode),
        })
    }

    /// Add one component to the circuit.
    ///
    /// # Arguments
    /// * `kind` - descriptor type string, e.g. `'resistor'`
    /// * `value` - ohms for resistors, volts for voltage sources
    /// * `node1`, `node2` - junction identifiers chosen by the editor
    #[wasm_bindgen]
    pub fn add_component(
        &mut self,
        kind: &str,
        value: f64,
        node1: &str,
        node2: &str,
    ) -> Result<(), JsValue> {
        let kind = kind
            .parse()
            .map_err(|e: crate::error::SolverError| JsValue::from_str(&e.to_string()))?;
        let descriptor = ComponentDescriptor::new(kind, value, node1, node2);
        self.solver
            .add_component(&descriptor)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the circuit with a serialized descriptor sequence.
    #[wasm_bindgen]
    pub fn load_circuit(&mut self, json: &str) -> Result<(), JsValue> {
        let circuit = Circuit::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mode = self.solver.mode();
        self.solver = DcSolver::from_circuit(circuit, mode);
        Ok(())
    }

    /// Serialize the current circuit for the persistence layer.
    #[wasm_bindgen]
    pub fn save_circuit(&self) -> Result<String, JsValue> {
        self.solver
            .circuit()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Recompute all node voltages.
    #[wasm_bindgen]
    pub fn solve(&mut self) -> Result<(), JsValue> {
        self.solver
            .solve()
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The potential at a node, 0 if unsolved.
    #[wasm_bindgen]
    pub fn node_voltage(&self, node: &str) -> f64 {
        self.solver.node_voltage(node)
    }

    /// |V(node1) - V(node2)|.
    #[wasm_bindgen]
    pub fn voltage_between(&self, node1: &str, node2: &str) -> f64 {
        self.solver.voltage_between(node1, node2)
    }

    /// Signed current from `node1` to `node2` through the given resistance.
    #[wasm_bindgen]
    pub fn current_through(&self, node1: &str, node2: &str, resistance: f64) -> f64 {
        self.solver.current_through(node1, node2, resistance)
    }

    /// Discard all components, nodes, and results.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.solver.reset();
    }

    /// Number of registered nodes.
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.solver.circuit().node_count()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
