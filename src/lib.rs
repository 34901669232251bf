//! # Voltlab Core
//!
//! The DC circuit solver core of a browser-hosted circuit editor.
//!
//! The editor's rendering canvas, persistence layer, component catalog,
//! and UI controller are external collaborators: they exchange plain
//! component descriptors and voltage/current readings with this crate and
//! nothing else. What lives here:
//!
//! - [`circuit`] - the circuit model: ordered components, the node
//!   registry in first-seen order, and the serialized-descriptor boundary
//! - [`components`] - the closed set of component kinds the editor places
//! - [`solver`] - conductance-matrix assembly, Gaussian elimination with
//!   partial pivoting, and voltage/current queries
//!
//! ## Usage
//!
//! ```
//! use voltlab_core::{ComponentDescriptor, ComponentKind, DcSolver, SolverMode};
//!
//! let mut solver = DcSolver::with_mode(SolverMode::ModifiedNodal);
//! for descriptor in [
//!     ComponentDescriptor::new(ComponentKind::VoltageSource, 10.0, "vin", "gnd"),
//!     ComponentDescriptor::new(ComponentKind::Ground, 0.0, "gnd", "gnd"),
//!     ComponentDescriptor::new(ComponentKind::Resistor, 1000.0, "vin", "out"),
//!     ComponentDescriptor::new(ComponentKind::Resistor, 1000.0, "out", "gnd"),
//! ] {
//!     solver.add_component(&descriptor).unwrap();
//! }
//!
//! solver.solve().unwrap();
//! assert!((solver.node_voltage("out") - 5.0).abs() < 1e-9);
//! ```
//!
//! ## Solution model
//!
//! `solve()` recomputes every node potential wholesale from the current
//! component list; queries are O(1) lookups against the published
//! solution. Before the first solve, after a reset, or after a topology
//! change, every query returns 0 V rather than raising.
//!
//! The default [`SolverMode::Injection`] preserves the editor's original
//! simplified voltage-source model; see [`solver`] for the formulation
//! trade-offs and the opt-in modified-nodal mode.

pub mod circuit;
pub mod components;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Circuit, ComponentDescriptor, ComponentKind};
pub use error::{Result, SolverError};
pub use solver::{DcSolver, Solution, SolverMode};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmDcSolver;
