//! The solver facade tying the circuit model to the numerical core.

use std::collections::HashMap;

use crate::circuit::{Circuit, ComponentDescriptor};
use crate::error::Result;

use super::nodal::{assemble_injection, assemble_mna};
use super::{Solution, SolverMode};

/// DC circuit solver.
///
/// Owns the circuit under edit and the most recently published
/// [`Solution`]. Components are added incrementally;
/// [`solve`](DcSolver::solve) recomputes every node potential wholesale,
/// and queries read from the published solution until the next solve or
/// reset.
#[derive(Debug, Default)]
pub struct DcSolver {
    circuit: Circuit,
    mode: SolverMode,
    solution: Solution,
}

impl DcSolver {
    /// Create a solver using the default injection formulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with an explicit formulation.
    pub fn with_mode(mode: SolverMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Wrap an already-built circuit.
    pub fn from_circuit(circuit: Circuit, mode: SolverMode) -> Self {
        Self {
            circuit,
            mode,
            solution: Solution::default(),
        }
    }

    /// The formulation this solver uses.
    pub fn mode(&self) -> SolverMode {
        self.mode
    }

    /// The circuit under edit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The most recently published solution.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Add a component, registering its terminals.
    ///
    /// A successful add invalidates the published solution: the topology
    /// changed, so queries return 0 until the next solve. A rejected add
    /// leaves both the circuit and the solution untouched.
    pub fn add_component(&mut self, descriptor: &ComponentDescriptor) -> Result<()> {
        self.circuit.add(descriptor)?;
        self.solution = Solution::default();
        Ok(())
    }

    /// Solve for every node potential and publish the result.
    ///
    /// The computation is a pure function of the current component list
    /// and node order; an empty circuit yields an empty solution. On
    /// failure the previously published solution is left untouched, so no
    /// NaN or infinite voltage is ever served.
    pub fn solve(&mut self) -> Result<&Solution> {
        let names = self.circuit.node_names();

        let voltages: HashMap<String, f64> = match self.mode {
            SolverMode::Injection => {
                let system = assemble_injection(&self.circuit);
                log::debug!("injection solve: {} nodes", system.size());
                let x = system.solve()?;
                names.iter().cloned().zip(x).collect()
            }
            SolverMode::ModifiedNodal => {
                let (system, layout) = assemble_mna(&self.circuit);
                log::debug!(
                    "modified nodal solve: {} nodes, {} unknowns",
                    names.len(),
                    system.size()
                );
                let x = system.solve()?;
                names
                    .iter()
                    .enumerate()
                    .map(|(idx, name)| {
                        let v = layout.node_slots[idx].map(|slot| x[slot]).unwrap_or(0.0);
                        (name.clone(), v)
                    })
                    .collect()
            }
        };

        self.solution = Solution::new(names.to_vec(), voltages);
        Ok(&self.solution)
    }

    /// Discard all components, nodes, and the published solution.
    pub fn reset(&mut self) {
        self.circuit.clear();
        self.solution = Solution::default();
    }

    /// |V(node1) - V(node2)| from the published solution.
    pub fn voltage_between(&self, node1: &str, node2: &str) -> f64 {
        self.solution.voltage_between(node1, node2)
    }

    /// Signed current from `node1` to `node2` through a caller-supplied
    /// resistance.
    pub fn current_through(&self, node1: &str, node2: &str, resistance: f64) -> f64 {
        self.solution.current_through(node1, node2, resistance)
    }

    /// The potential at a node, 0 if unsolved.
    pub fn node_voltage(&self, node: &str) -> f64 {
        self.solution.node_voltage(node)
    }
}
