//! Nodal-analysis solver for DC circuits.
//!
//! The solver assembles a conductance matrix G and a current-injection
//! vector I from the circuit, solves G·v = I by Gaussian elimination with
//! partial pivoting, and publishes one voltage per registered node.
//!
//! Two formulations are available:
//!
//! - [`SolverMode::Injection`] (default) reproduces the editor's original
//!   computation: a voltage source adds its value to I at its first
//!   terminal and introduces no constraint equation. G is then a weighted
//!   graph Laplacian, singular for any non-empty circuit, so a solve
//!   reports [`SolverError::SingularSystem`] and queries keep returning 0.
//! - [`SolverMode::ModifiedNodal`] adds one branch-current unknown per
//!   voltage source and solves against a 0 V reference, yielding
//!   physically meaningful voltages.

mod engine;
mod nodal;
mod solution;

pub use engine::DcSolver;
pub use nodal::NodalSystem;
pub use solution::Solution;

use std::str::FromStr;

use crate::error::SolverError;

/// Pivot magnitudes below this are treated as zero during elimination.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Which voltage-source formulation the solver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverMode {
    /// Simplified current-injection model (the editor's historical behavior).
    #[default]
    Injection,
    /// Modified nodal analysis with branch currents and a ground reference.
    ModifiedNodal,
}

impl FromStr for SolverMode {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "injection" => Ok(SolverMode::Injection),
            "mna" | "modified-nodal" => Ok(SolverMode::ModifiedNodal),
            _ => Err(SolverError::UnknownSolverMode {
                mode: s.to_string(),
            }),
        }
    }
}
