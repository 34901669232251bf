//! Voltlab - DC circuit solver
//!
//! Solves a serialized circuit (a JSON array of component descriptors) and
//! prints the voltage at every node.
//!
//! # Usage
//!
//! ```bash
//! voltlab circuit.json --mode mna
//! RUST_LOG=debug voltlab circuit.json
//! ```

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use voltlab_core::{error::Result, Circuit, DcSolver, SolverError, SolverMode};

/// DC circuit solver for serialized editor circuits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit file (JSON array of component descriptors)
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Voltage-source formulation: 'injection' or 'mna'
    #[arg(short, long, default_value = "injection")]
    mode: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let text = fs::read_to_string(&args.circuit_file).map_err(|source| SolverError::CircuitFile {
        path: args.circuit_file.display().to_string(),
        source,
    })?;

    let circuit = Circuit::from_json(&text)?;
    let mode: SolverMode = args.mode.parse()?;

    let mut solver = DcSolver::from_circuit(circuit, mode);
    let solution = solver.solve()?;

    for (node, voltage) in solution.iter() {
        println!("{node}: {voltage:.6} V");
    }

    Ok(())
}
