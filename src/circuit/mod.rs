//! Circuit model and node registry.
//!
//! This module provides the editable representation of a circuit: the
//! ordered component list, the node registry in first-seen order, and the
//! descriptor boundary shared with the editor's other subsystems.

mod graph;
mod types;
mod validate;

pub use graph::Circuit;
pub use types::{ComponentDescriptor, ComponentKind, NodeId};
pub use validate::validate_descriptor;
