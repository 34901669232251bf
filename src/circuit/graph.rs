//! Circuit model and node registry.

use std::collections::HashMap;

use crate::components::Component;
use crate::error::Result;

use super::types::{ComponentDescriptor, NodeId};
use super::validate::validate_descriptor;

/// The editable circuit: an ordered component list plus the set of nodes
/// those components reference, in first-seen order.
///
/// Node identifiers are opaque, caller-chosen strings. The first component
/// that references an identifier registers it; registration order defines
/// the index mapping used for matrix assembly, so rebuilding a circuit from
/// the same descriptor sequence reproduces the same indices.
#[derive(Debug, Default)]
pub struct Circuit {
    /// All components, in insertion order
    components: Vec<Component>,
    /// Mapping from node identifiers to dense indices
    node_map: HashMap<String, NodeId>,
    /// Node identifiers in first-seen order
    node_names: Vec<String>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a descriptor and append it, registering its terminals.
    ///
    /// On error the circuit is left unchanged.
    pub fn add(&mut self, descriptor: &ComponentDescriptor) -> Result<()> {
        validate_descriptor(descriptor)?;

        if descriptor.node1 == descriptor.node2 {
            log::warn!(
                "{} connects node '{}' to itself and will not affect the solution",
                descriptor.kind,
                descriptor.node1
            );
        }

        let n1 = self.register_node(&descriptor.node1);
        let n2 = self.register_node(&descriptor.node2);
        self.components
            .push(Component::from_descriptor(descriptor, [n1, n2]));
        Ok(())
    }

    /// Register a node identifier, returning its index. Idempotent.
    fn register_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.node_map.get(name) {
            return id;
        }
        let id = NodeId(self.node_names.len());
        self.node_map.insert(name.to_string(), id);
        self.node_names.push(name.to_string());
        id
    }

    /// Discard all components and nodes.
    pub fn clear(&mut self) {
        self.components.clear();
        self.node_map.clear();
        self.node_names.clear();
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    /// Node identifiers in registration order.
    pub fn node_names(&self) -> &[String] {
        &self.node_names
    }

    /// All components, in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Look up the index of a node identifier.
    pub fn node_index(&self, name: &str) -> Option<NodeId> {
        self.node_map.get(name).copied()
    }

    /// Get the identifier of a node.
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.node_names[node.0]
    }

    /// Re-emit the ordered descriptor sequence for the persistence layer.
    pub fn descriptors(&self) -> Vec<ComponentDescriptor> {
        self.components.iter().map(|c| c.descriptor(self)).collect()
    }

    /// Serialize the circuit as a JSON descriptor sequence.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.descriptors())?)
    }

    /// Rebuild a circuit from a JSON descriptor sequence.
    ///
    /// Components are added in sequence order, so node registration order
    /// matches the circuit the sequence was produced from.
    pub fn from_json(json: &str) -> Result<Self> {
        let descriptors: Vec<ComponentDescriptor> = serde_json::from_str(json)?;
        let mut circuit = Circuit::new();
        for descriptor in &descriptors {
            circuit.add(descriptor)?;
        }
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::ComponentKind;
    use crate::error::SolverError;

    fn descriptor(kind: ComponentKind, value: f64, node1: &str, node2: &str) -> ComponentDescriptor {
        ComponentDescriptor::new(kind, value, node1, node2)
    }

    #[test]
    fn test_nodes_register_in_first_seen_order() {
        let mut circuit = Circuit::new();
        circuit
            .add(&descriptor(ComponentKind::Resistor, 100.0, "a", "b"))
            .unwrap();
        circuit
            .add(&descriptor(ComponentKind::VoltageSource, 5.0, "b", "c"))
            .unwrap();
        circuit
            .add(&descriptor(ComponentKind::Resistor, 200.0, "c", "a"))
            .unwrap();

        assert_eq!(circuit.node_names(), ["a", "b", "c"]);
        assert_eq!(circuit.node_index("a"), Some(NodeId(0)));
        assert_eq!(circuit.node_index("c"), Some(NodeId(2)));
        assert_eq!(circuit.node_index("missing"), None);
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut circuit = Circuit::new();
        circuit
            .add(&descriptor(ComponentKind::Resistor, 100.0, "a", "b"))
            .unwrap();
        circuit
            .add(&descriptor(ComponentKind::Resistor, 200.0, "a", "b"))
            .unwrap();

        assert_eq!(circuit.node_count(), 2);
        assert_eq!(circuit.components().len(), 2);
    }

    #[test]
    fn test_rejected_add_leaves_circuit_unchanged() {
        let mut circuit = Circuit::new();
        circuit
            .add(&descriptor(ComponentKind::Resistor, 100.0, "a", "b"))
            .unwrap();

        let err = circuit
            .add(&descriptor(ComponentKind::Resistor, 0.0, "a", "short"))
            .unwrap_err();
        assert!(matches!(err, SolverError::MalformedComponent { .. }));

        assert_eq!(circuit.components().len(), 1);
        assert_eq!(circuit.node_names(), ["a", "b"]);
    }

    #[test]
    fn test_json_round_trip_preserves_components_and_node_order() {
        let mut circuit = Circuit::new();
        for d in [
            descriptor(ComponentKind::VoltageSource, 9.0, "vin", "gnd"),
            descriptor(ComponentKind::Ground, 0.0, "gnd", "gnd"),
            descriptor(ComponentKind::Resistor, 330.0, "vin", "led_a"),
            descriptor(ComponentKind::Led, 2.0, "led_a", "gnd"),
            descriptor(ComponentKind::Capacitor, 1e-6, "vin", "gnd"),
            descriptor(ComponentKind::Inductor, 1e-3, "vin", "gnd"),
            descriptor(ComponentKind::Switch, 1.0, "vin", "led_a"),
            descriptor(ComponentKind::Voltmeter, 0.0, "led_a", "gnd"),
            descriptor(ComponentKind::Ammeter, 0.0, "vin", "led_a"),
        ] {
            circuit.add(&d).unwrap();
        }

        let json = circuit.to_json().unwrap();
        let restored = Circuit::from_json(&json).unwrap();

        assert_eq!(restored.descriptors(), circuit.descriptors());
        assert_eq!(restored.node_names(), circuit.node_names());
    }

    #[test]
    fn test_unknown_kind_in_json_is_rejected() {
        let json = r#"[{"type": "battery", "value": 9.0, "node1": "a", "node2": "b"}]"#;
        assert!(matches!(
            Circuit::from_json(json),
            Err(SolverError::CircuitJson { .. })
        ));
    }
}
