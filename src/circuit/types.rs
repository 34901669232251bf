//! Core types for circuit representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// Index of a registered node, assigned in first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// The closed set of component kinds the editor can place.
///
/// Only [`ComponentKind::Resistor`] and [`ComponentKind::VoltageSource`]
/// contribute to the linear system; the remaining kinds are carried through
/// the model but stamp nothing in a DC analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Resistor,
    VoltageSource,
    Capacitor,
    Inductor,
    Led,
    Switch,
    Ground,
    Voltmeter,
    Ammeter,
}

impl ComponentKind {
    /// Canonical descriptor spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Resistor => "resistor",
            ComponentKind::VoltageSource => "voltageSource",
            ComponentKind::Capacitor => "capacitor",
            ComponentKind::Inductor => "inductor",
            ComponentKind::Led => "led",
            ComponentKind::Switch => "switch",
            ComponentKind::Ground => "ground",
            ComponentKind::Voltmeter => "voltmeter",
            ComponentKind::Ammeter => "ammeter",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resistor" => Ok(ComponentKind::Resistor),
            "voltageSource" => Ok(ComponentKind::VoltageSource),
            "capacitor" => Ok(ComponentKind::Capacitor),
            "inductor" => Ok(ComponentKind::Inductor),
            "led" => Ok(ComponentKind::Led),
            "switch" => Ok(ComponentKind::Switch),
            "ground" => Ok(ComponentKind::Ground),
            "voltmeter" => Ok(ComponentKind::Voltmeter),
            "ammeter" => Ok(ComponentKind::Ammeter),
            _ => Err(SolverError::unknown_kind(s)),
        }
    }
}

/// One circuit element, as exchanged with the rendering, persistence, and
/// UI collaborators.
///
/// `node1` and `node2` are stable, caller-chosen junction identifiers.
/// `value` is ohms for a resistor, volts for a voltage source, and the
/// declared magnitude for kinds that do not affect the DC solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub value: f64,
    pub node1: String,
    pub node2: String,
}

impl ComponentDescriptor {
    /// Create a descriptor.
    pub fn new(
        kind: ComponentKind,
        value: f64,
        node1: impl Into<String>,
        node2: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            value,
            node1: node1.into(),
            node2: node2.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_spelling_round_trips() {
        for kind in [
            ComponentKind::Resistor,
            ComponentKind::VoltageSource,
            ComponentKind::Capacitor,
            ComponentKind::Inductor,
            ComponentKind::Led,
            ComponentKind::Switch,
            ComponentKind::Ground,
            ComponentKind::Voltmeter,
            ComponentKind::Ammeter,
        ] {
            assert_eq!(kind.as_str().parse::<ComponentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "battery".parse::<ComponentKind>().unwrap_err();
        assert!(matches!(err, SolverError::UnknownComponentType { kind } if kind == "battery"));
    }

    #[test]
    fn test_descriptor_json_shape() {
        let descriptor = ComponentDescriptor::new(ComponentKind::VoltageSource, 5.0, "A", "B");
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "voltageSource",
                "value": 5.0,
                "node1": "A",
                "node2": "B",
            })
        );

        let parsed: ComponentDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, descriptor);
    }
}
