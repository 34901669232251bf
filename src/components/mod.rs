//! Component models for the DC circuit editor.
//!
//! The editor places a fixed set of component kinds:
//! - Linear: Resistor, Capacitor, Inductor
//! - Sources: Voltage Source, Ground
//! - Indicators and instruments: LED, Switch, Voltmeter, Ammeter
//!
//! Only resistors and voltage sources participate in the DC linear system;
//! every other kind carries its declared properties through the model with
//! a no-op stamp.

mod indicators;
mod linear;
mod sources;

pub use indicators::{Ammeter, Led, Switch, Voltmeter};
pub use linear::{Capacitor, Inductor, Resistor};
pub use sources::{Ground, VoltageSource};

use crate::circuit::{Circuit, ComponentDescriptor, ComponentKind, NodeId};

/// A circuit component.
#[derive(Debug, Clone)]
pub enum Component {
    Resistor(Resistor),
    VoltageSource(VoltageSource),
    Capacitor(Capacitor),
    Inductor(Inductor),
    Led(Led),
    Switch(Switch),
    Ground(Ground),
    Voltmeter(Voltmeter),
    Ammeter(Ammeter),
}

impl Component {
    /// Build a component from a validated descriptor and its registered
    /// terminal indices.
    pub fn from_descriptor(descriptor: &ComponentDescriptor, nodes: [NodeId; 2]) -> Self {
        match descriptor.kind {
            ComponentKind::Resistor => Component::Resistor(Resistor::new(nodes, descriptor.value)),
            ComponentKind::VoltageSource => {
                Component::VoltageSource(VoltageSource::new(nodes, descriptor.value))
            }
            ComponentKind::Capacitor => {
                Component::Capacitor(Capacitor::new(nodes, descriptor.value))
            }
            ComponentKind::Inductor => Component::Inductor(Inductor::new(nodes, descriptor.value)),
            ComponentKind::Led => Component::Led(Led::new(nodes, descriptor.value)),
            ComponentKind::Switch => Component::Switch(Switch::new(nodes, descriptor.value > 0.5)),
            ComponentKind::Ground => Component::Ground(Ground::new(nodes)),
            ComponentKind::Voltmeter => Component::Voltmeter(Voltmeter::new(nodes)),
            ComponentKind::Ammeter => Component::Ammeter(Ammeter::new(nodes)),
        }
    }

    /// The kind tag of this component.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Resistor(_) => ComponentKind::Resistor,
            Component::VoltageSource(_) => ComponentKind::VoltageSource,
            Component::Capacitor(_) => ComponentKind::Capacitor,
            Component::Inductor(_) => ComponentKind::Inductor,
            Component::Led(_) => ComponentKind::Led,
            Component::Switch(_) => ComponentKind::Switch,
            Component::Ground(_) => ComponentKind::Ground,
            Component::Voltmeter(_) => ComponentKind::Voltmeter,
            Component::Ammeter(_) => ComponentKind::Ammeter,
        }
    }

    /// The two terminal nodes.
    pub fn nodes(&self) -> [NodeId; 2] {
        match self {
            Component::Resistor(r) => r.nodes,
            Component::VoltageSource(v) => v.nodes,
            Component::Capacitor(c) => c.nodes,
            Component::Inductor(l) => l.nodes,
            Component::Led(d) => d.nodes,
            Component::Switch(s) => s.nodes,
            Component::Ground(g) => g.nodes,
            Component::Voltmeter(m) => m.nodes,
            Component::Ammeter(m) => m.nodes,
        }
    }

    /// Reconstruct the boundary descriptor for this component.
    pub fn descriptor(&self, circuit: &Circuit) -> ComponentDescriptor {
        let [n1, n2] = self.nodes();
        let value = match self {
            Component::Resistor(r) => r.resistance,
            Component::VoltageSource(v) => v.voltage,
            Component::Capacitor(c) => c.capacitance,
            Component::Inductor(l) => l.inductance,
            Component::Led(d) => d.forward_voltage,
            Component::Switch(s) => {
                if s.closed {
                    1.0
                } else {
                    0.0
                }
            }
            Component::Ground(_) | Component::Voltmeter(_) | Component::Ammeter(_) => 0.0,
        };
        ComponentDescriptor::new(
            self.kind(),
            value,
            circuit.node_name(n1),
            circuit.node_name(n2),
        )
    }
}
