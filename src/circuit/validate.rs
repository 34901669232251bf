//! Component descriptor validation.

use crate::error::{Result, SolverError};

use super::types::{ComponentDescriptor, ComponentKind};

/// Validate a component descriptor before it is admitted into the circuit.
///
/// Checks:
/// - Both terminals name a node
/// - The value is a usable number
/// - Resistors have a non-zero resistance
pub fn validate_descriptor(descriptor: &ComponentDescriptor) -> Result<()> {
    if descriptor.node1.is_empty() || descriptor.node2.is_empty() {
        return Err(SolverError::malformed(format!(
            "{} is missing a node identifier",
            descriptor.kind
        )));
    }

    if !descriptor.value.is_finite() {
        return Err(SolverError::malformed(format!(
            "{} has a non-finite value",
            descriptor.kind
        )));
    }

    if descriptor.kind == ComponentKind::Resistor && descriptor.value == 0.0 {
        return Err(SolverError::malformed(
            "resistor with zero resistance has no conductance",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_node_identifier() {
        let descriptor = ComponentDescriptor::new(ComponentKind::Resistor, 100.0, "", "B");
        assert!(matches!(
            validate_descriptor(&descriptor),
            Err(SolverError::MalformedComponent { .. })
        ));
    }

    #[test]
    fn test_non_finite_value() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let descriptor = ComponentDescriptor::new(ComponentKind::Voltmeter, value, "A", "B");
            assert!(matches!(
                validate_descriptor(&descriptor),
                Err(SolverError::MalformedComponent { .. })
            ));
        }
    }

    #[test]
    fn test_zero_resistance() {
        let descriptor = ComponentDescriptor::new(ComponentKind::Resistor, 0.0, "A", "B");
        assert!(matches!(
            validate_descriptor(&descriptor),
            Err(SolverError::MalformedComponent { .. })
        ));
    }

    #[test]
    fn test_valid_descriptors_pass() {
        let resistor = ComponentDescriptor::new(ComponentKind::Resistor, 470.0, "A", "B");
        assert!(validate_descriptor(&resistor).is_ok());

        // Zero volts is a legal source value
        let source = ComponentDescriptor::new(ComponentKind::VoltageSource, 0.0, "A", "B");
        assert!(validate_descriptor(&source).is_ok());
    }
}
