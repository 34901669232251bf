//! Solved node voltages and derived queries.

use std::collections::HashMap;

/// The result of one solve: a potential per registered node.
///
/// A default solution is empty, and every query on it returns 0. This
/// mirrors the editor's behavior of showing 0 V before the first solve and
/// after a reset instead of raising.
#[derive(Debug, Clone, Default)]
pub struct Solution {
    /// Node identifiers in registration order
    order: Vec<String>,
    /// Potential per node identifier
    voltages: HashMap<String, f64>,
}

impl Solution {
    /// Build a solution from node identifiers and their potentials.
    pub(crate) fn new(order: Vec<String>, voltages: HashMap<String, f64>) -> Self {
        Self { order, voltages }
    }

    /// Number of solved nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True before any successful solve and after a reset.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The potential at a node; 0 for identifiers absent from the solution.
    pub fn node_voltage(&self, node: &str) -> f64 {
        self.voltages.get(node).copied().unwrap_or(0.0)
    }

    /// The magnitude of the potential difference between two nodes.
    pub fn voltage_between(&self, node1: &str, node2: &str) -> f64 {
        (self.node_voltage(node1) - self.node_voltage(node2)).abs()
    }

    /// The signed current from `node1` to `node2` through a resistance
    /// supplied by the caller, by Ohm's law.
    pub fn current_through(&self, node1: &str, node2: &str, resistance: f64) -> f64 {
        (self.node_voltage(node1) - self.node_voltage(node2)) / resistance
    }

    /// Iterate over `(identifier, potential)` in node registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.node_voltage(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Solution {
        let order = vec!["a".to_string(), "b".to_string()];
        let voltages = HashMap::from([("a".to_string(), 3.0), ("b".to_string(), 5.0)]);
        Solution::new(order, voltages)
    }

    #[test]
    fn test_default_solution_answers_zero() {
        let solution = Solution::default();
        assert!(solution.is_empty());
        assert_eq!(solution.node_voltage("anything"), 0.0);
        assert_eq!(solution.voltage_between("a", "b"), 0.0);
        assert_eq!(solution.current_through("a", "b", 1000.0), 0.0);
    }

    #[test]
    fn test_voltage_between_is_unsigned() {
        let solution = sample();
        assert_eq!(solution.voltage_between("a", "b"), 2.0);
        assert_eq!(solution.voltage_between("b", "a"), 2.0);
    }

    #[test]
    fn test_current_is_signed() {
        let solution = sample();
        assert_eq!(solution.current_through("a", "b", 100.0), -0.02);
        assert_eq!(solution.current_through("b", "a", 100.0), 0.02);
    }

    #[test]
    fn test_unknown_node_reads_as_zero() {
        let solution = sample();
        assert_eq!(solution.voltage_between("a", "floating"), 3.0);
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let solution = sample();
        let names: Vec<&str> = solution.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
