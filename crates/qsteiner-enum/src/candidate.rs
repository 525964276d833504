//! A feasible node subset and its tree cost.

use std::fmt;

use serde::Serialize;

/// Node subset covering every terminal, with its spanning-tree cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    nodes: Vec<u32>,
    cost: f64,
}

impl Candidate {
    pub(crate) fn new(nodes: Vec<u32>, cost: f64) -> Self {
        Self { nodes, cost }
    }

    /// Node labels, ascending.
    pub fn nodes(&self) -> &[u32] {
        &self.nodes
    }

    /// Total weight of a minimum spanning tree over the induced subgraph.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "), cost = {}", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let c = Candidate::new(vec![0, 2, 3], 4.0);
        assert_eq!(c.to_string(), "(0, 2, 3), cost = 4");
    }
}
