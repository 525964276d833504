//! Steiner problem definition and candidate enumeration.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use petgraph::algo::{connected_components, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::candidate::Candidate;
use crate::error::{EnumError, EnumResult};

/// Largest graph whose subsets are enumerated.
pub const MAX_NODES: usize = 20;

/// Serialized problem: weighted edges `[u, v, w]` plus the terminal labels.
///
/// ```yaml
/// edges:
///   - [0, 1, 2.0]
///   - [2, 3, 1.0]
/// terminals: [0, 3]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemSpec {
    pub edges: Vec<(u32, u32, f64)>,
    pub terminals: Vec<u32>,
}

impl ProblemSpec {
    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> EnumResult<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json(content: &str) -> EnumResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from disk. Files ending in `.json` are read as JSON, everything
    /// else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> EnumResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// The four-node example graph with terminals 0 and 3.
    pub fn demo() -> Self {
        Self {
            edges: vec![
                (0, 1, 2.0),
                (1, 2, 2.0),
                (0, 2, 3.0),
                (2, 3, 1.0),
                (1, 3, 4.0),
            ],
            terminals: vec![0, 3],
        }
    }
}

/// Weighted undirected graph with a terminal set.
#[derive(Debug, Clone)]
pub struct SteinerProblem {
    graph: UnGraph<u32, f64>,
    terminals: BTreeSet<u32>,
}

impl SteinerProblem {
    /// Build and validate a problem.
    pub fn new(
        edges: &[(u32, u32, f64)],
        terminals: impl IntoIterator<Item = u32>,
    ) -> EnumResult<Self> {
        for &(u, v, weight) in edges {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EnumError::InvalidWeight { u, v, weight });
            }
        }

        let problem = Self::build(edges, terminals);
        if problem.terminals.is_empty() {
            return Err(EnumError::NoTerminals);
        }
        if let Some(&missing) = problem
            .terminals
            .iter()
            .find(|t| problem.node_index(**t).is_none())
        {
            return Err(EnumError::UnknownTerminal(missing));
        }
        Ok(problem)
    }

    /// Build from a parsed [`ProblemSpec`].
    pub fn from_spec(spec: &ProblemSpec) -> EnumResult<Self> {
        Self::new(&spec.edges, spec.terminals.iter().copied())
    }

    /// The built-in example problem.
    pub fn demo() -> Self {
        let spec = ProblemSpec::demo();
        Self::build(&spec.edges, spec.terminals)
    }

    // Nodes are added in ascending label order so `NodeIndex` order matches
    // label order.
    fn build(edges: &[(u32, u32, f64)], terminals: impl IntoIterator<Item = u32>) -> Self {
        let labels: BTreeSet<u32> = edges.iter().flat_map(|&(u, v, _)| [u, v]).collect();

        let mut graph = UnGraph::with_capacity(labels.len(), edges.len());
        let index: BTreeMap<u32, NodeIndex> = labels
            .into_iter()
            .map(|label| (label, graph.add_node(label)))
            .collect();
        for &(u, v, weight) in edges {
            graph.add_edge(index[&u], index[&v], weight);
        }

        Self {
            graph,
            terminals: terminals.into_iter().collect(),
        }
    }

    fn node_index(&self, label: u32) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&idx| self.graph[idx] == label)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node labels, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.graph.node_weights().copied()
    }

    /// Terminal labels, ascending.
    pub fn terminals(&self) -> impl Iterator<Item = u32> + '_ {
        self.terminals.iter().copied()
    }

    /// Minimum spanning tree weight of the subgraph induced by `nodes`, or
    /// `None` if that subgraph is disconnected or empty.
    pub fn spanning_cost(&self, nodes: &[u32]) -> Option<f64> {
        let keep: BTreeSet<u32> = nodes.iter().copied().collect();
        let sub = self.graph.filter_map(
            |_, label| keep.contains(label).then_some(*label),
            |_, weight| Some(*weight),
        );
        if sub.node_count() == 0 || connected_components(&sub) != 1 {
            return None;
        }
        let cost: f64 = min_spanning_tree(&sub)
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .sum();
        Some(cost)
    }

    /// Every terminal-covering connected subset, sorted by ascending cost.
    ///
    /// Subsets are generated by size, then lexicographically; the sort is
    /// stable so equal-cost candidates keep that order.
    #[instrument(skip(self), fields(nodes = self.node_count(), terminals = self.terminals.len()))]
    pub fn candidates(&self) -> EnumResult<Vec<Candidate>> {
        let n = self.node_count();
        if n > MAX_NODES {
            return Err(EnumError::TooManyNodes {
                nodes: n,
                max: MAX_NODES,
            });
        }

        let labels: Vec<u32> = self.nodes().collect();
        let mut candidates = Vec::new();
        let mut examined = 0usize;

        for size in 1..=n {
            for combo in Combinations::new(n, size) {
                let subset: Vec<u32> = combo.iter().map(|&i| labels[i]).collect();
                if !self.terminals.iter().all(|t| subset.contains(t)) {
                    continue;
                }
                examined += 1;
                if let Some(cost) = self.spanning_cost(&subset) {
                    candidates.push(Candidate::new(subset, cost));
                }
            }
        }

        candidates.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
        debug!(examined, feasible = candidates.len(), "enumerated candidates");
        Ok(candidates)
    }
}

/// Lexicographic `r`-combinations of `0..n`.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    fn new(n: usize, r: usize) -> Self {
        Self {
            n,
            indices: (0..r).collect(),
            started: false,
            done: r > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let r = self.indices.len();
        let Some(i) = (0..r).rev().find(|&i| self.indices[i] != i + self.n - r) else {
            self.done = true;
            return None;
        };
        self.indices[i] += 1;
        for j in i + 1..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations_order() {
        let all: Vec<_> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
        assert_eq!(Combinations::new(5, 5).count(), 1);
        assert_eq!(Combinations::new(3, 4).count(), 0);
        assert_eq!(Combinations::new(6, 3).count(), 20);
    }

    #[test]
    fn test_demo_candidates() {
        let candidates = SteinerProblem::demo().candidates().unwrap();
        let summary: Vec<(Vec<u32>, f64)> = candidates
            .iter()
            .map(|c| (c.nodes().to_vec(), c.cost()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (vec![0, 2, 3], 4.0),
                (vec![0, 1, 2, 3], 5.0),
                (vec![0, 1, 3], 6.0),
            ]
        );
    }

    #[test]
    fn test_spanning_cost() {
        let problem = SteinerProblem::demo();
        assert_eq!(problem.spanning_cost(&[2, 3]), Some(1.0));
        assert_eq!(problem.spanning_cost(&[1]), Some(0.0));
        assert_eq!(problem.spanning_cost(&[0, 3]), None);
        assert_eq!(problem.spanning_cost(&[]), None);
    }

    #[test]
    fn test_validation() {
        let edges = [(0, 1, 1.0)];
        assert!(matches!(
            SteinerProblem::new(&edges, Vec::new()),
            Err(EnumError::NoTerminals)
        ));
        assert!(matches!(
            SteinerProblem::new(&edges, [0, 7]),
            Err(EnumError::UnknownTerminal(7))
        ));
        assert!(matches!(
            SteinerProblem::new(&[(0, 1, -1.0)], [0]),
            Err(EnumError::InvalidWeight { u: 0, v: 1, .. })
        ));
        assert!(matches!(
            SteinerProblem::new(&[(0, 1, f64::NAN)], [0]),
            Err(EnumError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_too_many_nodes() {
        let edges: Vec<_> = (0..MAX_NODES as u32).map(|i| (i, i + 1, 1.0)).collect();
        let problem = SteinerProblem::new(&edges, [0]).unwrap();
        assert_eq!(problem.node_count(), MAX_NODES + 1);
        assert!(matches!(
            problem.candidates(),
            Err(EnumError::TooManyNodes { nodes: 21, max: 20 })
        ));
    }
}
