//! Classical candidate generation for Steiner-like subproblems.
//!
//! A [`SteinerProblem`] is a weighted undirected graph plus a set of
//! terminal nodes. Every node subset that contains all terminals and
//! induces a connected subgraph is a candidate; its cost is the total
//! weight of a minimum spanning tree of that subgraph. Candidates come
//! back sorted by cost, so rank 0 is the cheapest and is what the
//! quantum search marks.
//!
//! ```rust
//! use qsteiner_enum::SteinerProblem;
//!
//! let problem = SteinerProblem::demo();
//! let candidates = problem.candidates().unwrap();
//!
//! assert_eq!(candidates.len(), 3);
//! assert_eq!(candidates[0].nodes(), &[0, 2, 3]);
//! assert_eq!(candidates[0].cost(), 4.0);
//! ```

pub mod candidate;
pub mod error;
pub mod problem;

pub use candidate::Candidate;
pub use error::{EnumError, EnumResult};
pub use problem::{MAX_NODES, ProblemSpec, SteinerProblem};
