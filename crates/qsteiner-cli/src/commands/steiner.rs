//! Steiner command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use tracing::info;

use qsteiner_enum::{Candidate, ProblemSpec, SteinerProblem};
use qsteiner_grover::{GroverSearch, SearchConfig, SearchOutcome};

use super::common::{OutputFormat, print_histogram, report_most_likely};

/// Rank marked by the oracle: the list is sorted by cost.
const BEST_RANK: u64 = 0;

#[derive(Serialize)]
struct SteinerReport<'a> {
    candidates: &'a [Candidate],
    outcome: Option<&'a SearchOutcome>,
    top: Option<&'a Candidate>,
}

/// Execute the steiner command.
pub fn execute(graph: Option<&Path>, config: &SearchConfig, format: OutputFormat) -> Result<()> {
    let problem = match graph {
        Some(path) => {
            let spec = ProblemSpec::from_file(path)
                .with_context(|| format!("Failed to load problem: {}", path.display()))?;
            SteinerProblem::from_spec(&spec)?
        }
        None => SteinerProblem::demo(),
    };
    info!(
        nodes = problem.node_count(),
        edges = problem.edge_count(),
        "loaded problem"
    );

    let candidates = problem.candidates()?;
    let table = format == OutputFormat::Table;

    if table {
        print_candidates(&problem, &candidates);
    }

    if candidates.is_empty() {
        if table {
            println!(
                "\n{} No feasible candidates found (increase graph connectivity).",
                style("!").yellow().bold()
            );
        } else {
            let report = SteinerReport {
                candidates: &candidates,
                outcome: None,
                top: None,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        return Ok(());
    }

    let n = candidates.len() as u64;
    let outcome = GroverSearch::new(n, BEST_RANK)
        .with_config(config.clone())
        .run()?;

    if !table {
        let top = outcome
            .most_likely()
            .ok()
            .and_then(|i| candidates.get(i as usize));
        let report = SteinerReport {
            candidates: &candidates,
            outcome: Some(&outcome),
            top,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_histogram(&outcome, |i| {
        candidates.get(i as usize).map(ToString::to_string)
    });

    if let Some(index) = report_most_likely(&outcome)? {
        if let Some(top) = candidates.get(index as usize) {
            println!(
                "\n  Grover top index: {}  subset: {}",
                style(index).green().bold(),
                style(top).cyan()
            );
        }
    }
    Ok(())
}

fn print_candidates(problem: &SteinerProblem, candidates: &[Candidate]) {
    let terminals: Vec<String> = problem.terminals().map(|t| t.to_string()).collect();
    println!(
        "{} {} nodes, {} edges, terminals {{{}}}",
        style("→").cyan().bold(),
        problem.node_count(),
        problem.edge_count(),
        terminals.join(", ")
    );
    println!("\nCandidates (subset, cost):");
    for (i, candidate) in candidates.iter().enumerate() {
        println!("  {:>2}: {}", style(i).cyan(), candidate);
    }
}
