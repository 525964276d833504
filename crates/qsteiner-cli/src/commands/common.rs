//! Shared helpers for CLI commands.

use clap::ValueEnum;
use console::style;

use qsteiner_grover::{GroverError, SearchOutcome};

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Output format for the circuit listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CircuitFormat {
    Text,
    Json,
}

/// Print the decoded histogram, most frequent index first.
///
/// `label` renders extra context for an index (e.g. the candidate subset).
pub fn print_histogram(outcome: &SearchOutcome, label: impl Fn(u64) -> Option<String>) {
    println!(
        "\n{} Results ({} shots, {} rounds, {} qubits + ancilla):",
        style("✓").green().bold(),
        outcome.shots,
        outcome.rounds,
        outcome.width
    );

    let mut sorted: Vec<(u64, u64)> = outcome.histogram.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let total = f64::from(outcome.shots);

    for (index, count) in sorted.iter().take(16) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);
        let extra = label(*index).map(|l| format!("  {l}")).unwrap_or_default();

        println!(
            "  {:>4}: {:>6} ({:>5.2}%) {}{}",
            style(index).cyan(),
            count,
            prob,
            style(bar).green(),
            style(extra).dim()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more indices", sorted.len() - 16);
    }

    if outcome.histogram.dropped() > 0 {
        println!(
            "  {} shots decoded to unused indices ≥ {} and were dropped",
            style(outcome.histogram.dropped()).yellow(),
            outcome.n_candidates
        );
    }

    println!(
        "\n  Target probability: {}",
        style(format!("{:.4}", outcome.target_probability)).yellow()
    );
}

/// The winning index, or `None` after printing the no-valid-measurement
/// notice. Other errors propagate.
pub fn report_most_likely(outcome: &SearchOutcome) -> anyhow::Result<Option<u64>> {
    match outcome.most_likely() {
        Ok(index) => Ok(Some(index)),
        Err(e @ GroverError::NoValidMeasurement { .. }) => {
            println!("\n{} {e}", style("!").yellow().bold());
            println!("  Increase shots or reduce the gap between N and 2^n.");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
