//! Circuit command implementation.

use anyhow::Result;
use console::style;

use qsteiner_grover::{GroverSearch, Iterations, SearchConfig};

use super::common::CircuitFormat;

/// Execute the circuit command.
pub fn execute(
    candidates: u64,
    target: u64,
    iterations: Iterations,
    format: CircuitFormat,
) -> Result<()> {
    let config = SearchConfig {
        iterations,
        ..SearchConfig::default()
    };
    let circuit = GroverSearch::new(candidates, target)
        .with_config(config)
        .circuit()?;

    match format {
        CircuitFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&circuit)?);
        }
        CircuitFormat::Text => {
            println!(
                "{} {} qubits, {} gates, depth {}",
                style("→").cyan().bold(),
                circuit.num_qubits(),
                circuit.len(),
                circuit.depth()
            );
            let ops: Vec<String> = circuit
                .count_ops()
                .iter()
                .map(|(name, n)| format!("{name}: {n}"))
                .collect();
            println!("  {}", style(ops.join(", ")).dim());
            println!();
            print!("{circuit}");
        }
    }
    Ok(())
}
