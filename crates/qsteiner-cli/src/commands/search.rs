//! Search command implementation.

use anyhow::Result;
use console::style;

use qsteiner_grover::{GroverSearch, SearchConfig};

use super::common::{OutputFormat, print_histogram, report_most_likely};

/// Execute the search command.
pub fn execute(
    candidates: u64,
    target: u64,
    config: &SearchConfig,
    format: OutputFormat,
) -> Result<()> {
    let search = GroverSearch::new(candidates, target).with_config(config.clone());
    let outcome = search.run()?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} Searching for index {} among {} candidates",
        style("→").cyan().bold(),
        style(target).green(),
        style(candidates).yellow()
    );
    print_histogram(&outcome, |_| None);

    if let Some(index) = report_most_likely(&outcome)? {
        println!("\n  Most likely index: {}", style(index).green().bold());
    }
    Ok(())
}
