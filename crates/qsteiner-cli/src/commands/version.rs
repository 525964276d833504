//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Grover search over Steiner-tree candidates",
        style("qsteiner").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qsteiner-ir      Circuit representation (H, X, MCX)");
    println!("  qsteiner-sim     Statevector engine and shot sampler");
    println!("  qsteiner-grover  Index encoding, oracle, diffusion, decoding");
    println!("  qsteiner-enum    Classical Steiner candidate enumeration");
    println!("  qsteiner-cli     Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style(env!("CARGO_PKG_REPOSITORY")).underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
