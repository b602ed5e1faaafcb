//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - observable algebra and measurement IR tooling",
        style("qmeas").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qmeas-ir   Observables, gates, result types and circuit IR");
    println!("  qmeas-cli  Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
