//! List rules command implementation.

use sqlint_rules::default_registry;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<14} {:<24} {:<8} {:<5} Description",
        "Code", "Name", "Groups", "Fix"
    );
    println!("{}", "-".repeat(90));

    for entry in default_registry().entries() {
        println!(
            "{:<14} {:<24} {:<8} {:<5} {}",
            entry.code,
            entry.name,
            entry.groups.join(","),
            if entry.is_fix_compatible { "yes" } else { "no" },
            entry.description
        );
        if !entry.config_keywords.is_empty() {
            println!("{:<14} options: {}", "", entry.config_keywords.join(", "));
        }
    }

    println!("\nUse --rules to select by code, name, or group, e.g.:");
    println!("  sqlint check --rules Example_GG01");
    println!("  sqlint check --rules forbid-select-wildcard,camel-case-columns");
    println!("  sqlint check --rules all");
}
